//! Workspace folder set and path rewriting

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_FOLDER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying a workspace folder.
///
/// Carried by folder nodes in the script tree for sort-order lookup
/// only; it never implies ownership of the folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceFolderId(u64);

impl WorkspaceFolderId {
    fn next() -> Self {
        Self(NEXT_FOLDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One host-known project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    pub id: WorkspaceFolderId,
    /// Display name shown as the rewritten path's first segment
    pub name: String,
    /// Absolute root path, without a trailing separator
    pub root: String,
}

impl WorkspaceFolder {
    pub fn new(name: impl Into<String>, root: impl Into<String>) -> Self {
        let mut root = root.into();
        while root.len() > 1 && root.ends_with('/') {
            root.pop();
        }
        Self {
            id: WorkspaceFolderId::next(),
            name: name.into(),
            root,
        }
    }

    /// Construct a folder whose display name is the root's basename
    pub fn from_root(root: impl Into<String>) -> Self {
        let root = root.into();
        let name = root
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(root.as_str())
            .to_string();
        Self::new(name, root)
    }
}

/// Result of mapping a script path against the workspace folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The (possibly rewritten) path to insert into the tree
    pub path: String,
    /// The matching folder, if any
    pub folder: Option<WorkspaceFolderId>,
}

/// The host's ordered set of workspace folders.
///
/// Enumeration order is the host-supplied order; it doubles as the
/// sort priority of folder-rooted subtrees in the script tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceFolders {
    folders: Vec<WorkspaceFolder>,
}

impl WorkspaceFolders {
    pub fn new(folders: Vec<WorkspaceFolder>) -> Self {
        Self { folders }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkspaceFolder> {
        self.folders.iter()
    }

    /// Rewrite a script path against the folder set.
    ///
    /// The first folder (in enumeration order) whose root is a prefix
    /// of the path wins; its root is replaced by the folder's display
    /// name. There is no longest-prefix tie-break when several folders
    /// could match. A miss returns the path verbatim with no folder.
    pub fn rewrite(&self, path: &str) -> Rewrite {
        for folder in &self.folders {
            if let Some(rest) = strip_root(path, &folder.root) {
                return Rewrite {
                    path: format!("{}{}", folder.name, rest),
                    folder: Some(folder.id),
                };
            }
        }
        Rewrite {
            path: path.to_string(),
            folder: None,
        }
    }

    /// Current sort position of a folder, if it is still part of the set
    pub fn position(&self, id: WorkspaceFolderId) -> Option<usize> {
        self.folders.iter().position(|folder| folder.id == id)
    }
}

/// Strip `root` off the front of `path`, honoring segment boundaries.
///
/// Returns the remainder including its leading separator, so the
/// caller can append it straight after the display name.
fn strip_root<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(root)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_inside_folder() {
        let folders = WorkspaceFolders::new(vec![WorkspaceFolder::from_root("/home/me/proj")]);
        let rewrite = folders.rewrite("/home/me/proj/src/x.js");
        assert_eq!(rewrite.path, "proj/src/x.js");
        assert!(rewrite.folder.is_some());
    }

    #[test]
    fn test_rewrite_outside_folders_is_verbatim() {
        let folders = WorkspaceFolders::new(vec![WorkspaceFolder::from_root("/home/me/proj")]);
        let rewrite = folders.rewrite("<internal>/fs.js");
        assert_eq!(rewrite.path, "<internal>/fs.js");
        assert_eq!(rewrite.folder, None);
    }

    #[test]
    fn test_rewrite_respects_segment_boundary() {
        let folders = WorkspaceFolders::new(vec![WorkspaceFolder::from_root("/home/me/proj")]);
        // "/home/me/project2" shares a string prefix but not a path prefix
        let rewrite = folders.rewrite("/home/me/project2/x.js");
        assert_eq!(rewrite.path, "/home/me/project2/x.js");
        assert_eq!(rewrite.folder, None);
    }

    #[test]
    fn test_rewrite_first_match_wins() {
        let outer = WorkspaceFolder::from_root("/home/me");
        let inner = WorkspaceFolder::from_root("/home/me/proj");
        let folders = WorkspaceFolders::new(vec![outer.clone(), inner]);

        let rewrite = folders.rewrite("/home/me/proj/src/x.js");
        assert_eq!(rewrite.path, "me/proj/src/x.js");
        assert_eq!(rewrite.folder, Some(outer.id));
    }

    #[test]
    fn test_position_follows_enumeration_order() {
        let a = WorkspaceFolder::from_root("/w/a");
        let b = WorkspaceFolder::from_root("/w/b");
        let folders = WorkspaceFolders::new(vec![a.clone(), b.clone()]);

        assert_eq!(folders.position(a.id), Some(0));
        assert_eq!(folders.position(b.id), Some(1));

        let gone = WorkspaceFolder::from_root("/w/c");
        assert_eq!(folders.position(gone.id), None);
    }
}
