//! Categorized child ordering
//!
//! Session-level children render in three bands: workspace-folder
//! roots first (in the host's folder order), everything else
//! alphabetically in the middle, and the synthetic internal-scripts
//! node last. Within a band, labels compare case-insensitively.

use std::cmp::Ordering;

use lens_workspace::WorkspaceFolders;

use crate::node::{Node, NodeKind};

/// Sort band of a node. Derived ordering gives
/// `Folder(0) < Folder(1) < … < Other < Internals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    /// Rooted at the workspace folder currently at this index
    Folder(usize),
    /// Plain alphabetical middle band
    Other,
    /// Internal-scripts namespace, always last
    Internals,
}

/// Pure category function over the node tag plus payload.
///
/// A folder node whose workspace folder has left the current set falls
/// back into the middle band.
pub fn category(node: &Node, folders: &WorkspaceFolders, internals_label: &str) -> Category {
    if let NodeKind::Folder { folder } = &node.kind {
        if let Some(index) = folders.position(*folder) {
            return Category::Folder(index);
        }
    }
    if node.label == internals_label {
        return Category::Internals;
    }
    Category::Other
}

/// 2-key comparator: category, then case-insensitive label
pub fn compare(
    a: &Node,
    b: &Node,
    folders: &WorkspaceFolders,
    internals_label: &str,
) -> Ordering {
    category(a, folders, internals_label)
        .cmp(&category(b, folders, internals_label))
        .then_with(|| a.label.to_lowercase().cmp(&b.label.to_lowercase()))
        .then_with(|| a.label.cmp(&b.label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::CollapsibleState;
    use lens_workspace::WorkspaceFolder;

    const INTERNALS: &str = "<node_internals>";

    #[test]
    fn test_category_band_order() {
        assert!(Category::Folder(0) < Category::Folder(1));
        assert!(Category::Folder(99) < Category::Other);
        assert!(Category::Other < Category::Internals);
    }

    #[test]
    fn test_folder_roots_sort_before_others_and_internals_last() {
        let a = WorkspaceFolder::from_root("/w/A");
        let b = WorkspaceFolder::from_root("/w/B");
        let folders = WorkspaceFolders::new(vec![a.clone(), b.clone()]);

        let mut parent = Node::new_plain("session", CollapsibleState::Expanded);
        parent.ensure_child(Node::new_plain(INTERNALS, CollapsibleState::Collapsed));
        parent.ensure_child(Node::new_plain("zother", CollapsibleState::Expanded));
        parent.ensure_child(Node::new_folder("B", b.id, CollapsibleState::Expanded));
        parent.ensure_child(Node::new_plain("another", CollapsibleState::Expanded));
        parent.ensure_child(Node::new_folder("A", a.id, CollapsibleState::Expanded));

        let labels: Vec<&str> = parent
            .children_by(|x, y| compare(x, y, &folders, INTERNALS))
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["A", "B", "another", "zother", INTERNALS]);
    }

    #[test]
    fn test_stale_folder_ref_falls_back_to_middle_band() {
        let kept = WorkspaceFolder::from_root("/w/kept");
        let dropped = WorkspaceFolder::from_root("/w/dropped");
        let folders = WorkspaceFolders::new(vec![kept.clone()]);

        let orphan = Node::new_folder("dropped", dropped.id, CollapsibleState::Expanded);
        assert_eq!(category(&orphan, &folders, INTERNALS), Category::Other);

        let rooted = Node::new_folder("kept", kept.id, CollapsibleState::Expanded);
        assert_eq!(category(&rooted, &folders, INTERNALS), Category::Folder(0));
    }
}
