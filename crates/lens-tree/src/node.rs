//! Tree node data structure

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use lens_adapter::SessionInfo;
use lens_workspace::WorkspaceFolderId;

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier assigned to each node in the script tree.
///
/// Handed to the host renderer so it can address nodes across
/// `children()` calls without holding references into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the host should render a node's expansion affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapsibleState {
    /// Leaf; cannot be expanded
    None,
    Collapsed,
    Expanded,
}

/// Command attached to a leaf that represents an actual loaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCommand {
    /// Session the script belongs to
    pub session_id: String,
    /// Full path as reported by the debuggee
    pub path: String,
}

/// Tagged node variant.
///
/// `Folder` carries the workspace-folder handle for sort-order lookup
/// only. `Session` carries the session identity and the lazy-fetch
/// flag; `initialized` flips true exactly once, on the first
/// child-enumeration request.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Plain,
    Folder { folder: WorkspaceFolderId },
    Session { info: SessionInfo, initialized: bool },
}

/// A labeled tree node with a unique-keyed child set.
///
/// Children are stored unordered; rendered order is computed on read
/// (see [`crate::compare`]). Invariants: a child's map key equals its
/// label, and a node with children never has `CollapsibleState::None`.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub kind: NodeKind,
    pub collapsible: CollapsibleState,
    pub open_command: Option<OpenCommand>,
    children: HashMap<String, Node>,
}

impl Node {
    pub fn new_plain(label: impl Into<String>, collapsible: CollapsibleState) -> Self {
        Self {
            id: NodeId::new(),
            label: label.into(),
            kind: NodeKind::Plain,
            collapsible,
            open_command: None,
            children: HashMap::new(),
        }
    }

    pub fn new_folder(
        label: impl Into<String>,
        folder: WorkspaceFolderId,
        collapsible: CollapsibleState,
    ) -> Self {
        Self {
            id: NodeId::new(),
            label: label.into(),
            kind: NodeKind::Folder { folder },
            collapsible,
            open_command: None,
            children: HashMap::new(),
        }
    }

    /// Session root node. Labeled with the session name and expanded,
    /// with the loaded-script list not yet fetched.
    pub fn new_session(info: SessionInfo) -> Self {
        Self {
            id: NodeId::new(),
            label: info.name.clone(),
            kind: NodeKind::Session {
                info,
                initialized: false,
            },
            collapsible: CollapsibleState::Expanded,
            open_command: None,
            children: HashMap::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, label: &str) -> Option<&Node> {
        self.children.get(label)
    }

    pub fn child_mut(&mut self, label: &str) -> Option<&mut Node> {
        self.children.get_mut(label)
    }

    /// Insert a child keyed by its own label, returning it for further
    /// descent. An existing child with the same label is kept as-is.
    pub fn ensure_child(&mut self, node: Node) -> &mut Node {
        self.children.entry(node.label.clone()).or_insert(node)
    }

    /// Insert-or-get a child by label. `make` runs only when the child
    /// does not yet exist and must produce a node carrying `label`.
    pub fn ensure_child_with<F>(&mut self, label: &str, make: F) -> &mut Node
    where
        F: FnOnce() -> Node,
    {
        self.children.entry(label.to_string()).or_insert_with(make)
    }

    /// Immediate children sorted by the given comparator.
    ///
    /// No side effects; safe to call repeatedly.
    pub fn children_by<F>(&self, mut cmp: F) -> Vec<&Node>
    where
        F: FnMut(&Node, &Node) -> std::cmp::Ordering,
    {
        let mut children: Vec<&Node> = self.children.values().collect();
        children.sort_by(|a, b| cmp(a, b));
        children
    }

    /// Immediate children in default order: case-insensitive by label
    pub fn children_sorted(&self) -> Vec<&Node> {
        self.children_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.label.cmp(&b.label))
        })
    }

    /// Attach an open-command and force this node into a leaf.
    ///
    /// A node carrying an actual loaded file can no longer be
    /// expandable; last write wins.
    pub fn set_command(&mut self, session_id: impl Into<String>, path: impl Into<String>) {
        self.open_command = Some(OpenCommand {
            session_id: session_id.into(),
            path: path.into(),
        });
        self.collapsible = CollapsibleState::None;
    }

    /// Depth-first lookup by node id
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.values().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .values_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Render snapshot handed to the host
    pub fn tree_item(&self) -> TreeItem {
        TreeItem {
            id: self.id,
            label: self.label.clone(),
            collapsible: self.collapsible,
            open_command: self.open_command.clone(),
        }
    }
}

/// Serializable render snapshot of one node.
///
/// `getTreeItem` is identity passthrough: the node already carries
/// everything the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub id: NodeId,
    pub label: String,
    pub collapsible: CollapsibleState,
    pub open_command: Option<OpenCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_child_is_idempotent() {
        let mut node = Node::new_plain("root", CollapsibleState::Expanded);
        let first_id = node
            .ensure_child(Node::new_plain("src", CollapsibleState::Expanded))
            .id;
        let second_id = node
            .ensure_child(Node::new_plain("src", CollapsibleState::Expanded))
            .id;

        assert_eq!(first_id, second_id);
        assert_eq!(node.children_sorted().len(), 1);
    }

    #[test]
    fn test_set_command_forces_leaf() {
        let mut node = Node::new_plain("x.js", CollapsibleState::Expanded);
        node.set_command("sess-1", "/a/x.js");

        assert_eq!(node.collapsible, CollapsibleState::None);
        let command = node.open_command.as_ref().unwrap();
        assert_eq!(command.session_id, "sess-1");
        assert_eq!(command.path, "/a/x.js");

        // Last write wins
        node.set_command("sess-2", "/b/x.js");
        assert_eq!(node.open_command.as_ref().unwrap().session_id, "sess-2");
    }

    #[test]
    fn test_children_sorted_is_case_insensitive() {
        let mut node = Node::new_plain("root", CollapsibleState::Expanded);
        node.ensure_child(Node::new_plain("Zebra.js", CollapsibleState::None));
        node.ensure_child(Node::new_plain("apple.js", CollapsibleState::None));
        node.ensure_child(Node::new_plain("Mango.js", CollapsibleState::None));

        let labels: Vec<&str> = node
            .children_sorted()
            .iter()
            .map(|n| n.label.as_str())
            .collect();
        assert_eq!(labels, vec!["apple.js", "Mango.js", "Zebra.js"]);
    }

    #[test]
    fn test_find_by_id() {
        let mut root = Node::new_plain("root", CollapsibleState::Expanded);
        let child_id = root
            .ensure_child(Node::new_plain("src", CollapsibleState::Expanded))
            .ensure_child(Node::new_plain("x.js", CollapsibleState::None))
            .id;

        assert_eq!(root.find(child_id).unwrap().label, "x.js");
        assert!(root.find(NodeId::new()).is_none());
    }
}
