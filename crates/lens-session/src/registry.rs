//! Live session registry (tree root)

use std::collections::HashMap;

use lens_adapter::SessionInfo;
use lens_tree::{Node, NodeId};

/// Root of the explorer tree: one child subtree per live session.
///
/// The registry exclusively owns every node beneath it. Sessions are
/// keyed by identity; `add` is idempotent so a "script loaded" event
/// arriving before its "session started" event still finds a home.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Node>,
    sticky_expanded: bool,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Once the registry has ever shown more than one session
    /// simultaneously, it never again collapses to a single child.
    pub fn sticky_expanded(&self) -> bool {
        self.sticky_expanded
    }

    /// Register a session, returning its node. Returns the existing
    /// node when the identity is already present.
    pub fn add(&mut self, info: SessionInfo) -> &mut Node {
        if !self.sessions.contains_key(&info.id) && !self.sessions.is_empty() {
            // A second simultaneous session pins the root level open
            self.sticky_expanded = true;
        }
        let id = info.id.clone();
        self.sessions.entry(id).or_insert_with(|| {
            tracing::info!(session_id = %info.id, session_name = %info.name, "Registered debug session");
            Node::new_session(info)
        })
    }

    /// Detach a session's subtree. No-op if the identity is unknown.
    pub fn remove(&mut self, session_id: &str) -> Option<Node> {
        let removed = self.sessions.remove(session_id);
        if removed.is_some() {
            tracing::info!(session_id = %session_id, "Removed debug session");
        }
        removed
    }

    pub fn session(&self, session_id: &str) -> Option<&Node> {
        self.sessions.get(session_id)
    }

    pub fn session_mut(&mut self, session_id: &str) -> Option<&mut Node> {
        self.sessions.get_mut(session_id)
    }

    /// All session nodes, in no particular order; callers sort on read
    pub fn session_nodes(&self) -> impl Iterator<Item = &Node> {
        self.sessions.values()
    }

    /// The single session to collapse the root level into, when the
    /// auto-collapse heuristic applies.
    pub fn collapsed_single(&self) -> Option<&Node> {
        if self.sticky_expanded || self.sessions.len() != 1 {
            return None;
        }
        self.sessions.values().next()
    }

    /// Depth-first lookup across all session subtrees
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.sessions.values().find_map(|node| node.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.sessions.values_mut().find_map(|node| node.find_mut(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lens_adapter::SessionKind;

    fn info(id: &str) -> SessionInfo {
        SessionInfo::new(id, format!("session {id}"), SessionKind::Node)
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = SessionRegistry::new();
        let first = registry.add(info("a")).id;
        let second = registry.add(info("a")).id;

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_missing_session_is_noop() {
        let mut registry = SessionRegistry::new();
        registry.add(info("a"));

        assert!(registry.remove("b").is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.remove("a").is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_single_session_collapses_until_second_appears() {
        let mut registry = SessionRegistry::new();
        registry.add(info("a"));
        assert!(registry.collapsed_single().is_some());

        registry.add(info("b"));
        assert!(registry.collapsed_single().is_none());
        assert!(registry.sticky_expanded());

        // Back down to one: the flag stays set
        registry.remove("b");
        assert_eq!(registry.len(), 1);
        assert!(registry.sticky_expanded());
        assert!(registry.collapsed_single().is_none());
    }
}
