//! Tree provider facade
//!
//! Bridges registry mutations to the single change-notification stream
//! the host renderer consumes, and owns the lazily-created session
//! registry. Two producers write into the tree: live session-lifecycle
//! events and the one-shot catch-up fetch issued on first expansion of
//! a session node. They converge through idempotent path insertion,
//! never through mutual exclusion around the fetch itself.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use lens_adapter::{open_script, DebugAdapter, ScriptHost, SessionInfo};
use lens_session::{add_path, SessionRegistry};
use lens_tree::{compare, Node, NodeId, NodeKind, TreeItem};
use lens_workspace::WorkspaceFolders;

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

/// Name of the custom debug event announcing one newly loaded script
const SCRIPT_LOADED_EVENT: &str = "scriptLoaded";

/// The host-facing explorer facade.
///
/// `children`/`tree_item` serve the renderer; the `on_*` handlers are
/// registered against the debug collaborator's lifecycle stream. All
/// clones share the same registry and notification channel.
pub struct ScriptTreeProvider {
    adapter: Arc<dyn DebugAdapter>,
    config: Config,
    folders: Arc<RwLock<WorkspaceFolders>>,
    /// Created on first access, mutated by host callbacks thereafter
    registry: Arc<RwLock<Option<SessionRegistry>>>,
    /// Version counter; a burst of synchronous mutations coalesces to
    /// one observable change
    changes: Arc<watch::Sender<u64>>,
}

impl ScriptTreeProvider {
    pub fn new(adapter: Arc<dyn DebugAdapter>, folders: WorkspaceFolders, config: Config) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            adapter,
            config,
            folders: Arc::new(RwLock::new(folders)),
            registry: Arc::new(RwLock::new(None)),
            changes: Arc::new(changes),
        }
    }

    /// Subscribe to the payload-free change stream. Consumers re-query
    /// from the root when the version moves.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    fn notify(&self) {
        self.changes.send_modify(|version| *version = version.wrapping_add(1));
    }

    /// Replace the workspace folder set, e.g. after the host reports a
    /// folder change
    pub fn set_folders(&self, folders: WorkspaceFolders) {
        *self.folders.write() = folders;
        self.notify();
    }

    /// A debug session became active. Untracked kinds are ignored.
    pub fn on_session_started(&self, info: SessionInfo) {
        if !info.kind.is_recognized() {
            tracing::debug!(session_id = %info.id, kind = %info.kind, "Ignoring session of untracked kind");
            return;
        }
        let is_new = {
            let mut guard = self.registry.write();
            let registry = guard.get_or_insert_with(SessionRegistry::new);
            let is_new = registry.session(&info.id).is_none();
            registry.add(info);
            is_new
        };
        if is_new {
            self.notify();
        }
    }

    /// A session emitted a custom event; only `scriptLoaded` with a
    /// `path` body is of interest.
    pub fn on_custom_event(&self, info: SessionInfo, event: &str, body: &serde_json::Value) {
        if event != SCRIPT_LOADED_EVENT {
            return;
        }
        let Some(path) = body.get("path").and_then(serde_json::Value::as_str) else {
            tracing::debug!(session_id = %info.id, "scriptLoaded event without a path ignored");
            return;
        };
        self.on_script_loaded(info, path);
    }

    /// Insert one live-reported script path into its session's subtree.
    ///
    /// Registers the session implicitly if its start notification has
    /// not been processed yet; `add` is idempotent.
    pub fn on_script_loaded(&self, info: SessionInfo, path: &str) {
        if !info.kind.is_recognized() {
            return;
        }
        {
            let mut guard = self.registry.write();
            let registry = guard.get_or_insert_with(SessionRegistry::new);
            let folders = self.folders.read();
            let node = registry.add(info);
            add_path(node, &folders, &self.config.internals_label, path);
        }
        self.notify();
    }

    /// A session terminated; its subtree is detached immediately. An
    /// in-flight catch-up fetch for it resolves into nothing.
    pub fn on_session_terminated(&self, session_id: &str) {
        let removed = {
            let mut guard = self.registry.write();
            match guard.as_mut() {
                Some(registry) => registry.remove(session_id).is_some(),
                None => false,
            }
        };
        if removed {
            self.notify();
        }
    }

    /// Children of a node, or of the root when `parent` is absent.
    ///
    /// The root call applies the auto-collapse heuristic: a single
    /// session (that has never had company) is skipped and its own
    /// children returned directly. First enumeration of a session node
    /// issues the one-shot catch-up fetch for scripts loaded before the
    /// view was opened.
    pub async fn children(&self, parent: Option<NodeId>) -> Vec<TreeItem> {
        let Some(node_id) = self.resolve_target(parent) else {
            return self.top_level_items();
        };

        if let Some(session_id) = self.claim_fetch(node_id) {
            self.run_catch_up_fetch(&session_id).await;
        }

        self.node_items(node_id)
    }

    /// Render snapshot of one node; identity passthrough
    pub fn tree_item(&self, id: NodeId) -> Option<TreeItem> {
        let guard = self.registry.read();
        guard.as_ref()?.find(id).map(Node::tree_item)
    }

    /// Render snapshot of a session's root node, if it is live
    pub fn session_item(&self, session_id: &str) -> Option<TreeItem> {
        let guard = self.registry.read();
        guard.as_ref()?.session(session_id).map(Node::tree_item)
    }

    /// Invoke a leaf's open-command against the host
    pub async fn open(&self, host: &dyn ScriptHost, id: NodeId) -> Result<()> {
        let command = {
            let guard = self.registry.read();
            guard
                .as_ref()
                .and_then(|registry| registry.find(id))
                .and_then(|node| node.open_command.clone())
        };
        let command = command.ok_or(CoreError::NotOpenable(id))?;
        open_script(host, &command.path, &command.session_id).await?;
        Ok(())
    }

    /// Map the root call onto a concrete node when the auto-collapse
    /// heuristic applies; `None` means "render the session list".
    fn resolve_target(&self, parent: Option<NodeId>) -> Option<NodeId> {
        let mut guard = self.registry.write();
        let registry = guard.get_or_insert_with(SessionRegistry::new);
        match parent {
            Some(id) => Some(id),
            None => registry.collapsed_single().map(|node| node.id),
        }
    }

    /// Flip a session node's `initialized` flag, returning the session
    /// to fetch for. The flag flips exactly once, before the request
    /// is issued, so a failed fetch is not retried either.
    fn claim_fetch(&self, node_id: NodeId) -> Option<String> {
        let mut guard = self.registry.write();
        let registry = guard.as_mut()?;
        let node = registry.find_mut(node_id)?;
        match &mut node.kind {
            NodeKind::Session { info, initialized } if !*initialized => {
                *initialized = true;
                Some(info.id.clone())
            }
            _ => None,
        }
    }

    /// Catch-up for scripts that were already loaded before the view
    /// opened. Converges with live insertions through idempotent
    /// `add_path`; a session that terminated while the request was in
    /// flight simply discards the results.
    async fn run_catch_up_fetch(&self, session_id: &str) {
        let scripts = match self.adapter.loaded_scripts(session_id).await {
            Ok(scripts) => scripts,
            Err(err) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "Loaded-scripts request failed; showing an empty list"
                );
                Vec::new()
            }
        };

        let inserted = {
            let mut guard = self.registry.write();
            let registry = match guard.as_mut() {
                Some(registry) => registry,
                None => return,
            };
            match registry.session_mut(session_id) {
                Some(node) => {
                    let folders = self.folders.read();
                    for script in &scripts {
                        add_path(node, &folders, &self.config.internals_label, &script.path);
                    }
                    !scripts.is_empty()
                }
                None => {
                    tracing::debug!(session_id = %session_id, "Session ended during catch-up fetch; dropping results");
                    false
                }
            }
        };
        if inserted {
            self.notify();
        }
    }

    fn top_level_items(&self) -> Vec<TreeItem> {
        let guard = self.registry.read();
        let Some(registry) = guard.as_ref() else {
            return Vec::new();
        };
        let mut sessions: Vec<&Node> = registry.session_nodes().collect();
        sessions.sort_by(|a, b| {
            a.label
                .to_lowercase()
                .cmp(&b.label.to_lowercase())
                .then_with(|| a.label.cmp(&b.label))
        });
        sessions.iter().map(|node| node.tree_item()).collect()
    }

    fn node_items(&self, id: NodeId) -> Vec<TreeItem> {
        let guard = self.registry.read();
        let Some(registry) = guard.as_ref() else {
            return Vec::new();
        };
        let Some(node) = registry.find(id) else {
            return Vec::new();
        };
        let children = if matches!(node.kind, NodeKind::Session { .. }) {
            // Session-level children render in category bands
            let folders = self.folders.read();
            node.children_by(|a, b| compare(a, b, &folders, &self.config.internals_label))
        } else {
            node.children_sorted()
        };
        children.iter().map(|node| node.tree_item()).collect()
    }
}

impl Clone for ScriptTreeProvider {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            config: self.config.clone(),
            folders: Arc::clone(&self.folders),
            registry: Arc::clone(&self.registry),
            changes: Arc::clone(&self.changes),
        }
    }
}
