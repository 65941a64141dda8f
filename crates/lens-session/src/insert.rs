//! Path-trie insertion into a session subtree

use lens_tree::{CollapsibleState, Node, NodeKind};
use lens_workspace::WorkspaceFolders;

/// Insert one loaded-script path into a session's subtree.
///
/// The path is mapped against the workspace folders once, split into
/// segments, and walked from the session root, creating missing
/// segments along the way. The matched folder reference is stamped on
/// the first segment created during this call only, so folder sort
/// priority lands on the folder root and not on every intermediate
/// directory. The final segment receives the open-command and becomes
/// a leaf.
///
/// Insertion is idempotent: walking reuses existing segment nodes, so
/// the same full path inserted twice yields a single leaf.
pub fn add_path(
    session_node: &mut Node,
    folders: &WorkspaceFolders,
    internals_label: &str,
    full_path: &str,
) {
    let session_id = match &session_node.kind {
        NodeKind::Session { info, .. } => info.id.clone(),
        _ => {
            tracing::warn!(label = %session_node.label, "add_path on non-session node ignored");
            return;
        }
    };

    let rewrite = folders.rewrite(full_path);
    let mut folder_ref = rewrite.folder;

    let mut current = session_node;
    let mut descended = false;
    for segment in rewrite.path.split('/').filter(|s| !s.is_empty()) {
        let folder_slot = &mut folder_ref;
        current = current.ensure_child_with(segment, || {
            let collapsible = if segment == internals_label {
                CollapsibleState::Collapsed
            } else {
                CollapsibleState::Expanded
            };
            match folder_slot.take() {
                Some(folder) => Node::new_folder(segment, folder, collapsible),
                None => Node::new_plain(segment, collapsible),
            }
        });
        descended = true;
    }

    // A path with no segments would turn the session root itself into
    // a leaf; ignore it.
    if descended {
        current.set_command(session_id, full_path);
    }
}
