//! LENS Script Tree Model
//!
//! The labeled tree node the explorer is built from. A node is either a
//! plain path segment, a workspace-folder root, or a session root; the
//! distinction is a tagged variant, and all category/sort logic is a
//! pure function over the tag plus payload.

mod node;
mod sort;

pub use node::{CollapsibleState, Node, NodeId, NodeKind, OpenCommand, TreeItem};
pub use sort::{category, compare, Category};
