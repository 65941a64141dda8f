//! LENS Session Management
//!
//! One subtree per live debug session, built incrementally from
//! "script loaded" notifications and a one-shot lazy catch-up fetch.
//! The registry tracks the live session set and owns every node
//! beneath it; nothing outside holds references into the tree.

mod insert;
mod registry;

pub use insert::add_path;
pub use registry::SessionRegistry;
