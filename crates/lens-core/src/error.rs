//! Core error types

use lens_tree::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Adapter error: {0}")]
    Adapter(#[from] lens_adapter::AdapterError),

    #[error("Node {0} carries no open command")]
    NotOpenable(NodeId),
}
