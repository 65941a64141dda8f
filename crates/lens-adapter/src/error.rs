//! Adapter error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Debug adapter request failed: {0}")]
    RequestFailed(String),

    #[error("No active debug session")]
    NoActiveSession,

    #[error("Invalid script URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    #[error("Host refused to display document: {0}")]
    DisplayFailed(String),
}
