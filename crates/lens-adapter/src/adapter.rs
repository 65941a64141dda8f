//! Collaborator traits
//!
//! The explorer core talks to two collaborators and nothing else: the
//! debug-session transport (for the loaded-script list) and the host
//! editor (to display a document). Both are object-safe async traits so
//! the core can hold them as `Arc<dyn …>`.

use async_trait::async_trait;
use url::Url;

use crate::{LoadedScript, Result};

/// Access to running debug sessions
#[async_trait]
pub trait DebugAdapter: Send + Sync {
    /// Request the current loaded-script list of a session.
    ///
    /// A failure is never fatal to the explorer; callers treat it as
    /// "no scripts available".
    async fn loaded_scripts(&self, session_id: &str) -> Result<Vec<LoadedScript>>;
}

/// Access to the host editor's document display
#[async_trait]
pub trait ScriptHost: Send + Sync {
    /// Ask the host to open and show the given document URI
    async fn show_document(&self, uri: Url) -> Result<()>;
}

/// Open one loaded script in the host, scoped to its session
pub async fn open_script(host: &dyn ScriptHost, path: &str, session_id: &str) -> Result<()> {
    let uri = crate::script_uri(path, session_id)?;
    host.show_document(uri).await
}
