//! LENS Core
//!
//! Central coordination layer for the loaded-scripts explorer: the
//! tree provider facade consumed by the host renderer, the
//! session-lifecycle event handlers feeding it, and the flat quick-pick
//! alternative over the same data. The tree is rebuilt from live events
//! each run; nothing is persisted.

mod config;
mod error;
mod picker;
mod provider;

pub use config::Config;
pub use error::CoreError;
pub use picker::{PickItem, ScriptPicker};
pub use provider::ScriptTreeProvider;

// Re-export core components
pub use lens_adapter::{
    open_script, script_uri, AdapterError, DebugAdapter, LoadedScript, ScriptHost, SessionInfo,
    SessionKind,
};
pub use lens_session::SessionRegistry;
pub use lens_tree::{CollapsibleState, Node, NodeId, NodeKind, OpenCommand, TreeItem};
pub use lens_workspace::{WorkspaceFolder, WorkspaceFolderId, WorkspaceFolders};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
