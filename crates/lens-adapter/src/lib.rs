//! LENS Debug Adapter Interface
//!
//! The seam between the script explorer core and its collaborators:
//! the debug-session transport on one side and the host editor on the
//! other. The core only ever asks a session for its loaded scripts and
//! asks the host to display a chosen one.

mod adapter;
mod error;
mod script;
mod session;

pub use adapter::{open_script, DebugAdapter, ScriptHost};
pub use error::AdapterError;
pub use script::{script_uri, LoadedScript};
pub use session::{SessionInfo, SessionKind};

pub type Result<T> = std::result::Result<T, AdapterError>;
