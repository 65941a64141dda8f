//! Loaded-script descriptors and script URIs

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// One source file a debuggee has loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedScript {
    /// Display label (usually the file name)
    pub label: String,
    /// Full path as reported by the debuggee
    pub path: String,
}

impl LoadedScript {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Build the host document URI for a script inside a session.
///
/// The document is scoped to the session so the host can route the
/// content request back to the right debuggee:
/// `debug:<path>?session=<id>`.
pub fn script_uri(path: &str, session_id: &str) -> Result<Url> {
    let mut uri = Url::parse(&format!("debug:{path}"))?;
    uri.query_pairs_mut().append_pair("session", session_id);
    Ok(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_uri_scheme_and_session() {
        let uri = script_uri("/home/me/proj/src/x.js", "sess-1").unwrap();
        assert_eq!(uri.scheme(), "debug");
        assert_eq!(uri.query(), Some("session=sess-1"));
        assert!(uri.as_str().starts_with("debug:/home/me/proj/src/x.js"));
    }

    #[test]
    fn test_script_uri_encodes_session_id() {
        let uri = script_uri("/a/b.js", "sess 1&2").unwrap();
        assert_eq!(uri.query(), Some("session=sess+1%262"));
    }
}
