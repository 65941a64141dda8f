//! Debug session identity

use serde::{Deserialize, Serialize};

/// The debugger kind a session was started with.
///
/// Only the two Node.js kinds are tracked by the explorer; every other
/// kind is carried through as `Other` and ignored by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Node,
    Node2,
    Other(String),
}

impl SessionKind {
    /// Returns true if the explorer tracks sessions of this kind
    pub fn is_recognized(&self) -> bool {
        matches!(self, SessionKind::Node | SessionKind::Node2)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SessionKind::Node => "node",
            SessionKind::Node2 => "node2",
            SessionKind::Other(kind) => kind,
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SessionKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "node" => SessionKind::Node,
            "node2" => SessionKind::Node2,
            other => SessionKind::Other(other.to_string()),
        })
    }
}

/// Identity of one running debug session, as reported by the adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Stable identifier
    pub id: String,
    /// Human-readable name shown as the session node label
    pub name: String,
    /// Debugger kind
    pub kind: SessionKind,
}

impl SessionInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: SessionKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
