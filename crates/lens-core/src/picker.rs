//! Flat quick-pick over the active session's loaded scripts
//!
//! Stateless one-shot alternative to the persistent tree: every
//! invocation fetches the list fresh and forgets it afterwards.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lens_adapter::{open_script, DebugAdapter, ScriptHost, SessionInfo};

use crate::config::Config;
use crate::Result;

/// One selectable entry in the flat list. The placeholder entry shown
/// when no scripts are available carries no path and is not
/// selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickItem {
    pub label: String,
    pub description: String,
    pub path: Option<String>,
}

impl PickItem {
    pub fn is_selectable(&self) -> bool {
        self.path.is_some()
    }
}

/// Stateless script picker over the currently active session
pub struct ScriptPicker {
    adapter: Arc<dyn DebugAdapter>,
    config: Config,
}

impl ScriptPicker {
    pub fn new(adapter: Arc<dyn DebugAdapter>, config: Config) -> Self {
        Self { adapter, config }
    }

    /// Build the flat list for the active session, if any.
    ///
    /// No active session, a failed request, and an empty script list
    /// all degrade to the single placeholder entry.
    pub async fn items(&self, active: Option<&SessionInfo>) -> Vec<PickItem> {
        let scripts = match active {
            Some(session) => match self.adapter.loaded_scripts(&session.id).await {
                Ok(scripts) => scripts,
                Err(err) => {
                    tracing::warn!(session_id = %session.id, error = %err, "Loaded-scripts request failed for picker");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        if scripts.is_empty() {
            return vec![PickItem {
                label: self.config.picker_placeholder.clone(),
                description: String::new(),
                path: None,
            }];
        }

        scripts
            .into_iter()
            .map(|script| PickItem {
                label: script.label,
                description: script.path.clone(),
                path: Some(script.path),
            })
            .collect()
    }

    /// Open the chosen script in the host. Selecting the placeholder
    /// is a no-op.
    pub async fn open(
        &self,
        host: &dyn ScriptHost,
        session: &SessionInfo,
        item: &PickItem,
    ) -> Result<()> {
        let Some(path) = &item.path else {
            return Ok(());
        };
        open_script(host, path, &session.id).await?;
        Ok(())
    }
}
