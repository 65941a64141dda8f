//! Explorer configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Synthetic grouping label the debuggee uses for runtime-internal
    /// scripts; sorts last and starts collapsed
    pub internals_label: String,
    /// Quick-pick entry shown when no scripts are available
    pub picker_placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            internals_label: "<node_internals>".to_string(),
            picker_placeholder: "No loaded scripts available".to_string(),
        }
    }
}
