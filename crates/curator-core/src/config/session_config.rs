use serde::{Deserialize, Serialize};

/// Labeling session behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Persist the engine snapshot after every recorded label.
    pub autosave: bool,
    /// Restore the snapshot file when the session opens.
    pub load_snapshot_on_start: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autosave: true,
            load_snapshot_on_start: true,
        }
    }
}
