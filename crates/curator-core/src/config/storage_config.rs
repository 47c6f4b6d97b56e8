use serde::{Deserialize, Serialize};

use super::defaults;

/// Catalog database and on-disk artifact locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite catalog file.
    pub db_path: String,
    /// JSON snapshot of the selection engine state.
    pub snapshot_path: String,
    /// Directory that receives copies of added item images.
    pub images_dir: String,
    /// SQLite busy timeout.
    pub busy_timeout_ms: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            snapshot_path: defaults::DEFAULT_SNAPSHOT_PATH.to_string(),
            images_dir: defaults::DEFAULT_IMAGES_DIR.to_string(),
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}
