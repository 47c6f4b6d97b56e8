//! Default values shared by the config sections.

pub const DEFAULT_DB_PATH: &str = "curator.db";
pub const DEFAULT_SNAPSHOT_PATH: &str = "model_state.json";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_EXTRACTION_PROVIDER: &str = "none";
pub const DEFAULT_EXTRACTION_ENDPOINT: &str = "http://127.0.0.1:8500/embed";
pub const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EXTRACTION_CACHE_SIZE: u64 = 256;

pub const DEFAULT_LOG_LEVEL: &str = "info";
