//! TOML configuration for every curator subsystem.
//!
//! Every section is `#[serde(default)]`, so an empty document yields a
//! fully-populated default config.

pub mod defaults;
mod extraction_config;
mod observability_config;
mod session_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use extraction_config::ExtractionConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

use crate::errors::{CuratorError, CuratorResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CuratorConfig {
    pub storage: StorageConfig,
    pub extraction: ExtractionConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl CuratorConfig {
    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> CuratorResult<Self> {
        toml::from_str(source).map_err(|e| CuratorError::ConfigError(e.to_string()))
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> CuratorResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CuratorError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CuratorResult<String> {
        toml::to_string(self).map_err(|e| CuratorError::ConfigError(e.to_string()))
    }
}
