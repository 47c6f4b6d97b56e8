use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_FEATURE_DIMENSIONS;

/// Upstream feature-extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// `"http"` for the upstream embedding service, `"none"` for zero vectors.
    pub provider: String,
    /// Endpoint that accepts raw image bytes and answers with an embedding.
    pub endpoint: String,
    /// Expected embedding width.
    pub dimensions: usize,
    pub timeout_secs: u64,
    /// Number of embeddings kept in the in-memory cache.
    pub cache_size: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EXTRACTION_PROVIDER.to_string(),
            endpoint: defaults::DEFAULT_EXTRACTION_ENDPOINT.to_string(),
            dimensions: DEFAULT_FEATURE_DIMENSIONS,
            timeout_secs: defaults::DEFAULT_EXTRACTION_TIMEOUT_SECS,
            cache_size: defaults::DEFAULT_EXTRACTION_CACHE_SIZE,
        }
    }
}
