//! ExtractionEngine: provider chain plus L1 cache. Never fails to produce a
//! vector of the configured width.

use std::path::Path;

use tracing::{debug, info, warn};

use curator_core::config::ExtractionConfig;
use curator_core::errors::{CuratorResult, ExtractionError};
use curator_core::models::DegradationEvent;

use crate::cache::FeatureCache;
use crate::degradation::ExtractionChain;
use crate::providers::{self, ZeroExtractor};

pub struct ExtractionEngine {
    chain: ExtractionChain,
    cache: FeatureCache,
    config: ExtractionConfig,
}

impl ExtractionEngine {
    pub fn new(config: ExtractionConfig) -> Self {
        let mut chain = ExtractionChain::new(config.dimensions);
        chain.push(providers::create_provider(&config));
        // Zero vectors always close the chain.
        chain.push(Box::new(ZeroExtractor::new(config.dimensions)));

        let cache = FeatureCache::new(config.cache_size);

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "ExtractionEngine initialized"
        );

        Self {
            chain,
            cache,
            config,
        }
    }

    /// Engine over an explicit chain (tests, custom providers).
    pub fn with_chain(chain: ExtractionChain, config: ExtractionConfig) -> Self {
        let cache = FeatureCache::new(config.cache_size);
        Self {
            chain,
            cache,
            config,
        }
    }

    /// Extract the features of an encoded image.
    ///
    /// Results from a real provider are cached by content hash; zero-vector
    /// fallbacks are not, so a later call can retry the provider.
    pub fn extract(&mut self, image: &[u8]) -> CuratorResult<Vec<f32>> {
        let key = FeatureCache::key_for(image);
        if let Some(hit) = self.cache.get(&key) {
            debug!(hash = %key, "feature cache hit");
            return Ok(hit);
        }

        let (features, provider) = self.chain.extract(image)?;
        if provider != "zero" {
            self.cache.insert(key, features.clone());
        }
        Ok(features)
    }

    /// Like [`ExtractionEngine::extract`], but any failure yields a zero vector.
    pub fn extract_or_zero(&mut self, image: &[u8]) -> Vec<f32> {
        match self.extract(image) {
            Ok(features) => features,
            Err(e) => {
                warn!(error = %e, "extraction failed, substituting zero vector");
                self.chain.record(e.to_string(), "zero");
                vec![0.0; self.config.dimensions]
            }
        }
    }

    /// Read an image file and extract it. An unreadable file yields a zero
    /// vector and a degradation event.
    pub fn extract_file_or_zero(&mut self, path: &Path) -> Vec<f32> {
        match std::fs::read(path) {
            Ok(bytes) => self.extract_or_zero(&bytes),
            Err(e) => {
                let failure = ExtractionError::UnreadableImage {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %failure, "substituting zero vector");
                self.chain.record(failure.to_string(), "zero");
                vec![0.0; self.config.dimensions]
            }
        }
    }

    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    pub fn pending_degradation_events(&self) -> usize {
        self.chain.pending_events()
    }

    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }
}
