//! Fallback chain for feature extraction.
//!
//! Providers are tried in order. A provider that errors, or answers with the
//! wrong width, is skipped and the fallback is recorded as a
//! [`DegradationEvent`].

use chrono::Utc;
use tracing::warn;

use curator_core::errors::{CuratorResult, ExtractionError};
use curator_core::models::DegradationEvent;
use curator_core::traits::IFeatureExtractor;

pub struct ExtractionChain {
    chain: Vec<Box<dyn IFeatureExtractor>>,
    dimensions: usize,
    events: Vec<DegradationEvent>,
}

impl ExtractionChain {
    /// An empty chain producing vectors of width `dimensions`.
    pub fn new(dimensions: usize) -> Self {
        Self {
            chain: Vec::new(),
            dimensions,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, provider: Box<dyn IFeatureExtractor>) {
        self.chain.push(provider);
    }

    /// Extract with the first provider that succeeds with the right width.
    /// Returns the vector and the name of the provider that produced it.
    pub fn extract(&mut self, image: &[u8]) -> CuratorResult<(Vec<f32>, String)> {
        let mut failures: Vec<String> = Vec::new();

        for provider in &self.chain {
            if !provider.is_available() {
                failures.push(format!("{} unavailable", provider.name()));
                continue;
            }

            let outcome = provider.extract(image).and_then(|v| {
                if v.len() == self.dimensions {
                    Ok(v)
                } else {
                    Err(ExtractionError::DimensionMismatch {
                        expected: self.dimensions,
                        actual: v.len(),
                    }
                    .into())
                }
            });

            match outcome {
                Ok(vec) => {
                    if !failures.is_empty() {
                        self.events.push(DegradationEvent {
                            component: "extraction".to_string(),
                            failure: failures.join("; "),
                            fallback_used: provider.name().to_string(),
                            timestamp: Utc::now(),
                        });
                    }
                    return Ok((vec, provider.name().to_string()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "extractor failed, trying next in chain"
                    );
                    failures.push(format!("{}: {e}", provider.name()));
                }
            }
        }

        Err(ExtractionError::ProviderUnavailable {
            provider: format!("all {} providers failed", self.chain.len()),
        }
        .into())
    }

    /// Record a failure that happened before any provider ran.
    pub fn record(&mut self, failure: String, fallback_used: &str) {
        self.events.push(DegradationEvent {
            component: "extraction".to_string(),
            failure,
            fallback_used: fallback_used.to_string(),
            timestamp: Utc::now(),
        });
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn drain_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::ZeroExtractor;

    struct FailingProvider;
    impl IFeatureExtractor for FailingProvider {
        fn extract(&self, _image: &[u8]) -> CuratorResult<Vec<f32>> {
            Err(ExtractionError::RequestFailed {
                reason: "mock failure".to_string(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            4
        }
        fn name(&self) -> &str {
            "failing-mock"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct FixedProvider(Vec<f32>);
    impl IFeatureExtractor for FixedProvider {
        fn extract(&self, _image: &[u8]) -> CuratorResult<Vec<f32>> {
            Ok(self.0.clone())
        }
        fn dimensions(&self) -> usize {
            self.0.len()
        }
        fn name(&self) -> &str {
            "fixed"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn primary_succeeds_no_degradation() {
        let mut chain = ExtractionChain::new(2);
        chain.push(Box::new(FixedProvider(vec![1.0, 2.0])));
        chain.push(Box::new(ZeroExtractor::new(2)));
        let (vec, name) = chain.extract(b"img").unwrap();
        assert_eq!(name, "fixed");
        assert_eq!(vec, vec![1.0, 2.0]);
        assert!(chain.drain_events().is_empty());
    }

    #[test]
    fn fallback_on_primary_failure() {
        let mut chain = ExtractionChain::new(4);
        chain.push(Box::new(FailingProvider));
        chain.push(Box::new(ZeroExtractor::new(4)));
        let (vec, name) = chain.extract(b"img").unwrap();
        assert_eq!(name, "zero");
        assert_eq!(vec, vec![0.0; 4]);

        let events = chain.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].fallback_used, "zero");
        assert!(events[0].failure.contains("mock failure"));
    }

    #[test]
    fn wrong_width_is_a_failure() {
        let mut chain = ExtractionChain::new(3);
        chain.push(Box::new(FixedProvider(vec![1.0])));
        chain.push(Box::new(ZeroExtractor::new(3)));
        let (vec, name) = chain.extract(b"img").unwrap();
        assert_eq!(name, "zero");
        assert_eq!(vec.len(), 3);
        assert!(chain.drain_events()[0].failure.contains("dimension mismatch"));
    }

    #[test]
    fn all_fail_returns_error() {
        let mut chain = ExtractionChain::new(4);
        chain.push(Box::new(FailingProvider));
        assert!(chain.extract(b"img").is_err());
    }
}
