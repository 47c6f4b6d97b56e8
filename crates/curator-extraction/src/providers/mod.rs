//! Extraction providers and provider selection from config.

mod http_provider;
mod zero_fallback;

pub use http_provider::HttpExtractor;
pub use zero_fallback::ZeroExtractor;

use curator_core::config::ExtractionConfig;
use curator_core::traits::IFeatureExtractor;
use tracing::warn;

/// Build the primary provider named by `config.provider`.
///
/// `"http"` gives the upstream embedding service; `"none"` (or anything
/// unrecognised, or an HTTP client that cannot be built) gives zero vectors.
pub fn create_provider(config: &ExtractionConfig) -> Box<dyn IFeatureExtractor> {
    match config.provider.as_str() {
        "http" => match HttpExtractor::new(
            &config.endpoint,
            config.dimensions,
            std::time::Duration::from_secs(config.timeout_secs),
        ) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!(error = %e, "HTTP extractor unavailable, using zero vectors");
                Box::new(ZeroExtractor::new(config.dimensions))
            }
        },
        "none" => Box::new(ZeroExtractor::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown extraction provider, using zero vectors");
            Box::new(ZeroExtractor::new(config.dimensions))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_gives_zero_provider() {
        let provider = create_provider(&ExtractionConfig::default());
        assert_eq!(provider.name(), "zero");
        assert_eq!(provider.dimensions(), 512);
    }

    #[test]
    fn unknown_name_falls_back() {
        let config = ExtractionConfig {
            provider: "onnx".to_string(),
            dimensions: 8,
            ..Default::default()
        };
        assert_eq!(create_provider(&config).name(), "zero");
    }

    #[test]
    fn http_provider_selected() {
        let config = ExtractionConfig {
            provider: "http".to_string(),
            ..Default::default()
        };
        assert_eq!(create_provider(&config).name(), "http");
    }
}
