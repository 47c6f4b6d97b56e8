//! Remote embedding service over HTTP.
//!
//! POSTs the raw image bytes and accepts either `{"embedding": [...]}` or a
//! bare JSON array of numbers.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use curator_core::errors::{CuratorResult, ExtractionError};
use curator_core::traits::IFeatureExtractor;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbeddingResponse {
    Wrapped { embedding: Vec<f32> },
    Bare(Vec<f32>),
}

impl EmbeddingResponse {
    fn into_vec(self) -> Vec<f32> {
        match self {
            Self::Wrapped { embedding } => embedding,
            Self::Bare(v) => v,
        }
    }
}

pub struct HttpExtractor {
    client: reqwest::blocking::Client,
    endpoint: String,
    dimensions: usize,
}

impl HttpExtractor {
    pub fn new(endpoint: &str, dimensions: usize, timeout: Duration) -> CuratorResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ExtractionError::ProviderUnavailable {
                provider: format!("http ({e})"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            dimensions,
        })
    }

    /// Parse a response body.
    pub fn parse_body(body: &str) -> CuratorResult<Vec<f32>> {
        serde_json::from_str::<EmbeddingResponse>(body)
            .map(EmbeddingResponse::into_vec)
            .map_err(|e| {
                ExtractionError::RequestFailed {
                    reason: format!("unparseable embedding response: {e}"),
                }
                .into()
            })
    }
}

impl IFeatureExtractor for HttpExtractor {
    fn extract(&self, image: &[u8]) -> CuratorResult<Vec<f32>> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .map_err(|e| ExtractionError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::RequestFailed {
                reason: format!("HTTP {status}"),
            }
            .into());
        }

        let body = response.text().map_err(|e| ExtractionError::RequestFailed {
            reason: e.to_string(),
        })?;
        let embedding = Self::parse_body(&body)?;
        debug!(dims = embedding.len(), "received embedding");
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "http"
    }

    fn is_available(&self) -> bool {
        !self.endpoint.is_empty()
    }
}
