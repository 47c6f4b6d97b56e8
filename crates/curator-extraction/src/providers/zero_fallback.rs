//! Zero-vector provider: the last resort, always available.

use curator_core::errors::CuratorResult;
use curator_core::traits::IFeatureExtractor;

pub struct ZeroExtractor {
    dimensions: usize,
}

impl ZeroExtractor {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

impl IFeatureExtractor for ZeroExtractor {
    fn extract(&self, _image: &[u8]) -> CuratorResult<Vec<f32>> {
        Ok(vec![0.0; self.dimensions])
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "zero"
    }

    fn is_available(&self) -> bool {
        true
    }
}
