use crate::errors::CuratorResult;

/// Image → fixed-length feature vector.
pub trait IFeatureExtractor: Send + Sync {
    /// Extract the embedding of one encoded image.
    fn extract(&self, image: &[u8]) -> CuratorResult<Vec<f32>>;

    /// Width of the vectors this extractor produces.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently usable.
    fn is_available(&self) -> bool;
}
