/// Feature-extraction subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("extraction request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unreadable image {path}: {reason}")]
    UnreadableImage { path: String, reason: String },
}
