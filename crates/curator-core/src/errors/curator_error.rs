use super::{ExtractionError, SnapshotError, StorageError};

/// Result alias used throughout the workspace.
pub type CuratorResult<T> = Result<T, CuratorError>;

/// Top-level error for the curator system.
#[derive(Debug, thiserror::Error)]
pub enum CuratorError {
    #[error("item collection is empty")]
    EmptyCollection,

    #[error("all {total} items are already labeled")]
    ExhaustedCollection { total: usize },

    #[error("unknown item: {id}")]
    UnknownItem { id: i64 },

    #[error("feature rows ({features}) disagree with metadata rows ({items})")]
    ShapeMismatch { features: usize, items: usize },

    #[error("feature row {row} has {actual} values, expected {expected}")]
    InvalidFeatureRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("question not found: {id}")]
    QuestionNotFound { id: i64 },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{resource} lock poisoned")]
    LockPoisoned { resource: &'static str },
}

/// Coarse failure classes that wrappers map onto distinguishable responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyCollection,
    ExhaustedCollection,
    NotFound,
    CorruptSnapshot,
    InvalidInput,
    Internal,
}

impl CuratorError {
    /// Classify this error for callers that translate it into a status or exit code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCollection => ErrorKind::EmptyCollection,
            Self::ExhaustedCollection { .. } => ErrorKind::ExhaustedCollection,
            Self::UnknownItem { .. } | Self::QuestionNotFound { .. } => ErrorKind::NotFound,
            Self::Snapshot(_) => ErrorKind::CorruptSnapshot,
            Self::ShapeMismatch { .. } | Self::InvalidFeatureRow { .. } | Self::ConfigError(_) => {
                ErrorKind::InvalidInput
            }
            Self::Storage(_)
            | Self::Extraction(_)
            | Self::Io(_)
            | Self::LockPoisoned { .. } => ErrorKind::Internal,
        }
    }
}

