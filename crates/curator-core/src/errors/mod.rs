//! Error types for every curator subsystem.

mod curator_error;
mod extraction_error;
mod snapshot_error;
mod storage_error;

pub use curator_error::{CuratorError, CuratorResult, ErrorKind};
pub use extraction_error::ExtractionError;
pub use snapshot_error::SnapshotError;
pub use storage_error::StorageError;
