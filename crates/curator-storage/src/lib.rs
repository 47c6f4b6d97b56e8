//! # curator-storage
//!
//! SQLite persistence for the item catalog, the feature matrix, and the
//! question list. A single write connection serializes all access.

pub mod connection;
pub mod engine;
pub mod migrations;
pub mod queries;

pub use engine::StorageEngine;

use curator_core::errors::{CuratorError, StorageError};

/// Helper to convert a message into a `CuratorError::Storage`.
pub(crate) fn to_storage_err(message: impl Into<String>) -> CuratorError {
    CuratorError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
