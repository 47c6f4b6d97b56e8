//! # curator-core
//!
//! Foundation crate for the curator labeling system.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CuratorConfig;
pub use errors::{CuratorError, CuratorResult, ErrorKind};
pub use models::{EngineSnapshot, FeatureMatrix, ItemRecord, Label, ModelStats};
