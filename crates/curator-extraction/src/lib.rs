//! # curator-extraction
//!
//! Turns item images into feature vectors. A configured provider is tried
//! first; a zero vector of the configured width is the final fallback, so
//! extraction never blocks adding an item.

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use engine::ExtractionEngine;
