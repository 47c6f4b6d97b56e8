//! Command handlers. Each returns the JSON document to print.
//!
//! - `labeling`: status, next, label, stats, reload
//! - `catalog`: add, import, items
//! - `questions`: question catalog management

pub mod catalog;
pub mod labeling;
pub mod questions;
