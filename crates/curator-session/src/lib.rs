//! # curator-session
//!
//! Owns the live selection engine for one labeling session and exposes the
//! operations a transport wraps: next item, submit label, stats, add item,
//! reload, plus catalog browsing, bulk import, and question management.

pub mod image_store;
pub mod session;

pub use session::{Catalog, LabelingSession};
