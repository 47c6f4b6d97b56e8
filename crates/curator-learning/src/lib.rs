//! # curator-learning
//!
//! The selection engine: decides which unlabeled item to show next and folds
//! each new label into class centroids and a synthetic progress curve.
//!
//! Selection is phase-based: farthest pair on a cold start, farthest from the
//! single labeled item, smallest absolute projection onto the centroid
//! difference once two classes exist, and farthest from the labeled center
//! otherwise.

pub mod centroids;
pub mod engine;
pub mod geometry;
pub mod progress;
pub mod selection;
pub mod snapshot;

pub use engine::SelectionEngine;
pub use selection::{Selection, SelectionPhase};
