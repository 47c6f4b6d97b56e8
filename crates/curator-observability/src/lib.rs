//! # curator-observability
//!
//! Tracing initialisation, span macros for the labeling operations,
//! structured log events, and an in-session degradation tracker.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{
    DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_RETAINED_EVENTS,
};
pub use tracing_setup::init_tracing;
