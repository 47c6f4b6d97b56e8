//! Data models shared across crates.

mod degradation_event;
mod feature_matrix;
mod item;
mod label;
mod question;
mod snapshot;
mod stats;
mod status;

pub use degradation_event::DegradationEvent;
pub use feature_matrix::FeatureMatrix;
pub use item::{ItemRecord, NewItem};
pub use label::Label;
pub use question::{NewQuestion, Question};
pub use snapshot::EngineSnapshot;
pub use stats::{ConfidenceBucket, ConfidenceDistribution, ModelStats};
pub use status::SessionStatus;
