use serde::{Deserialize, Serialize};

/// Health summary of a labeling session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub items_count: usize,
    pub feature_rows: usize,
    pub features_available: bool,
    pub engine_initialized: bool,
    pub extraction_provider: String,
    /// Degradation events recorded since the session opened.
    pub degradation_events: usize,
    /// Retained events whose component has not recovered since.
    pub active_degradations: usize,
}
