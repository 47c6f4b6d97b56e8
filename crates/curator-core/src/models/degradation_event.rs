use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A component fell back to a weaker provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
