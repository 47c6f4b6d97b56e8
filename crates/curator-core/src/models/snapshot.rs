use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Label;
use crate::errors::SnapshotError;

/// Persisted selection-engine state.
///
/// Index-keyed maps serialize their keys as decimal strings. Class centroids
/// are not part of the snapshot; they are recomputed from `class_assignments`
/// and the feature matrix after a restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub labeled_indices: Vec<usize>,
    pub classifications: BTreeMap<usize, Label>,
    pub class_assignments: BTreeMap<usize, String>,
    pub learning_curve: Vec<f64>,
    /// Latest synthetic progress value (not a measured accuracy).
    pub accuracy: f64,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Malformed {
            reason: e.to_string(),
        })
    }

    pub fn from_json(source: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(source).map_err(|e| SnapshotError::Malformed {
            reason: e.to_string(),
        })
    }
}
