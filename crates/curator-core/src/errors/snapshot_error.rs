/// Errors raised while restoring a persisted engine snapshot.
///
/// Every variant is a `CorruptSnapshot` condition: the engine rejects the
/// snapshot and keeps its current state.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {reason}")]
    Malformed { reason: String },

    #[error("snapshot references index {index} outside collection of {total}")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("snapshot {field} entry {index} is not in labeled_indices")]
    UnlabeledEntry { field: &'static str, index: usize },

    #[error("snapshot learning curve value {value} is outside [0, 1]")]
    CurveOutOfRange { value: f64 },
}
