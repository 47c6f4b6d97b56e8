//! Snapshot validation and whole-file persistence.

use std::path::{Path, PathBuf};

use curator_core::errors::{CuratorResult, SnapshotError};
use curator_core::models::EngineSnapshot;

/// Check a snapshot against a collection of `total` items.
pub fn validate(snapshot: &EngineSnapshot, total: usize) -> Result<(), SnapshotError> {
    for &index in &snapshot.labeled_indices {
        if index >= total {
            return Err(SnapshotError::IndexOutOfRange { index, total });
        }
    }
    for &index in snapshot.classifications.keys() {
        check_labeled(snapshot, "classifications", index, total)?;
    }
    for &index in snapshot.class_assignments.keys() {
        check_labeled(snapshot, "class_assignments", index, total)?;
    }
    for &value in &snapshot.learning_curve {
        if !(0.0..=1.0).contains(&value) {
            return Err(SnapshotError::CurveOutOfRange { value });
        }
    }
    if !(0.0..=1.0).contains(&snapshot.accuracy) {
        return Err(SnapshotError::CurveOutOfRange {
            value: snapshot.accuracy,
        });
    }
    Ok(())
}

fn check_labeled(
    snapshot: &EngineSnapshot,
    field: &'static str,
    index: usize,
    total: usize,
) -> Result<(), SnapshotError> {
    if index >= total {
        return Err(SnapshotError::IndexOutOfRange { index, total });
    }
    if !snapshot.labeled_indices.contains(&index) {
        return Err(SnapshotError::UnlabeledEntry { field, index });
    }
    Ok(())
}

/// Overwrite `path` with the snapshot. The JSON goes to a sibling temp file
/// first and is renamed into place.
pub fn write(path: &Path, snapshot: &EngineSnapshot) -> CuratorResult<()> {
    let json = snapshot.to_json()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = temp_path(path);
    std::fs::write(&tmp, json)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Read a snapshot file. A missing file is `Ok(None)`.
pub fn read(path: &Path) -> CuratorResult<Option<EngineSnapshot>> {
    let source = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(EngineSnapshot::from_json(&source)?))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_core::models::Label;

    fn snapshot() -> EngineSnapshot {
        EngineSnapshot {
            labeled_indices: vec![0, 2],
            classifications: [(0, Label::new().with("q", "A"))].into(),
            class_assignments: [(0, "A".to_string())].into(),
            learning_curve: vec![0.6, 0.7],
            accuracy: 0.7,
        }
    }

    #[test]
    fn valid_snapshot_passes() {
        assert!(validate(&snapshot(), 3).is_ok());
    }

    #[test]
    fn out_of_range_index_rejected() {
        let err = validate(&snapshot(), 2).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::IndexOutOfRange { index: 2, total: 2 }
        ));
    }

    #[test]
    fn assignment_without_label_rejected() {
        let mut s = snapshot();
        s.class_assignments.insert(1, "B".to_string());
        assert!(matches!(
            validate(&s, 3),
            Err(SnapshotError::UnlabeledEntry {
                field: "class_assignments",
                index: 1
            })
        ));
    }

    #[test]
    fn curve_out_of_range_rejected() {
        let mut s = snapshot();
        s.learning_curve.push(1.5);
        assert!(matches!(
            validate(&s, 3),
            Err(SnapshotError::CurveOutOfRange { .. })
        ));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(&dir.path().join("absent.json")).unwrap().is_none());
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        write(&path, &snapshot()).unwrap();
        assert_eq!(read(&path).unwrap(), Some(snapshot()));
        assert!(!dir.path().join("nested").join("state.json.tmp").exists());
    }
}
