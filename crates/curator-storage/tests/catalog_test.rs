//! Catalog tests: item ids and positions, feature rows, atomic add, file reopen.

use curator_core::errors::ErrorKind;
use curator_core::models::{FeatureMatrix, NewItem};
use curator_core::traits::ICatalog;
use curator_storage::StorageEngine;

fn new_item(title: &str) -> NewItem {
    NewItem {
        title: title.to_string(),
        artist: "Anon".to_string(),
        year: 1850,
        image_path: format!("/images/{title}.jpg"),
    }
}

// ── Items ─────────────────────────────────────────────────────────────────

#[test]
fn empty_catalog_has_no_items_or_features() {
    let engine = StorageEngine::open_in_memory().unwrap();
    assert_eq!(engine.item_count().unwrap(), 0);
    assert!(engine.list_items().unwrap().is_empty());
    assert!(engine.load_features().unwrap().is_none());
    assert_eq!(engine.feature_row_count().unwrap(), 0);
}

#[test]
fn first_item_gets_id_zero_then_increments() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let stored = engine
        .import_items(&[new_item("a"), new_item("b"), new_item("c")])
        .unwrap();
    let ids: Vec<i64> = stored.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    let listed = engine.list_items().unwrap();
    assert_eq!(listed, stored);
}

#[test]
fn get_item_by_id() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.import_items(&[new_item("a"), new_item("b")]).unwrap();
    let item = engine.get_item(1).unwrap().expect("should exist");
    assert_eq!(item.title, "b");
    assert!(engine.get_item(42).unwrap().is_none());
}

// ── Features ──────────────────────────────────────────────────────────────

#[test]
fn replace_and_load_features_preserves_values() {
    let engine = StorageEngine::open_in_memory().unwrap();
    let matrix =
        FeatureMatrix::from_rows(vec![vec![0.25, -1.0], vec![3.5, 1e-7], vec![0.0, 0.0]])
            .unwrap();
    engine.replace_features(&matrix).unwrap();
    assert_eq!(engine.load_features().unwrap(), Some(matrix));

    let smaller = FeatureMatrix::from_rows(vec![vec![9.0]]).unwrap();
    engine.replace_features(&smaller).unwrap();
    assert_eq!(engine.feature_row_count().unwrap(), 1);
    assert_eq!(engine.load_features().unwrap(), Some(smaller));
}

#[test]
fn add_item_appends_metadata_and_feature_row() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine.import_items(&[new_item("a")]).unwrap();
    engine
        .replace_features(&FeatureMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap())
        .unwrap();

    let added = engine
        .add_item_with_features(new_item("b"), &[3.0, 4.0])
        .unwrap();
    assert_eq!(added.id, 1);
    assert_eq!(engine.item_count().unwrap(), 2);

    let features = engine.load_features().unwrap().unwrap();
    assert_eq!(features.rows(), 2);
    assert_eq!(features.row(1), &[3.0, 4.0]);
}

#[test]
fn ragged_feature_rows_rejected_on_load() {
    let engine = StorageEngine::open_in_memory().unwrap();
    engine
        .add_item_with_features(new_item("a"), &[1.0, 2.0])
        .unwrap();
    engine.add_item_with_features(new_item("b"), &[1.0]).unwrap();
    let err = engine.load_features().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn feature_gap_stops_loading() {
    let engine = StorageEngine::open_in_memory().unwrap();
    // Items without features, then one with: its row sits at position 2.
    engine.import_items(&[new_item("a"), new_item("b")]).unwrap();
    engine
        .add_item_with_features(new_item("c"), &[1.0])
        .unwrap();
    assert_eq!(engine.feature_row_count().unwrap(), 1);
    assert!(engine.load_features().unwrap().is_none());
}

// ── File persistence ──────────────────────────────────────────────────────

#[test]
fn reopen_file_keeps_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("curator.db");
    {
        let engine = StorageEngine::open(&path, 1000).unwrap();
        assert!(engine.is_wal_mode().unwrap());
        engine
            .add_item_with_features(new_item("a"), &[0.5, 0.5])
            .unwrap();
    }
    let engine = StorageEngine::open(&path, 1000).unwrap();
    assert_eq!(engine.item_count().unwrap(), 1);
    assert_eq!(engine.load_features().unwrap().unwrap().row(0), &[0.5, 0.5]);
    assert_eq!(engine.schema_version().unwrap(), 2);
}
