//! Test fixture loader for curator selection scenarios and feature files.
//!
//! Provides typed deserialization of the scenario JSON files and helper
//! functions for loading them in tests across crates.

use curator_core::models::{FeatureMatrix, ItemRecord, Label};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One scripted label in a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedLabel {
    pub item_id: i64,
    pub label: Label,
}

/// A feature matrix, its metadata table, and a label script.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub features: Vec<Vec<f32>>,
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub labels: Vec<ScriptedLabel>,
}

impl Scenario {
    /// The scenario's feature rows as a matrix.
    ///
    /// # Panics
    /// Panics on ragged rows.
    pub fn matrix(&self) -> FeatureMatrix {
        FeatureMatrix::from_rows(self.features.clone())
            .unwrap_or_else(|e| panic!("Invalid scenario features: {e}"))
    }
}

/// Load `scenarios/<name>.json`.
pub fn load_scenario(name: &str) -> Scenario {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// Load a binary feature file.
///
/// Format: header (count: u32 LE, dims: u32 LE) + body (count * dims * f32 LE).
pub fn load_features_binary(relative_path: &str) -> FeatureMatrix {
    let path = fixtures_root().join(relative_path);
    let data = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("Failed to read features {}: {}", path.display(), e));
    FeatureMatrix::from_le_bytes(&data)
        .unwrap_or_else(|e| panic!("Invalid feature file {}: {}", path.display(), e))
}
