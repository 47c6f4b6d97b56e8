use curator_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CuratorConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "curator.db");
    assert_eq!(config.storage.snapshot_path, "model_state.json");
    assert_eq!(config.storage.images_dir, "images");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    // Extraction defaults
    assert_eq!(config.extraction.provider, "none");
    assert_eq!(config.extraction.dimensions, 512);
    assert_eq!(config.extraction.timeout_secs, 30);
    assert_eq!(config.extraction.cache_size, 256);

    // Session defaults
    assert!(config.session.autosave);
    assert!(config.session.load_snapshot_on_start);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/custom/catalog.db"

[extraction]
provider = "http"
dimensions = 128
"#;
    let config = CuratorConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/custom/catalog.db");
    // Non-overridden fields keep defaults
    assert_eq!(config.storage.snapshot_path, "model_state.json");
    assert_eq!(config.extraction.provider, "http");
    assert_eq!(config.extraction.dimensions, 128);
    assert_eq!(config.extraction.timeout_secs, 30);
}

#[test]
fn config_serde_roundtrip() {
    let config = CuratorConfig::default();
    let toml_str = config.to_toml().unwrap();
    let reparsed = CuratorConfig::from_toml(&toml_str).unwrap();
    assert_eq!(reparsed.storage.db_path, config.storage.db_path);
    assert_eq!(reparsed.extraction.dimensions, config.extraction.dimensions);
}

#[test]
fn invalid_toml_is_a_config_error() {
    let err = CuratorConfig::from_toml("[storage\nnope").unwrap_err();
    assert!(matches!(err, curator_core::CuratorError::ConfigError(_)));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("curator.toml");
    std::fs::write(&path, "[session]\nautosave = false\n").unwrap();
    let config = CuratorConfig::load(&path).unwrap();
    assert!(!config.session.autosave);
    assert!(config.session.load_snapshot_on_start);
}
