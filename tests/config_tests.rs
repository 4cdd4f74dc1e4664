//! Tests for loading settings from a JSON file.

use std::fs;

use regionview::model::constants::MIN_UPDATE_INTERVAL_MS;
use regionview::model::{Placement, Settings};
use regionview::storage::{load_from_path, ConfigError};

fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = load_from_path(&dir.path().join("nope.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = write_config(r#"{ "update_interval_ms": 250 }"#);
    let settings = load_from_path(&path).unwrap().unwrap();
    assert_eq!(settings.update_interval_ms, 250);
    assert_eq!(settings.placement, Placement::Center);
    assert_eq!(settings.default_transparency, Settings::default().default_transparency);
}

#[test]
fn placement_parses_snake_case() {
    let (_dir, path) = write_config(r#"{ "placement": "top_left" }"#);
    let settings = load_from_path(&path).unwrap().unwrap();
    assert_eq!(settings.placement, Placement::TopLeft);
}

#[test]
fn out_of_range_values_are_clamped_on_load() {
    let (_dir, path) = write_config(r#"{ "update_interval_ms": 1, "default_transparency": 4.0 }"#);
    let settings = load_from_path(&path).unwrap().unwrap();
    assert_eq!(settings.update_interval_ms, MIN_UPDATE_INTERVAL_MS);
    assert_eq!(settings.default_transparency, 1.0);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let (_dir, path) = write_config("{ not json");
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.json"));
}

#[test]
fn unknown_placement_is_a_parse_error() {
    let (_dir, path) = write_config(r#"{ "placement": "bottom" }"#);
    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::Parse { .. })
    ));
}
