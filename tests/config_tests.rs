//! Engine configuration loading from JSON files and CLI overrides

use std::io::Write;

use clap::Parser;
use tempfile::NamedTempFile;

use tetris_playfield::cli::{load_config, Cli};
use tetris_playfield::types::EngineConfig;

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn partial_file_keeps_defaults() {
    let file = config_file(r#"{ "width": 12, "lines_per_level": 5 }"#);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.width, 12);
    assert_eq!(config.lines_per_level, 5);
    assert_eq!(config.height, 20);
    assert_eq!(config.base_fall_ms, 500);
    assert_eq!(config.points_per_line, 100);
}

#[test]
fn empty_object_is_the_default_config() {
    let file = config_file("{}");
    assert_eq!(load_config(file.path()).unwrap(), EngineConfig::default());
}

#[test]
fn malformed_json_reports_the_file() {
    let file = config_file("{ width: ");
    let err = load_config(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("nope.json")).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config file"));
}

#[test]
fn cli_flags_override_file_values() {
    let file = config_file(r#"{ "width": 12, "height": 30 }"#);
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["tetris-playfield", "--config", path, "--height", "16"]).unwrap();
    let config = cli.engine_config().unwrap();
    assert_eq!((config.width, config.height), (12, 16));
}

#[test]
fn invalid_values_fail_validation() {
    let file = config_file(r#"{ "base_fall_ms": 100, "fall_floor_ms": 200 }"#);
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["tetris-playfield", "--config", path]).unwrap();
    let err = cli.engine_config().unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("invalid engine configuration"), "{msg}");
    assert!(msg.contains("fall floor 200ms"), "{msg}");
}
