mod common;

use common::temp_file;
use scoreboard::config::{Config, ConfigError, UiConfig};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.ui.title, "Simple Scoreboard Application");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(250));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("scoreboard/config.toml"));
}

#[test]
fn test_missing_file_yields_default() {
    let config = Config::load_from(Path::new("/nonexistent/scoreboard/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntitle = \"Derby Night\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.title, "Derby Night");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn test_empty_file_is_default() {
    let (_dir, path) = temp_file("config.toml", "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_parse_error_reports_path() {
    let (_dir, path) = temp_file("config.toml", "[ui\ntitle = ");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_blank_title() {
    let config = Config {
        ui: UiConfig {
            title: "   ".to_string(),
            ..UiConfig::default()
        },
    };
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("ui.title")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_tick_rate_out_of_range() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntick_rate_ms = 0\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("tick_rate_ms")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_read_error_on_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    match Config::load_from(dir.path()).unwrap_err() {
        ConfigError::ReadError { .. } => {}
        other => panic!("Expected ReadError, got {other:?}"),
    }
}
