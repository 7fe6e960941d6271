//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use std::fs;
use tempfile::tempdir;

use crate::config::{ConfigLoader, MakaiConfig, Validate};
use crate::error::config::ConfigError;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MakaiConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MakaiConfig::default();

    // Invalid server configuration
    config.server.max_pending_bytes = 0;
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.server.max_pending_bytes = 1024;
    config.http.user_agent = "   ".to_string();
    assert!(config.validate().is_err());

    // Fix and test another invalid value
    config.http.user_agent = "Test-Agent/1.0".to_string();
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config_file_test.toml");

    let config_content = r#"
    [server]
    name = "test-server"
    max_pending_bytes = 65536

    [http]
    user_agent = "Test-Agent/1.0"
    request_timeout_ms = 2500
    "#;
    fs::write(&config_path, config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_FILE");
    let config = loader.load().unwrap();

    // File values override defaults; unset values keep defaults
    assert_eq!(config.server.name, "test-server");
    assert_eq!(config.server.max_pending_bytes, 65536);
    assert_eq!(config.http.user_agent, "Test-Agent/1.0");
    assert_eq!(config.http.request_timeout_ms, 2500);
    assert_eq!(config.server.read_chunk_bytes, 8 * 1024);
    assert!(config.http.follow_redirects);
}

/// Test that a missing configuration file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/nonexistent/makai.toml"), "MAKAI_TEST_MISSING");
    match loader.load() {
        Err(ConfigError::FileNotFound(path)) => {
            assert!(path.to_string_lossy().contains("makai.toml"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

/// Test that an unsupported file extension is rejected.
#[test]
fn test_unsupported_config_extension() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "name=test").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an invalid value in the file fails validation on load.
#[test]
fn test_invalid_file_value_fails_validation() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("invalid.toml");
    fs::write(&config_path, "[log]\nlevel = \"shouting\"\n").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// Test that the generated default TOML round-trips through the loader.
#[test]
fn test_default_toml_round_trip() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("default.toml");
    let toml = toml::to_string_pretty(&MakaiConfig::default()).unwrap();
    fs::write(&config_path, toml).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "MAKAI_TEST_ROUND_TRIP");
    let config = loader.load().unwrap();
    assert_eq!(config.server.name, MakaiConfig::default().server.name);
    assert_eq!(
        config.http.request_timeout_ms,
        MakaiConfig::default().http.request_timeout_ms
    );
}
