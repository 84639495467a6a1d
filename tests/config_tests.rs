//! Configuration loading tests
//!
//! Run with: cargo test --test config_tests

use robolearn::config::{load_config_from_path, Config};
use robolearn::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robolearn.toml");
    fs::write(
        &path,
        r#"
[api]
url = "https://api.epicrobotics.dev"
base_path = "/api"
timeout_secs = 30

[auth]
token_file = "/tmp/robolearn-test-token"
"#,
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.url, "https://api.epicrobotics.dev");
    assert_eq!(config.api.base_url(), "https://api.epicrobotics.dev/api");
    assert_eq!(config.api.timeout_secs, Some(30));
    assert_eq!(
        config.auth.token_file.to_str(),
        Some("/tmp/robolearn-test-token")
    );
}

#[test]
fn test_partial_config_gets_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robolearn.toml");
    fs::write(&path, "[api]\nurl = \"http://10.0.0.5:5000\"\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.url, "http://10.0.0.5:5000");
    assert_eq!(config.api.base_path, "/api");
    assert!(config.api.timeout_secs.is_none());
}

#[test]
fn test_missing_file_is_config_not_found() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(Error::ConfigNotFound)));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robolearn.toml");
    fs::write(&path, "this is [ not valid toml").unwrap();

    let result = load_config_from_path(&path);
    assert!(matches!(result, Err(Error::TomlParse(_))));
}

#[test]
fn test_env_interpolation_in_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robolearn.toml");
    fs::write(
        &path,
        "[api]\nurl = \"${ROBOLEARN_TEST_URL:-http://fallback:5000}\"\n",
    )
    .unwrap();

    // Unset: the inline default applies
    std::env::remove_var("ROBOLEARN_TEST_URL");
    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.url, "http://fallback:5000");

    // Set: the environment wins
    std::env::set_var("ROBOLEARN_TEST_URL", "https://staging.epicrobotics.dev");
    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.api.url, "https://staging.epicrobotics.dev");
    std::env::remove_var("ROBOLEARN_TEST_URL");
}

#[test]
fn test_default_config_is_usable() {
    let config = Config::default();
    assert_eq!(config.api.base_url(), "http://localhost:5000/api");
}
