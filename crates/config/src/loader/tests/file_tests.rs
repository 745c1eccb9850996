//! Config file tests for the configuration loader.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use serial_test::serial;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

use super::{env_lock, with_op5_env};

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_file_values_loaded() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{
            "base_url": "https://file.example.com/api",
            "username": "file-user",
            "password": "file-pass",
            "timeout_seconds": 120,
            "retry_wait_seconds": 1,
            "debug": true
        }"#,
    );

    with_op5_env(&[], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://file.example.com/api");
        assert_eq!(config.connection.timeout, Duration::from_secs(120));
        assert_eq!(config.connection.retry_wait, Duration::from_secs(1));
        assert!(config.connection.debug);
    });
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{"base_url": "https://file.example.com/api", "username": "u", "password": "p"}"#,
    );

    with_op5_env(&[("OP5_BASE_URL", "https://override.example.com/api")], || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            config.connection.base_url,
            "https://override.example.com/api"
        );
    });
}

#[test]
#[serial]
fn test_config_path_from_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        temp_dir.path(),
        r#"{"base_url": "https://file.example.com/api", "username": "u", "password": "p"}"#,
    );
    let path_str = path.to_string_lossy().to_string();

    with_op5_env(&[("OP5_CONFIG_PATH", path_str.as_str())], || {
        let config = ConfigLoader::new().from_file().unwrap().build().unwrap();
        assert_eq!(config.connection.base_url, "https://file.example.com/api");
    });
}

#[test]
#[serial]
fn test_explicit_missing_file_is_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();

    with_op5_env(&[], || {
        let result = ConfigLoader::new()
            .with_config_path(temp_dir.path().join("absent.json"))
            .from_file();
        assert!(matches!(result, Err(ConfigError::ConfigFileRead { .. })));
    });
}

#[test]
#[serial]
fn test_malformed_file_is_parse_error() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"base_url": "#);

    with_op5_env(&[], || {
        let result = ConfigLoader::new().with_config_path(path.clone()).from_file();
        match result {
            Err(ConfigError::ConfigFileParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other.err()),
        }
    });
}

#[test]
#[serial]
fn test_unknown_file_keys_rejected() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), r#"{"base_uri": "https://typo.example.com"}"#);

    with_op5_env(&[], || {
        let result = ConfigLoader::new().with_config_path(path.clone()).from_file();
        assert!(matches!(result, Err(ConfigError::ConfigFileParse { .. })));
    });
}
