//! Config file loading.
//!
//! The config file is a flat JSON object whose keys mirror the environment
//! variables (`base_url`, `username`, `password`, `timeout_seconds`, ...).
//! Every key is optional; absent keys leave the loader untouched.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::APP_NAME;

/// On-disk configuration. All fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_verify: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub query_timeout_seconds: Option<u64>,
    pub max_retries: Option<usize>,
    pub retry_wait_seconds: Option<u64>,
    pub dry_run: Option<bool>,
    pub debug: Option<bool>,
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/op5-client/config.json`
/// - macOS: `~/Library/Application Support/op5-client/config.json`
/// - Windows: `%AppData%\op5-client\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply config file values to the loader.
///
/// An explicitly configured path (builder or `OP5_CONFIG_PATH`) must exist; a missing file at the default
/// location is silently skipped.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => match env_var_or_none("OP5_CONFIG_PATH") {
            Some(path) => (PathBuf::from(path), true),
            None => (default_config_path()?, false),
        },
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No config file at default location");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    apply_file_config(loader, file);
    Ok(())
}

fn apply_file_config(loader: &mut ConfigLoader, file: FileConfig) {
    if let Some(url) = file.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = file.username {
        loader.set_username(Some(username));
    }
    if let Some(password) = file.password {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = file.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(secs) = file.query_timeout_seconds {
        loader.set_query_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = file.max_retries {
        loader.set_max_retries(Some(retries));
    }
    if let Some(secs) = file.retry_wait_seconds {
        loader.set_retry_wait(Some(Duration::from_secs(secs)));
    }
    if let Some(dry_run) = file.dry_run {
        loader.set_dry_run(Some(dry_run));
    }
    if let Some(debug) = file.debug {
        loader.set_debug(Some(debug));
    }
}
