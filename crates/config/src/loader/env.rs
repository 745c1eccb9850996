//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `OP5_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the variable.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: format!("must be {expected}"),
            })
        })
        .transpose()
}

fn parse_seconds(key: &str) -> Result<Option<Duration>, ConfigError> {
    Ok(parse_env::<u64>(key, "a number of seconds")?.map(Duration::from_secs))
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("OP5_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("OP5_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("OP5_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = parse_env("OP5_SKIP_VERIFY", "true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(timeout) = parse_seconds("OP5_TIMEOUT")? {
        loader.set_timeout(Some(timeout));
    }
    if let Some(timeout) = parse_seconds("OP5_QUERY_TIMEOUT")? {
        loader.set_query_timeout(Some(timeout));
    }
    if let Some(retries) = parse_env("OP5_MAX_RETRIES", "a non-negative integer")? {
        loader.set_max_retries(Some(retries));
    }
    if let Some(wait) = parse_seconds("OP5_RETRY_WAIT")? {
        loader.set_retry_wait(Some(wait));
    }
    if let Some(dry_run) = parse_env("OP5_DRY_RUN", "true or false")? {
        loader.set_dry_run(Some(dry_run));
    }
    if let Some(debug) = parse_env("OP5_DEBUG", "true or false")? {
        loader.set_debug(Some(debug));
    }
    Ok(())
}
