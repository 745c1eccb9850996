//! Connection configuration types for the OP5 client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `constants`, not magic numbers.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RETRY_WAIT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the monitoring server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the REST API (e.g., https://monitor.example.com/api)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Timeout for object CRUD requests (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Timeout for command, filter and report requests (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub query_timeout: Duration,
    /// Number of attempts for transiently failing requests
    pub max_retries: usize,
    /// Wait between attempts (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub retry_wait: Duration,
    /// Report mutating requests instead of sending them
    #[serde(default)]
    pub dry_run: bool,
    /// Verbose request tracing and service parent disambiguation
    #[serde(default)]
    pub debug: bool,
}

impl ConnectionConfig {
    /// Connection settings for `base_url` with every other field at its default.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_wait: Duration::from_secs(DEFAULT_RETRY_WAIT_SECS),
            dry_run: false,
            debug: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a new config with the specified base URL and credentials.
    pub fn new(base_url: impl Into<String>, auth: AuthConfig) -> Self {
        Self {
            connection: ConnectionConfig::new(base_url),
            auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_defaults() {
        let conn = ConnectionConfig::new("https://op5.example.com/api");
        assert_eq!(conn.timeout, Duration::from_secs(60));
        assert_eq!(conn.query_timeout, Duration::from_secs(10));
        assert_eq!(conn.max_retries, 3);
        assert_eq!(conn.retry_wait, Duration::from_secs(6));
        assert!(!conn.dry_run);
        assert!(!conn.debug);
    }

    #[test]
    fn test_durations_serialize_as_seconds() {
        let config = Config::new(
            "https://op5.example.com/api",
            AuthConfig::new("monitor", "pw"),
        );
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["connection"]["timeout"], 60);
        assert_eq!(json["connection"]["retry_wait"], 6);
    }

    #[test]
    fn test_flags_default_when_absent() {
        let json = r#"{
            "base_url": "https://op5.example.com/api",
            "skip_verify": true,
            "timeout": 30,
            "query_timeout": 5,
            "max_retries": 2,
            "retry_wait": 1
        }"#;
        let conn: ConnectionConfig = serde_json::from_str(json).unwrap();

        assert!(conn.skip_verify);
        assert!(!conn.dry_run);
        assert!(!conn.debug);
        assert_eq!(conn.query_timeout, Duration::from_secs(5));
    }
}
