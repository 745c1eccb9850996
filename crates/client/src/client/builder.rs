//! Client builder for constructing [`Op5Client`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (TLS verification)
//!
//! # Invariants
//! - `base_url` and the username are required before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use op5_config::Config;
use op5_config::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_RETRY_WAIT_SECS, DEFAULT_TIMEOUT_SECS,
};
use secrecy::SecretString;

use crate::client::Op5Client;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::retry::RetryPolicy;

pub struct Op5ClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: SecretString,
    skip_verify: bool,
    timeout: Duration,
    query_timeout: Duration,
    max_retries: usize,
    retry_wait: Duration,
    dry_run: bool,
    debug: bool,
    metrics: Option<MetricsCollector>,
}

impl Default for Op5ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            username: None,
            password: SecretString::new(String::new().into()),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_wait: Duration::from_secs(DEFAULT_RETRY_WAIT_SECS),
            dry_run: false,
            debug: false,
            metrics: None,
        }
    }
}

impl Op5ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// API root, e.g. `https://op5.example.com/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = SecretString::new(password.into().into());
        self
    }

    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Timeout for object CRUD requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout for command and querystring requests.
    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.username = Some(config.auth.username.clone());
        self.password = config.auth.password.clone();
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.query_timeout = config.connection.query_timeout;
        self.max_retries = config.connection.max_retries;
        self.retry_wait = config.connection.retry_wait;
        self.dry_run = config.connection.dry_run;
        self.debug = config.connection.debug;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    pub fn build(self) -> Result<Op5Client> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let is_https = base_url.starts_with("https://");
        if !is_https && !base_url.starts_with("http://") {
            return Err(ClientError::InvalidUrl(format!(
                "base_url must start with http:// or https://, got '{base_url}'"
            )));
        }

        let username = self
            .username
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ClientError::Validation("username is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder();

        if self.skip_verify {
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(Op5Client {
            http,
            base_url,
            username,
            password: self.password,
            timeout: self.timeout,
            query_timeout: self.query_timeout,
            retry_policy: RetryPolicy::new(self.max_retries, self.retry_wait),
            dry_run: self.dry_run,
            debug: self.debug,
            metrics: self.metrics,
        })
    }
}
