//! Main OP5 configuration API client.
//!
//! [`Op5Client`] is stateless: every call validates, sends and classifies a
//! single request (plus any retries) and returns an explicit result. The
//! staged-change bookkeeping lives in [`crate::session::Session`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `objects`: Object CRUD against `/config/{type}`
//! - `commands`: Command submission against `/command/{type}`
//! - `queries`: Filter and report reads carried as query parameters
//!
//! # What this module does NOT handle:
//! - Response classification and retries (delegated to [`crate::endpoints`])
//! - Change tracking and commits (handled by [`crate::session`])
//!
//! # Invariants
//! - Every request carries basic authentication and `Content-Type: application/json`
//! - Object CRUD uses the long timeout; commands and queries use the short one
//! - In dry-run mode only GET requests reach the network

pub mod builder;

mod commands;
mod objects;
mod queries;

use std::time::Duration;

use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use crate::metrics::MetricsCollector;
use crate::retry::RetryPolicy;

/// OP5 Monitor configuration API client.
///
/// # Creating a Client
///
/// ```rust
/// use op5_client::Op5Client;
///
/// let client = Op5Client::builder()
///     .base_url("https://op5.example.com/api/")
///     .credentials("admin", "secret")
///     .build()?;
/// assert_eq!(client.base_url(), "https://op5.example.com/api");
/// # Ok::<(), op5_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct Op5Client {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) username: String,
    pub(crate) password: SecretString,
    pub(crate) timeout: Duration,
    pub(crate) query_timeout: Duration,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) dry_run: bool,
    pub(crate) debug: bool,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl Op5Client {
    /// Create a new client builder.
    pub fn builder() -> builder::Op5ClientBuilder {
        builder::Op5ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }

    /// Start an authenticated JSON request with the given timeout.
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        url: &str,
        timeout: Duration,
    ) -> RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(CONTENT_TYPE, "application/json")
            .timeout(timeout)
    }
}
