//! Metrics collection for API call performance.
//!
//! Records request latency, attempt counts, retries on transient server
//! conditions and categorized errors through the `metrics` facade.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder in the host application)
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and never disrupts API calls
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "op5_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "op5_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "op5_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "op5_api_errors_total";

/// Metric name for commit counter.
pub const METRIC_COMMITS_TOTAL: &str = "op5_api_commits_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection refused, DNS, reset
    Transport,
    /// Request timeout
    Timeout,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Transient condition persisted for every attempt
    RetriesExhausted,
    /// Body could not be decoded
    InvalidResponse,
    /// Rejected before sending
    Validation,
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::RetriesExhausted => "retries_exhausted",
            ErrorCategory::InvalidResponse => "invalid_response",
            ErrorCategory::Validation => "validation",
            ErrorCategory::Unknown => "unknown",
        }
    }

    /// Categorize a reqwest failure that happened before a response arrived.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            ErrorCategory::Timeout
        } else if error.is_connect() || error.is_request() {
            ErrorCategory::Transport
        } else {
            ErrorCategory::Unknown
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Transport(e) => ErrorCategory::from_transport(e),
            ClientError::Api { status, .. } | ClientError::NothingToDo { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::RetriesExhausted { .. } => ErrorCategory::RetriesExhausted,
            ClientError::InvalidResponse { .. } => ErrorCategory::InvalidResponse,
            ClientError::Validation(_) | ClientError::InvalidUrl(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for OP5 API calls.
///
/// A lightweight wrapper around the `metrics` crate macros with consistent labels.
///
/// # Example
///
/// ```rust
/// use op5_client::metrics::MetricsCollector;
/// use std::time::Duration;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("/config/host", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record that attempt number `attempt` is about to be retried.
    pub fn record_retry(&self, endpoint: &str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record a commit of staged changes.
    pub fn record_commit(&self, forced: bool) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_COMMITS_TOTAL, "forced" => forced.to_string()).increment(1);
    }
}
