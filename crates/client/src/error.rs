//! Error types for the OP5 client.
//!
//! The variants follow how a failed call should be handled by the caller:
//! local validation failures never touched the network, permanent API errors
//! are reported once, transient server conditions are retried and only
//! surface when the retry budget is spent.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during OP5 client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request was rejected locally; nothing was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Dry-run mode: the request was only reported.
    #[error("Dry run, request not sent: {0}")]
    DryRun(String),

    /// Connection, DNS, TLS or timeout failure. Never retried.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Permanent error response from the API.
    #[error("API error ({status} {reason}) at {url}: {body}")]
    Api {
        status: u16,
        reason: String,
        url: String,
        body: String,
    },

    /// The server answered 500 "Export failed / nothing to do".
    ///
    /// Nothing was changed on the server; this is not a malfunction.
    #[error("Server reported nothing to do ({status})")]
    NothingToDo { status: u16, body: serde_json::Value },

    /// Transient failures persisted for every permitted attempt.
    ///
    /// Continuing with an unknown server state is unsafe, so callers should
    /// treat this as fatal.
    #[error("Bailing out after {attempts} attempts on HTTP {status}")]
    RetriesExhausted {
        status: u16,
        attempts: usize,
        /// Raw body of the last response.
        body: String,
    },

    /// The response body could not be decoded in a context that requires JSON.
    #[error("Invalid response ({status}): {message}")]
    InvalidResponse {
        status: u16,
        message: String,
        body: String,
    },

    /// A commit was requested but the server has no staged changes.
    #[error("Nothing to commit: the server has no staged changes")]
    NothingToCommit,

    /// The confirmation prompt for a commit was declined.
    #[error("Commit declined")]
    CommitDeclined,

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of the last response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::NothingToDo { status, .. }
            | Self::RetriesExhausted { status, .. }
            | Self::InvalidResponse { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw body of the last response, when one was received and kept as text.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. }
            | Self::RetriesExhausted { body, .. }
            | Self::InvalidResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Whether the error leaves the server in an unknown state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RetriesExhausted { .. })
    }

    /// Whether the failure is a definitive no-op rather than a malfunction.
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::NothingToDo { .. } | Self::NothingToCommit)
    }

    /// Whether no request was sent at all.
    pub fn is_not_attempted(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DryRun(_))
    }

    /// Whether the server reported the object as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
