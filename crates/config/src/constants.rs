//! Centralized constants for the OP5 client workspace.
//!
//! This module contains default values and bounds used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default timeout for object CRUD requests in seconds.
///
/// Some configuration operations (notably the export triggered by a commit)
/// are slow on the server side, so this is deliberately generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default timeout for command, filter and report requests in seconds.
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Retry Defaults
// =============================================================================

/// Default number of attempts made for a transiently failing request.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default wait between attempts in seconds.
pub const DEFAULT_RETRY_WAIT_SECS: u64 = 6;

/// Upper bound for the wait between attempts in seconds.
pub const MAX_RETRY_WAIT_SECS: u64 = 600;

// =============================================================================
// Staged Changes
// =============================================================================

/// Default number of bulk items applied between forced commits.
pub const DEFAULT_BULK_SLICE_SIZE: usize = 50;

// =============================================================================
// Paths
// =============================================================================

/// Application name used for the default config directory.
pub const APP_NAME: &str = "op5-client";
