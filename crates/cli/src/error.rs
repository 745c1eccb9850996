//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Outcomes where nothing needed doing (dry run, nothing to commit) exit with 0.

use op5_client::ClientError;

/// Structured exit codes for op5-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed, or there was nothing to do.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid credentials.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, TLS or DNS failure.
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// Object not found.
    NotFound = 4,

    /// Validation error - the request was malformed or rejected as invalid.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// Configuration could not be assembled.
    ConfigError = 7,

    /// The server stayed busy for every permitted attempt.
    ///
    /// Its state is unknown; scripts should stop and inspect it.
    ServiceUnavailable = 8,

    /// The commit confirmation was declined.
    Declined = 9,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::DryRun(_) | ClientError::NothingToDo { .. } | ClientError::NothingToCommit => {
                ExitCode::Success
            }

            ClientError::Validation(_) => ExitCode::ValidationError,
            ClientError::Api {
                status: 400 | 409, ..
            } => ExitCode::ValidationError,

            ClientError::Api { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::Api { status: 403, .. } => ExitCode::PermissionDenied,
            ClientError::Api { status: 404, .. } => ExitCode::NotFound,

            ClientError::Transport(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::RetriesExhausted { .. } => ExitCode::ServiceUnavailable,
            ClientError::CommitDeclined => ExitCode::Declined,

            ClientError::Api { .. } | ClientError::InvalidResponse { .. } => {
                ExitCode::GeneralError
            }
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if the error is not a ClientError.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
