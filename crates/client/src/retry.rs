//! Retry policy for transient server conditions.
//!
//! Two responses are transient: HTTP 509 (the server's sanity protection is
//! refusing edits for a while) and HTTP 500 bodies other than the "nothing to
//! do" export result. Both share the same attempt ceiling and wait.
//!
//! # Invariants
//! - `max_retries` counts attempts, not re-tries: with `max_retries = 3` at
//!   most three requests are sent
//! - A transient condition on the last permitted attempt is fatal, never a
//!   silent failure
//! - Permanent outcomes are never retried

use std::time::Duration;

use op5_config::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_WAIT_SECS};

use crate::endpoints::ResponseOutcome;

/// What to do after an attempt completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// The response is a success; hand it to the caller.
    Accept,
    /// Wait, then send the same request again.
    RetryAfter(Duration),
    /// Report the failure once.
    FailPermanent,
    /// The retry budget is spent on a transient condition.
    FailFatal,
}

/// Bounded fixed-delay retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: usize,
    retry_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, Duration::from_secs(DEFAULT_RETRY_WAIT_SECS))
    }
}

impl RetryPolicy {
    /// A policy allowing `max_retries` attempts (at least one) spaced by `retry_wait`.
    pub fn new(max_retries: usize, retry_wait: Duration) -> Self {
        Self {
            max_retries: max_retries.max(1),
            retry_wait,
        }
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    pub fn retry_wait(&self) -> Duration {
        self.retry_wait
    }

    /// Decide the next step given the outcome of attempt number `attempts_made` (1-based).
    pub fn decide(&self, outcome: &ResponseOutcome, attempts_made: usize) -> RetryDecision {
        match outcome {
            ResponseOutcome::Success(_) => RetryDecision::Accept,
            ResponseOutcome::NothingToDo { .. } | ResponseOutcome::Permanent { .. } => {
                RetryDecision::FailPermanent
            }
            ResponseOutcome::SanityProtectionBusy { .. }
            | ResponseOutcome::InternalErrorRetryable { .. } => {
                if attempts_made < self.max_retries {
                    RetryDecision::RetryAfter(self.retry_wait)
                } else {
                    RetryDecision::FailFatal
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiResponse;
    use serde_json::json;

    fn busy() -> ResponseOutcome {
        ResponseOutcome::SanityProtectionBusy {
            status: 509,
            payload: json!("<html>Sanity protection</html>"),
            body: "<html>Sanity protection</html>".to_string(),
        }
    }

    #[test]
    fn test_transient_retried_until_ceiling() {
        let policy = RetryPolicy::new(3, Duration::from_secs(6));

        assert_eq!(
            policy.decide(&busy(), 1),
            RetryDecision::RetryAfter(Duration::from_secs(6))
        );
        assert_eq!(
            policy.decide(&busy(), 2),
            RetryDecision::RetryAfter(Duration::from_secs(6))
        );
        assert_eq!(policy.decide(&busy(), 3), RetryDecision::FailFatal);
    }

    #[test]
    fn test_internal_error_shares_ceiling() {
        let policy = RetryPolicy::new(2, Duration::from_secs(1));
        let outcome = ResponseOutcome::InternalErrorRetryable {
            status: 500,
            payload: json!({"error": "Database locked"}),
            body: r#"{"error":"Database locked"}"#.to_string(),
        };

        assert!(matches!(
            policy.decide(&outcome, 1),
            RetryDecision::RetryAfter(_)
        ));
        assert_eq!(policy.decide(&outcome, 2), RetryDecision::FailFatal);
    }

    #[test]
    fn test_permanent_and_benign_never_retried() {
        let policy = RetryPolicy::default();
        let permanent = ResponseOutcome::Permanent {
            status: 409,
            reason: "Conflict".to_string(),
            body: "{}".to_string(),
        };
        let nothing = ResponseOutcome::NothingToDo {
            status: 500,
            payload: json!({"error": "Export failed"}),
        };

        assert_eq!(policy.decide(&permanent, 1), RetryDecision::FailPermanent);
        assert_eq!(policy.decide(&nothing, 1), RetryDecision::FailPermanent);
    }

    #[test]
    fn test_success_accepted() {
        let policy = RetryPolicy::default();
        let ok = ResponseOutcome::Success(ApiResponse::new(200, json!([])));
        assert_eq!(policy.decide(&ok, 1), RetryDecision::Accept);
    }

    #[test]
    fn test_single_attempt_minimum() {
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_retries(), 1);
        assert_eq!(policy.decide(&busy(), 1), RetryDecision::FailFatal);
    }
}
