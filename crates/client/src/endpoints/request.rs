//! Request execution with classification and bounded retry.
//!
//! Every call shape (object CRUD, command submission, querystring reads)
//! funnels through [`send_request_with_retry`], so they share one decoding
//! and retry discipline.
//!
//! # Invariants
//! - A retry re-sends the identical request (same verb, URL and body)
//! - Transport failures are returned immediately and never retried
//! - Sleeps happen only between attempts, never after the last one

use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::endpoints::classify::{ResponseOutcome, STATUS_SANITY_PROTECTION, classify};
use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::models::ApiResponse;
use crate::retry::{RetryDecision, RetryPolicy};

/// Sends a request, retrying transient server conditions per `policy`.
///
/// # Arguments
///
/// * `builder` - The fully prepared request (URL, auth, headers, body, timeout)
/// * `policy` - Attempt ceiling and wait between attempts
/// * `endpoint` - Endpoint label for logs and metrics (e.g. `/config/host`)
/// * `method` - HTTP method label for logs and metrics
/// * `metrics` - Optional metrics collector
///
/// # Errors
///
/// - `ClientError::Transport` for connection and timeout failures
/// - `ClientError::Api` for permanent non-2xx responses
/// - `ClientError::NothingToDo` for the benign 500 export result
/// - `ClientError::RetriesExhausted` when every permitted attempt was transient
/// - `ClientError::InvalidResponse` for bodies that should have been JSON
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    policy: &RetryPolicy,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiResponse> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None if attempt == 1 => {
                debug!("Request builder cannot be cloned, single attempt only");
                let (outcome, url) = send_once(builder, endpoint, method, metrics).await?;
                return finish_without_retry(outcome, url, endpoint, method, metrics);
            }
            None => {
                return Err(ClientError::RetriesExhausted {
                    status: 0,
                    attempts: attempt - 1,
                    body: String::new(),
                });
            }
        };

        let (outcome, url) = send_once(attempt_builder, endpoint, method, metrics).await?;

        match (policy.decide(&outcome, attempt), outcome) {
            (RetryDecision::Accept, ResponseOutcome::Success(response)) => {
                if attempt > 1 {
                    debug!(attempt, endpoint, "Request succeeded after retry");
                }
                return Ok(response);
            }
            (RetryDecision::RetryAfter(wait), outcome) => {
                let status = outcome.status();
                if status == STATUS_SANITY_PROTECTION {
                    warn!(
                        attempt,
                        max_retries = policy.max_retries(),
                        wait_secs = wait.as_secs(),
                        "Sanity protection activated, waiting before trying again"
                    );
                } else {
                    warn!(
                        attempt,
                        max_retries = policy.max_retries(),
                        wait_secs = wait.as_secs(),
                        status,
                        "Internal server error, waiting before trying again"
                    );
                }
                if let Some(m) = metrics {
                    m.record_retry(endpoint, method, attempt);
                }
                tokio::time::sleep(wait).await;
            }
            (RetryDecision::FailFatal, outcome) => {
                let status = outcome.status();
                let body = outcome.raw_body().unwrap_or_default().to_string();
                error!(
                    attempts = attempt,
                    status,
                    endpoint,
                    method,
                    body = %body,
                    "Retries exhausted on transient server condition"
                );
                let err = ClientError::RetriesExhausted {
                    status,
                    attempts: attempt,
                    body,
                };
                if let Some(m) = metrics {
                    m.record_client_error(endpoint, method, &err);
                }
                return Err(err);
            }
            (_, outcome) => return finish_without_retry(outcome, url, endpoint, method, metrics),
        }
    }
}

/// Send one attempt and classify the result. Returns the outcome and final URL.
async fn send_once(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<(ResponseOutcome, String)> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let start = Instant::now();

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            error!(endpoint, method, error = %e, "Request failed before a response was received");
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, start.elapsed(), None);
                m.record_error(endpoint, method, ErrorCategory::from_transport(&e));
            }
            return Err(ClientError::Transport(e));
        }
    };

    let status = response.status();
    let url = response.url().to_string();
    let reason = status.canonical_reason().unwrap_or_default().to_string();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    debug!(status = status.as_u16(), headers = ?response.headers(), "Received response");

    let text = response.text().await?;
    debug!(body = %text, "Response body");

    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, start.elapsed(), Some(status.as_u16()));
    }

    match classify(status.as_u16(), &reason, content_type.as_deref(), text) {
        Ok(outcome) => Ok((outcome, url)),
        Err(e) => {
            error!(endpoint, method, error = %e, "Response could not be decoded");
            if let Some(m) = metrics {
                m.record_client_error(endpoint, method, &e);
            }
            Err(e)
        }
    }
}

/// Map a non-retried outcome to the caller's result, recording failures.
fn finish_without_retry(
    outcome: ResponseOutcome,
    url: String,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiResponse> {
    let err = match outcome {
        ResponseOutcome::Success(response) => return Ok(response),
        ResponseOutcome::NothingToDo { status, payload } => {
            info!(endpoint, method, "Server reported nothing to do");
            ClientError::NothingToDo {
                status,
                body: payload,
            }
        }
        ResponseOutcome::Permanent {
            status,
            reason,
            body,
        } => {
            error!(status, reason = %reason, url = %url, body = %body, "{method}({endpoint}): request failed");
            ClientError::Api {
                status,
                reason,
                url,
                body,
            }
        }
        ResponseOutcome::SanityProtectionBusy { status, body, .. }
        | ResponseOutcome::InternalErrorRetryable { status, body, .. } => {
            ClientError::RetriesExhausted {
                status,
                attempts: 1,
                body,
            }
        }
    };

    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }
    Err(err)
}
