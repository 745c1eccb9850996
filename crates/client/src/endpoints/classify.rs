//! Response decoding and classification.
//!
//! The body is decoded as JSON where possible; otherwise the raw text is
//! kept as the payload. Some non-JSON shapes are expected (the sanity
//! protection page), others indicate a broken server response and are
//! surfaced as [`ClientError::InvalidResponse`].

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::ApiResponse;

/// Status the server uses while its sanity protection refuses edits.
pub const STATUS_SANITY_PROTECTION: u16 = 509;

/// Classification of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// 200 or 201.
    Success(ApiResponse),
    /// 509, transient. `body` is the raw response text.
    SanityProtectionBusy {
        status: u16,
        payload: Value,
        body: String,
    },
    /// 500 other than the "nothing to do" export result, transient.
    InternalErrorRetryable {
        status: u16,
        payload: Value,
        body: String,
    },
    /// 500 "Export failed / nothing to do": nothing changed on the server.
    NothingToDo { status: u16, payload: Value },
    /// Any other status. Reported once.
    Permanent {
        status: u16,
        reason: String,
        body: String,
    },
}

impl ResponseOutcome {
    pub fn status(&self) -> u16 {
        match self {
            Self::Success(response) => response.status,
            Self::SanityProtectionBusy { status, .. }
            | Self::InternalErrorRetryable { status, .. }
            | Self::NothingToDo { status, .. }
            | Self::Permanent { status, .. } => *status,
        }
    }

    /// Raw body of a failed exchange; `None` for successes and benign results.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::SanityProtectionBusy { body, .. }
            | Self::InternalErrorRetryable { body, .. }
            | Self::Permanent { body, .. } => Some(body),
            Self::Success(_) | Self::NothingToDo { .. } => None,
        }
    }
}

/// Whether a decoded 500 body is the benign "Export failed / nothing to do" result.
pub fn is_nothing_to_do(payload: &Value) -> bool {
    payload.get("error").and_then(Value::as_str) == Some("Export failed")
        && payload
            .get("full_error")
            .and_then(|e| e.get("type"))
            .and_then(Value::as_str)
            == Some("nothing to do")
}

/// Decode a response body.
///
/// Returns the raw text as a JSON string when it does not parse, unless the
/// shape indicates the server failed to produce JSON it should have produced.
pub fn decode_body(status: u16, content_type: Option<&str>, text: &str) -> Result<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => Ok(value),
        Err(_) if status == STATUS_SANITY_PROTECTION => Ok(Value::String(text.to_string())),
        Err(e) => {
            let is_html = content_type.is_some_and(|ct| ct.contains("text/html"));
            // A 200 can carry "index mismatch"; other failures must be JSON, never HTML.
            if text.contains("index mismatch") || (!matches!(status, 200 | 201) && is_html) {
                Err(ClientError::InvalidResponse {
                    status,
                    message: format!("expected JSON body: {e}"),
                    body: text.to_string(),
                })
            } else {
                Ok(Value::String(text.to_string()))
            }
        }
    }
}

/// Classify a completed exchange.
pub fn classify(
    status: u16,
    reason: &str,
    content_type: Option<&str>,
    text: String,
) -> Result<ResponseOutcome> {
    let payload = decode_body(status, content_type, &text)?;

    let outcome = match status {
        200 | 201 => ResponseOutcome::Success(ApiResponse::new(status, payload)),
        STATUS_SANITY_PROTECTION => ResponseOutcome::SanityProtectionBusy {
            status,
            payload,
            body: text,
        },
        500 if is_nothing_to_do(&payload) => ResponseOutcome::NothingToDo { status, payload },
        500 => ResponseOutcome::InternalErrorRetryable {
            status,
            payload,
            body: text,
        },
        _ => ResponseOutcome::Permanent {
            status,
            reason: reason.to_string(),
            body: text,
        },
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JSON: Option<&str> = Some("application/json");
    const HTML: Option<&str> = Some("text/html; charset=utf-8");

    #[test]
    fn test_success_statuses() {
        for status in [200, 201] {
            let outcome = classify(status, "OK", JSON, r#"{"host_name":"web01"}"#.into()).unwrap();
            assert_eq!(
                outcome,
                ResponseOutcome::Success(ApiResponse::new(status, json!({"host_name": "web01"})))
            );
        }
    }

    #[test]
    fn test_sanity_protection_page_is_busy() {
        let outcome = classify(509, "", HTML, "<html>Sanity check</html>".into()).unwrap();
        assert!(matches!(
            outcome,
            ResponseOutcome::SanityProtectionBusy { status: 509, .. }
        ));
        assert_eq!(outcome.raw_body(), Some("<html>Sanity check</html>"));
    }

    #[test]
    fn test_nothing_to_do_shape() {
        let body = r#"{"error":"Export failed","full_error":{"type":"nothing to do"}}"#;
        let outcome = classify(500, "Internal Server Error", JSON, body.into()).unwrap();
        assert!(matches!(outcome, ResponseOutcome::NothingToDo { status: 500, .. }));
    }

    #[test]
    fn test_other_export_failures_are_retryable() {
        let body = r#"{"error":"Export failed","full_error":{"type":"verify failed"}}"#;
        let outcome = classify(500, "Internal Server Error", JSON, body.into()).unwrap();
        assert!(matches!(
            outcome,
            ResponseOutcome::InternalErrorRetryable { .. }
        ));
    }

    #[test]
    fn test_client_errors_are_permanent_and_keep_raw_body() {
        let body = r#"{"error":"Object already exists"}"#;
        let outcome = classify(409, "Conflict", JSON, body.into()).unwrap();
        assert_eq!(
            outcome,
            ResponseOutcome::Permanent {
                status: 409,
                reason: "Conflict".to_string(),
                body: body.to_string(),
            }
        );
        assert_eq!(outcome.status(), 409);
    }

    #[test]
    fn test_html_error_page_is_invalid_response() {
        let err = classify(404, "Not Found", HTML, "<html>Not found</html>".into()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse { status: 404, .. }));
        assert_eq!(err.body(), Some("<html>Not found</html>"));
    }

    #[test]
    fn test_index_mismatch_is_invalid_even_on_success() {
        let result = classify(200, "OK", Some("text/plain"), "index mismatch".into());
        assert!(matches!(result, Err(ClientError::InvalidResponse { .. })));
    }

    #[test]
    fn test_plain_text_kept_as_string_payload() {
        let value = decode_body(200, Some("text/plain"), "Commit saved").unwrap();
        assert_eq!(value, json!("Commit saved"));
    }
}
