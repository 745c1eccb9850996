//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use std::time::Duration;

#[allow(unused_imports)]
pub use op5_client::{ApiResponse, ClientError, ObjectData, ObjectType, Op5Client, endpoints};
#[allow(unused_imports)]
pub use serde_json::json;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "monitor";
pub const PASSWORD: &str = "s3cret";

/// Nothing-to-do body the server returns when an export has no changes.
#[allow(dead_code)]
pub const NOTHING_TO_DO_BODY: &str =
    r#"{"error":"Export failed","full_error":{"type":"nothing to do"}}"#;

/// Client pointed at `{mock}/api`, retrying without waiting.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> Op5Client {
    client_builder(server)
        .build()
        .expect("test client should build")
}

#[allow(dead_code)]
pub fn client_builder(server: &MockServer) -> op5_client::Op5ClientBuilder {
    Op5Client::builder()
        .base_url(format!("{}/api", server.uri()))
        .credentials(USERNAME, PASSWORD)
        .max_retries(3)
        .retry_wait(Duration::ZERO)
}

/// Convert a `json!` object literal into [`ObjectData`].
#[allow(dead_code)]
pub fn object(value: serde_json::Value) -> ObjectData {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Number of requests the mock server received for `method` and `path`.
#[allow(dead_code)]
pub async fn request_count(server: &MockServer, method: &str, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .count()
}
