//! Integration tests for structured exit codes.

mod common;

use common::{op5_cmd, op5_cmd_with_server};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn respond(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config/host/web01"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({"error": "x"})))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = respond(401).await;
    op5_cmd_with_server(&server.uri())
        .args(["read", "host", "web01"])
        .assert()
        .code(2);
}

#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = respond(404).await;
    op5_cmd_with_server(&server.uri())
        .args(["read", "host", "web01"])
        .assert()
        .code(4);
}

#[tokio::test]
async fn test_retries_exhausted_returns_exit_code_8() {
    let server = respond(509).await;
    op5_cmd_with_server(&server.uri())
        .args(["--max-retries", "2", "read", "host", "web01"])
        .assert()
        .code(8);
}

#[test]
fn test_validation_failure_returns_exit_code_5() {
    // Rejected locally, so the unreachable server is never contacted.
    op5_cmd()
        .env("OP5_BASE_URL", "http://127.0.0.1:9/api")
        .args(["update", "host", "web01", "--data", "{}"])
        .assert()
        .code(5);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    op5_cmd()
        .env("OP5_BASE_URL", "http://127.0.0.1:9/api")
        .args(["read", "host", "web01"])
        .assert()
        .code(3);
}

#[test]
fn test_missing_base_url_returns_config_error() {
    op5_cmd().args(["read", "host", "web01"]).assert().code(7);
}

#[tokio::test]
async fn test_nothing_to_commit_exits_cleanly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config/change"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    op5_cmd_with_server(&server.uri())
        .arg("commit")
        .assert()
        .code(0);
}

#[test]
fn test_malformed_data_is_general_error() {
    op5_cmd()
        .env("OP5_BASE_URL", "http://127.0.0.1:9/api")
        .args(["create", "host", "--data", "{not json"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Data is not valid JSON"));
}
