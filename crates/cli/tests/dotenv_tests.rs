//! Integration tests for `.env` handling at CLI startup.
//!
//! Invariants:
//! - Each test runs in its own temp directory so only its `.env` is visible.
//! - `DOTENV_DISABLED` is removed explicitly to turn dotenv loading back on.

mod common;

use common::op5_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_invalid_dotenv_fails_without_leaking_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let secret = "hunter2-from-dotenv";
    fs::write(
        temp_dir.path().join(".env"),
        format!("OP5_PASSWORD={secret}\nINVALID_LINE"),
    )
    .unwrap();

    let output = op5_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("OP5_PASSWORD")
        .args(["read", "host", "web01"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".env"), "stderr: {stderr}");
    assert!(!stderr.contains(secret), "stderr: {stderr}");
}

#[test]
fn test_disabled_dotenv_skips_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE").unwrap();

    // Fails later on the missing base URL, not on the .env file.
    op5_cmd()
        .current_dir(temp_dir.path())
        .args(["read", "host", "web01"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Base URL is required"));
}
