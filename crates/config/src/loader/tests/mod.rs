//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;
pub mod file_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables cleared by every test so the host environment cannot leak in.
pub const OP5_VARS: [&str; 11] = [
    "OP5_BASE_URL",
    "OP5_USERNAME",
    "OP5_PASSWORD",
    "OP5_SKIP_VERIFY",
    "OP5_TIMEOUT",
    "OP5_QUERY_TIMEOUT",
    "OP5_MAX_RETRIES",
    "OP5_RETRY_WAIT",
    "OP5_DRY_RUN",
    "OP5_DEBUG",
    "OP5_CONFIG_PATH",
];

/// Run `f` with every `OP5_*` variable unset except the given overrides.
pub fn with_op5_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let vars: Vec<(&str, Option<&str>)> = OP5_VARS
        .iter()
        .map(|key| {
            let value = overrides.iter().find(|(k, _)| k == key).map(|(_, v)| *v);
            (*key, value)
        })
        .collect();
    temp_env::with_vars(vars, f);
}
