//! Shared test utilities for op5-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic: no `.env`, no
//!   config file and no host `OP5_*` variables leak in.

use assert_cmd::Command;

#[allow(dead_code)]
pub const USERNAME: &str = "monitor";
#[allow(dead_code)]
pub const PASSWORD: &str = "s3cret";

/// Returns a hermetic `op5-cli` command with dummy credentials.
pub fn op5_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("op5-cli");

    // Hermeticity: prevent loading local .env and the user's config file
    cmd.env("DOTENV_DISABLED", "1");
    // A missing file at the default location is skipped, an explicit one is not
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/op5-cli-test");
    cmd.env("HOME", "/nonexistent/op5-cli-test");

    for var in [
        "OP5_BASE_URL",
        "OP5_CONFIG_PATH",
        "OP5_SKIP_VERIFY",
        "OP5_TIMEOUT",
        "OP5_QUERY_TIMEOUT",
        "OP5_MAX_RETRIES",
        "OP5_RETRY_WAIT",
        "OP5_DRY_RUN",
        "OP5_DEBUG",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }

    cmd.env("OP5_USERNAME", USERNAME);
    cmd.env("OP5_PASSWORD", PASSWORD);
    cmd
}

/// Returns a hermetic command pointed at `{server_uri}/api`, retrying without waiting.
#[allow(dead_code)]
pub fn op5_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = op5_cmd();
    cmd.env("OP5_BASE_URL", format!("{server_uri}/api"));
    cmd.env("OP5_RETRY_WAIT", "0");
    cmd
}
