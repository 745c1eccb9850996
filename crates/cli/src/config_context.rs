//! Configuration assembly for CLI invocations.
//!
//! Precedence, lowest to highest: config file, environment, command-line flags.

use anyhow::{Context, Result};
use op5_config::{Config, ConfigLoader};
use std::time::Duration;

use crate::args::Cli;

/// Build the effective configuration for this invocation.
pub(crate) fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank/whitespace-only values are ignored to allow fallback to env var
    if let Some(ref path) = cli.config_path {
        if !path.to_string_lossy().trim().is_empty() {
            loader = loader.with_config_path(path.clone());
        }
    }

    loader = loader.from_file().context("Failed to load configuration file")?;
    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = cli.query_timeout {
        loader = loader.with_query_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if let Some(secs) = cli.retry_wait {
        loader = loader.with_retry_wait(Duration::from_secs(secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if cli.dry_run {
        loader = loader.with_dry_run(true);
    }
    if cli.debug {
        loader = loader.with_debug(true);
    }

    Ok(loader.build()?)
}
