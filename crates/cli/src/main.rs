//! OP5 CLI - Command-line interface for the OP5 Monitor configuration API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute configuration API calls via the shared client library.
//! - Print decoded payloads as JSON on stdout; logs go to stderr.
//!
//! Does NOT handle:
//! - Request validation, retries or change tracking (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - stdout carries only command output so it can be piped.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod interactive;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use op5_client::Op5Client;
use op5_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    let default_level = if cli.verbose || cli.debug {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match config_context::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::ConfigError.as_i32());
        }
    };

    let client = match Op5Client::builder().from_config(&config).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    let exit_code = match run_command(cli.command, &client).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
