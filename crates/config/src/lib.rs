//! Configuration management for the OP5 Monitor client.
//!
//! This crate provides types and loaders for the connection, retry and
//! authentication settings shared by the client library and the CLI.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, FileConfig, default_config_path, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
