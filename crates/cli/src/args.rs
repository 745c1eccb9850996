//! CLI argument definitions and parsing.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see `config_context` module).

use clap::{Parser, Subcommand};
use op5_client::ObjectType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "op5-cli")]
#[command(about = "OP5 CLI - Manage OP5 Monitor configuration from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  op5-cli read host web01\n  op5-cli create host --data '{\"host_name\":\"web01\",\"address\":\"10.0.0.1\"}'\n  op5-cli update service 'web01;PING' --data '{\"max_check_attempts\":5}'\n  op5-cli sync hostgroup web-servers --data @hostgroup.json\n  op5-cli filter query '[hosts] state != 0'\n  op5-cli commit --force\n"
)]
pub struct Cli {
    /// API root of the OP5 server (e.g., https://op5.example.com/api)
    #[arg(short, long, global = true, env = "OP5_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(short, long, global = true, env = "OP5_USERNAME")]
    pub username: Option<String>,

    #[arg(short, long, global = true, env = "OP5_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Timeout in seconds for object requests
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Timeout in seconds for commands, filters and reports
    #[arg(long, global = true)]
    pub query_timeout: Option<u64>,

    /// Maximum attempts when the server reports a transient condition
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Seconds to wait between attempts
    #[arg(long, global = true)]
    pub retry_wait: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Report changes instead of sending them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable debug mode (hostgroup service detection, verbose logs)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via OP5_CONFIG_PATH environment variable.
    #[arg(long, global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an object
    Create {
        /// Object type (e.g., host, service, hostgroup)
        object_type: ObjectType,

        /// JSON object with the fields, or @FILE to read it from a file
        #[arg(short, long)]
        data: String,
    },

    /// Read one object, or list every object of a type
    Read {
        object_type: ObjectType,

        /// Object name; services use 'host;description'
        name: Option<String>,
    },

    /// Change some fields of an object
    Update {
        object_type: ObjectType,
        name: String,
        #[arg(short, long)]
        data: String,
    },

    /// Replace an object
    Overwrite {
        object_type: ObjectType,
        name: String,
        #[arg(short, long)]
        data: String,
    },

    /// Delete an object
    Delete { object_type: ObjectType, name: String },

    /// Create the object, or update it only if a field differs
    Sync {
        object_type: ObjectType,
        name: String,
        #[arg(short, long)]
        data: String,
    },

    /// List the members of a host, contact, service or user group
    Members { group_type: ObjectType, name: String },

    /// Submit a command (e.g., ACKNOWLEDGE_HOST_PROBLEM)
    Command {
        command_type: String,
        #[arg(short, long)]
        data: String,
    },

    /// Run a filter query
    Filter {
        /// Filter endpoint (e.g., query, count)
        filter_type: String,

        /// Query text (e.g., '[hosts] state != 0')
        query: String,
    },

    /// Query the event report
    Report {
        /// Report parameters as KEY=VALUE
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// List the changes staged on the server
    Changes,

    /// Commit the changes staged on the server
    Commit {
        /// Commit without asking for confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Discard the changes staged on the server
    Undo,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid KEY=VALUE: no '=' found in '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("host_name=web01").unwrap(),
            ("host_name".to_string(), "web01".to_string())
        );
        assert_eq!(
            parse_key_val("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
    }

    #[test]
    fn test_object_type_is_parsed() {
        let cli = Cli::try_parse_from(["op5-cli", "read", "host_template", "generic"]).unwrap();
        match cli.command {
            Commands::Read { object_type, name } => {
                assert_eq!(object_type, ObjectType::HostTemplate);
                assert_eq!(name.as_deref(), Some("generic"));
            }
            _ => panic!("expected read"),
        }

        assert!(Cli::try_parse_from(["op5-cli", "read", "gizmo"]).is_err());
    }
}
