//! Command implementations.
//!
//! Each handler performs one client or session call and prints the decoded
//! payload as pretty JSON on stdout.

pub mod changes;
pub mod objects;
pub mod queries;

use anyhow::{Context, Result, bail};
use op5_client::ObjectData;
use serde_json::Value;

/// Parse a `--data` argument: inline JSON object, or `@path` to a file holding one.
pub fn parse_data(arg: &str) -> Result<ObjectData> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file '{path}'"))?,
        None => arg.to_string(),
    };
    match serde_json::from_str::<Value>(&text).context("Data is not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("Data must be a JSON object, got: {other}"),
    }
}

pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
