//! Command submission, filter and report commands.

use anyhow::Result;
use op5_client::Op5Client;

use super::{parse_data, print_json};

pub async fn command(client: &Op5Client, command_type: &str, data: &str) -> Result<()> {
    let response = client.command(command_type, &parse_data(data)?).await?;
    print_json(&response.payload)
}

pub async fn filter(client: &Op5Client, filter_type: &str, query: &str) -> Result<()> {
    let response = client.filter(filter_type, query).await?;
    print_json(&response.payload)
}

pub async fn report(client: &Op5Client, params: &[(String, String)]) -> Result<()> {
    let response = client.report(params).await?;
    print_json(&response.payload)
}
