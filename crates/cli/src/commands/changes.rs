//! Staged-change commands.

use anyhow::Result;
use op5_client::Session;

use super::print_json;

pub async fn list(session: &mut Session<'_>) -> Result<()> {
    let response = session.get_changes().await?;
    print_json(&response.payload)
}

pub async fn commit(session: &mut Session<'_>, force: bool) -> Result<()> {
    let response = session.commit_changes(force).await?;
    print_json(&response.payload)
}

pub async fn undo(session: &mut Session<'_>) -> Result<()> {
    let response = session.undo_changes().await?;
    print_json(&response.payload)
}
