//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Set up the session and its commit prompt.
//!
//! Invariants:
//! - Commands are routed based on the top-level Commands enum variant
//! - Unforced commits ask on the terminal before applying anything

use anyhow::Result;
use op5_client::{Op5Client, Session};

use crate::args::Commands;
use crate::commands;
use crate::interactive::TerminalPrompt;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(command: Commands, client: &Op5Client) -> Result<()> {
    let mut session = Session::new(client).with_prompt(TerminalPrompt);

    match command {
        Commands::Create { object_type, data } => {
            commands::objects::create(&mut session, object_type, &data).await
        }
        Commands::Read { object_type, name } => {
            commands::objects::read(&mut session, object_type, name.as_deref()).await
        }
        Commands::Update {
            object_type,
            name,
            data,
        } => commands::objects::update(&mut session, object_type, &name, &data).await,
        Commands::Overwrite {
            object_type,
            name,
            data,
        } => commands::objects::overwrite(&mut session, object_type, &name, &data).await,
        Commands::Delete { object_type, name } => {
            commands::objects::delete(&mut session, object_type, &name).await
        }
        Commands::Sync {
            object_type,
            name,
            data,
        } => commands::objects::sync(&mut session, object_type, &name, &data).await,
        Commands::Members { group_type, name } => {
            commands::objects::members(&mut session, group_type, &name).await
        }
        Commands::Command { command_type, data } => {
            commands::queries::command(client, &command_type, &data).await
        }
        Commands::Filter { filter_type, query } => {
            commands::queries::filter(client, &filter_type, &query).await
        }
        Commands::Report { params } => commands::queries::report(client, &params).await,
        Commands::Changes => commands::changes::list(&mut session).await,
        Commands::Commit { force } => commands::changes::commit(&mut session, force).await,
        Commands::Undo => commands::changes::undo(&mut session).await,
    }
}
