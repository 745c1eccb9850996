//! User interaction utilities for the CLI.

use dialoguer::Confirm;
use op5_client::ConfirmPrompt;

/// Terminal yes/no prompt. Defaults to "no"; an unusable terminal counts as "no".
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn ask(&self, question: &str) -> bool {
        match Confirm::new().with_prompt(question).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Confirmation prompt unavailable, treating as declined");
                false
            }
        }
    }
}
