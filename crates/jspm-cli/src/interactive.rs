//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based input.

use colored::Colorize;
use dialoguer::{Confirm, Input};
use jspm_manifest::{PromptError, Prompter};

use crate::error::Result;

/// Asks each question on the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(
        &mut self,
        label: &str,
        default: &str,
        info: &str,
    ) -> std::result::Result<String, PromptError> {
        println!();
        for line in info.lines() {
            println!("  {}", line.dimmed());
        }

        Input::<String>::new()
            .with_prompt(label)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| PromptError::Failed(e.to_string()))
    }
}

/// Takes the offered default for every question.
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn input(
        &mut self,
        label: &str,
        default: &str,
        _info: &str,
    ) -> std::result::Result<String, PromptError> {
        tracing::debug!(label, default, "Accepting default");
        Ok(default.to_string())
    }
}

/// Ask before writing the manifest.
pub fn confirm_write(file: &str) -> Result<bool> {
    println!();
    let proceed = Confirm::new()
        .with_prompt(format!("Write {}?", file.cyan()))
        .default(true)
        .interact()?;
    Ok(proceed)
}
