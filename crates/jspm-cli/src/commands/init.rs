//! Init command implementation

use std::path::Path;

use colored::Colorize;
use jspm_manifest::{ManifestConfig, PromptMode, Prompter, Settings};

use crate::commands::{manifest_name, report_write};
use crate::error::{CliError, Result};
use crate::interactive::{DefaultsPrompter, TerminalPrompter, confirm_write};

/// Run the init command
///
/// Prompts for directory settings, then writes them to the manifest. With
/// `yes` every default is accepted and nothing is asked.
pub fn run_init(manifest: &Path, settings: &Settings, custom: bool, yes: bool) -> Result<()> {
    let mut config = ManifestConfig::load(manifest, settings)?;
    let name = manifest_name(&config);

    println!(
        "{} Configuring jspm in {}...",
        "=>".blue().bold(),
        name.cyan()
    );

    let mode = if custom {
        PromptMode::Custom
    } else {
        PromptMode::Default
    };
    let mut prompter: Box<dyn Prompter> = if yes {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(TerminalPrompter)
    };
    config.prompt(mode, prompter.as_mut())?;

    for warning in config.warnings() {
        println!("{} {}", "!".yellow(), warning);
    }

    if !yes && !confirm_write(&name)? {
        return Err(CliError::user("Init cancelled by user."));
    }

    let changed = config.write()?;
    report_write(&config, changed);
    Ok(())
}
