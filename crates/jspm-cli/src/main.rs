//! jspm-config CLI
//!
//! Inspect and edit the jspm settings kept in a project's package.json.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use jspm_fs::NormalizedPath;
use jspm_manifest::Settings;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::dependency::Group;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let settings = match &cli.settings {
        Some(path) => Settings::load(&NormalizedPath::new(path))?,
        None => Settings::default(),
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, &cli.manifest, &settings),
        None => {
            println!(
                "{} Manage jspm settings in package.json",
                "jspm-config".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "jspm-config --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, manifest: &std::path::Path, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::Show { json } => commands::run_show(manifest, settings, json),
        Commands::Init { custom, yes } => commands::run_init(manifest, settings, custom, yes),
        Commands::Normalize { dry_run } => commands::run_normalize(manifest, settings, dry_run),
        Commands::Install {
            name,
            target,
            dev,
            peer,
        } => commands::run_install(
            manifest,
            settings,
            &name,
            &target,
            Group::from_flags(dev, peer),
        ),
        Commands::Uninstall { name } => commands::run_uninstall(manifest, settings, &name),
    }
}
