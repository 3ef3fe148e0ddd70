//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// jspm-config - Manage jspm settings stored in package.json
#[derive(Parser, Debug)]
#[command(name = "jspm-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Manifest to operate on
    #[arg(long, global = true, default_value = "package.json")]
    pub manifest: PathBuf,

    /// Settings file (TOML, JSON or YAML)
    #[arg(long, global = true, env = "JSPM_CONFIG_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Set up directories interactively
    ///
    /// Examples:
    ///   jspm-config init              # baseURL and lib folder
    ///   jspm-config init --custom     # also packages folder and config file
    ///   jspm-config init --yes        # accept every default
    Init {
        /// Also ask for the packages folder and config file
        #[arg(long)]
        custom: bool,

        /// Accept defaults without prompting
        #[arg(short, long)]
        yes: bool,
    },

    /// Rewrite the manifest in its own convention
    Normalize {
        /// Print the result instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Add or update a dependency
    ///
    /// Examples:
    ///   jspm-config install lodash ^4.0.0
    ///   jspm-config install jquery github:components/jquery@2.1
    ///   jspm-config install mocha npm:mocha@^2.0.0 --dev
    Install {
        /// Dependency name
        name: String,

        /// Version, package@version or registry:package@version
        target: String,

        /// Add to devDependencies
        #[arg(long, conflicts_with = "peer")]
        dev: bool,

        /// Add to peerDependencies
        #[arg(long)]
        peer: bool,
    },

    /// Remove a dependency from every group
    Uninstall {
        /// Dependency name
        name: String,
    },
}
