//! Install and uninstall command implementations

use std::path::Path;

use colored::Colorize;
use jspm_manifest::{ManifestConfig, Settings, parse_target};

use crate::commands::report_write;
use crate::error::{CliError, Result};

/// Dependency group selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Dependencies,
    DevDependencies,
    PeerDependencies,
}

impl Group {
    pub fn from_flags(dev: bool, peer: bool) -> Self {
        match (dev, peer) {
            (true, _) => Self::DevDependencies,
            (_, true) => Self::PeerDependencies,
            _ => Self::Dependencies,
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
            Self::PeerDependencies => "peerDependencies",
        }
    }
}

/// Run the install command
pub fn run_install(
    manifest: &Path,
    settings: &Settings,
    name: &str,
    target: &str,
    group: Group,
) -> Result<()> {
    let mut config = ManifestConfig::load(manifest, settings)?;
    let dep = parse_target(name, target, config.registry())?;

    println!(
        "{} {} {} ({})",
        "+".green().bold(),
        name.cyan(),
        dep.exact_name(),
        group.key().dimmed()
    );

    let deps = match group {
        Group::Dependencies => &mut config.dependencies,
        Group::DevDependencies => &mut config.dev_dependencies,
        Group::PeerDependencies => &mut config.peer_dependencies,
    };
    deps.insert(name.to_string(), Some(dep));

    let changed = config.write()?;
    report_write(&config, changed);
    Ok(())
}

/// Run the uninstall command
///
/// Removes `name` from every group that lists it.
pub fn run_uninstall(manifest: &Path, settings: &Settings, name: &str) -> Result<()> {
    let mut config = ManifestConfig::load(manifest, settings)?;

    let mut removed = false;
    for deps in [
        &mut config.dependencies,
        &mut config.dev_dependencies,
        &mut config.peer_dependencies,
    ] {
        if let Some(entry) = deps.get_mut(name).filter(|entry| entry.is_some()) {
            *entry = None;
            removed = true;
        }
    }

    if !removed {
        return Err(CliError::user(format!(
            "Dependency '{}' is not installed",
            name
        )));
    }

    println!("{} {}", "-".red().bold(), name.cyan());
    let changed = config.write()?;
    report_write(&config, changed);
    Ok(())
}
