//! Normalize command implementation

use std::path::Path;

use colored::Colorize;
use jspm_manifest::{ManifestConfig, Settings};

use crate::commands::{manifest_name, report_write};
use crate::error::Result;

/// Run the normalize command
///
/// Loads the manifest and writes it back unchanged in meaning, so defaults
/// and dependency forms follow the manifest's own convention.
pub fn run_normalize(manifest: &Path, settings: &Settings, dry_run: bool) -> Result<()> {
    let mut config = ManifestConfig::load(manifest, settings)?;

    if dry_run {
        let rendered = config.render()?;
        println!("{}", rendered.trim_end());

        let name = manifest_name(&config);
        if config.is_modified()? {
            eprintln!("{} would be updated", name.cyan());
        } else {
            eprintln!("{} already up to date", name.cyan());
        }
        return Ok(());
    }

    let changed = config.write()?;
    report_write(&config, changed);
    Ok(())
}
