//! Command implementations for jspm-config

pub mod dependency;
pub mod init;
pub mod normalize;
pub mod show;

pub use dependency::{run_install, run_uninstall};
pub use init::run_init;
pub use normalize::run_normalize;
pub use show::run_show;

use jspm_manifest::ManifestConfig;

/// Manifest file name for messages.
pub(crate) fn manifest_name(config: &ManifestConfig) -> String {
    config
        .file_name()
        .file_name()
        .unwrap_or("package.json")
        .to_string()
}

/// Report the outcome of a write.
pub(crate) fn report_write(config: &ManifestConfig, changed: bool) {
    use colored::Colorize;

    let name = manifest_name(config);
    if changed {
        println!("{} Updated {}", "OK".green().bold(), name.cyan());
    } else {
        println!("{} {} already up to date", "OK".green().bold(), name.cyan());
    }
}
