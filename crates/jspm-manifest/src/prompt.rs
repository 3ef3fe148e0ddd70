//! Interactive completion of directory settings
//!
//! [`ManifestConfig::prompt`] asks for each directory in turn, offering the
//! current value as the default. Later defaults follow earlier answers, so the
//! packages folder suggested in custom mode sits inside the `baseURL` just
//! chosen.

use crate::Result;
use crate::config::ManifestConfig;
use crate::constants::{
    CONFIG_FILE_KEY, DEFAULT_CONFIG_FILE, DEFAULT_LIB_DIR, DEFAULT_PACKAGES_DIR,
};
use crate::warning::{ManifestWarning, is_valid_base_url};

const BASE_URL_INFO: &str = "Enter the baseURL public folder path.\n\n\
    This is the low-level public folder which is served to the browser containing all jspm modules.";
const LIB_INFO: &str = "Enter the path to the folder containing your local project code.\n\n\
    This folder is then used as the SystemJS package for all project-specific loader configuration.";
const PACKAGES_INFO: &str = "Enter the jspm packages folder.\n\n\
    Only necessary if you would like to customize this folder name or location (must be within directories.baseURL).";
const CONFIG_FILE_INFO: &str = "Enter a custom config file path.\n\n\
    Only necessary if you would like to customize the config file name or location.";

/// Failure reported by a [`Prompter`].
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Prompt cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Failed(String),
}

/// Source of answers for interactive completion.
pub trait Prompter {
    /// Ask for `label`, offering `default`. `info` explains the setting.
    fn input(
        &mut self,
        label: &str,
        default: &str,
        info: &str,
    ) -> std::result::Result<String, PromptError>;
}

/// Which settings [`ManifestConfig::prompt`] asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptMode {
    /// `baseURL` and `lib` only.
    #[default]
    Default,
    /// Also the packages folder and the loader config file.
    Custom,
}

impl ManifestConfig {
    /// Fill in directory settings from `prompter`.
    ///
    /// Only the in-memory configuration changes; call
    /// [`write`](Self::write) to persist the answers.
    pub fn prompt(&mut self, mode: PromptMode, prompter: &mut dyn Prompter) -> Result<()> {
        let manifest = self
            .file_name()
            .file_name()
            .unwrap_or("package.json")
            .to_string();
        let root = self.document_root().clone();

        let old_packages = self.base_url.join(DEFAULT_PACKAGES_DIR).clean();
        let old_config_file = self.base_url.join(DEFAULT_CONFIG_FILE).clean();

        let current = self.relative(&self.base_url);
        let default = if current.is_empty() { "./".to_string() } else { current };
        let label = format!("{manifest} directories.baseURL");
        let answer = ask(prompter, &label, &default, BASE_URL_INFO)?;
        self.base_url = if is_valid_base_url(&answer) {
            root.resolve(&answer)
        } else {
            self.push_warning(ManifestWarning::InvalidBaseUrl { value: answer });
            root.clone()
        };
        tracing::debug!(base_url = %self.base_url, "Chose baseURL");

        let base = self.relative(&self.base_url);
        let base_prefix = if base.is_empty() { String::new() } else { format!("{base}/") };

        let default = match &self.lib {
            Some(lib) => self.relative(lib),
            None => format!("{base_prefix}{DEFAULT_LIB_DIR}"),
        };
        let answer = ask(prompter, &format!("{manifest} directories.lib"), &default, LIB_INFO)?;
        self.lib = Some(root.resolve(&answer));

        if self.packages == old_packages {
            self.packages = self.base_url.join(DEFAULT_PACKAGES_DIR).clean();
        }
        if self.config_file() == Some(&old_config_file) {
            self.config_files.insert(
                CONFIG_FILE_KEY.to_string(),
                self.base_url.join(DEFAULT_CONFIG_FILE).clean(),
            );
        }

        if mode == PromptMode::Custom {
            let default = self.relative(&self.packages);
            let label = format!("{manifest} directories.packages");
            let answer = ask(prompter, &label, &default, PACKAGES_INFO)?;
            self.packages = root.resolve(&answer);
            if !self.packages.is_within(&self.base_url) {
                self.push_warning(ManifestWarning::PackagesOutsideBaseUrl {
                    packages: self.relative(&self.packages),
                    base_url: base.clone(),
                });
            }

            let default = match self.config_file() {
                Some(config_file) => self.relative(config_file),
                None => format!("{base_prefix}{DEFAULT_CONFIG_FILE}"),
            };
            let label = format!("{manifest} configFiles.jspm");
            let answer = ask(prompter, &label, &default, CONFIG_FILE_INFO)?;
            self.config_files
                .insert(CONFIG_FILE_KEY.to_string(), root.resolve(&answer));
        }

        Ok(())
    }
}

/// Ask once; a blank answer takes the default.
fn ask(prompter: &mut dyn Prompter, label: &str, default: &str, info: &str) -> Result<String> {
    let answer = prompter.input(label, default, info)?;
    let answer = answer.trim();
    Ok(if answer.is_empty() { default } else { answer }.to_string())
}
