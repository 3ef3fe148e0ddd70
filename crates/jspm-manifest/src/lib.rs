//! jspm configuration inside a shared `package.json`
//!
//! Settings may sit at the top level of the manifest or under the `jspm` key.
//! [`ManifestConfig`] decides which convention a manifest uses when it is
//! loaded, reads every setting through that decision, and writes changes back
//! the same way, leaving out values that equal their defaults.
//!
//! # Example
//!
//! ```no_run
//! use jspm_manifest::{ManifestConfig, Settings, dependency::parse_target};
//!
//! let mut config = ManifestConfig::load("package.json", &Settings::with_registry("npm"))?;
//! println!("baseURL: {}", config.base_url);
//!
//! let lodash = parse_target("lodash", "^4.0.0", config.registry())?;
//! config.dependencies.insert("lodash".to_string(), Some(lodash));
//! config.write()?;
//! # Ok::<(), jspm_manifest::Error>(())
//! ```

pub mod config;
pub mod constants;
pub mod dependency;
pub mod error;
pub mod layout;
pub mod prompt;
pub mod settings;
pub mod warning;

pub use config::ManifestConfig;
pub use dependency::{DependencyDescriptor, DependencyMap, parse_target, process_deps};
pub use error::{Error, Result};
pub use layout::{DependencyBase, Layout};
pub use prompt::{PromptError, PromptMode, Prompter};
pub use settings::Settings;
pub use warning::ManifestWarning;
