//! Tool settings that are not stored in the manifest
//!
//! Settings live in their own TOML, JSON or YAML file, for example:
//!
//! ```toml
//! default_registry = "npm"
//! ```

use jspm_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::constants::FALLBACK_REGISTRY;

fn default_registry() -> String {
    FALLBACK_REGISTRY.to_string()
}

/// Settings applied while reading a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Registry assumed for dependencies when the manifest names none
    #[serde(default = "default_registry")]
    pub default_registry: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_registry: default_registry(),
        }
    }
}

impl Settings {
    /// Load settings, detecting the format from the file extension.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let settings: Self = ConfigStore::new().load(path)?;
        tracing::debug!(path = %path, registry = %settings.default_registry, "Loaded settings");
        Ok(settings)
    }

    pub fn with_registry(registry: impl Into<String>) -> Self {
        Self {
            default_registry: registry.into(),
        }
    }
}
