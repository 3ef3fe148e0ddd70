//! Error types for jspm-manifest

use crate::prompt::PromptError;

/// Result type for jspm-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, editing or writing a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] jspm_document::Error),

    #[error(transparent)]
    Fs(#[from] jspm_fs::Error),

    #[error("Invalid dependency '{name}' -> '{target}': {reason}")]
    InvalidDependency {
        name: String,
        target: String,
        reason: String,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

impl Error {
    pub fn invalid_dependency(
        name: impl Into<String>,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDependency {
            name: name.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }
}
