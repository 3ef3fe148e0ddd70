//! Error types for jspm-document

use std::path::PathBuf;

/// Result type for jspm-document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jspm-document operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] jspm_fs::Error),

    #[error("Failed to parse JSON document at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Document root at {path} must be a JSON object")]
    RootNotObject { path: PathBuf },

    #[error("Expected a single value at `{path}`, found {found}")]
    NotAScalar { path: String, found: &'static str },

    #[error("Expected an object at `{path}`, found {found}")]
    NotAnObject { path: String, found: &'static str },

    #[error("Unexpected nested object at `{path}`")]
    NestedValue { path: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
