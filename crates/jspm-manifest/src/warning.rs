//! Recoverable configuration problems found while reading a manifest

use std::fmt;

/// A problem that was recovered from rather than reported as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestWarning {
    /// `directories.baseURL` is not a relative path; the project directory is
    /// used instead.
    InvalidBaseUrl { value: String },
    /// The packages directory lies outside `baseURL`; kept as given.
    PackagesOutsideBaseUrl { packages: String, base_url: String },
}

impl ManifestWarning {
    /// Record the warning on the log.
    pub(crate) fn emit(self) -> Self {
        tracing::warn!("{self}");
        self
    }
}

impl fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl { value } => write!(
                f,
                "Server baseURL '{value}' should be a relative file path; reverting to the project folder"
            ),
            Self::PackagesOutsideBaseUrl { packages, base_url } => write!(
                f,
                "Packages folder '{packages}' must be within baseURL '{base_url}' for paths to resolve correctly"
            ),
        }
    }
}

/// Whether `value` may be used as `directories.baseURL`.
///
/// Rejects rooted paths, URLs, drive letters and UNC prefixes.
pub fn is_valid_base_url(value: &str) -> bool {
    !(value.starts_with('/')
        || value.contains("//")
        || value.contains("\\\\")
        || value.contains(':'))
}
