//! Normalized path handling for cross-platform compatibility
//!
//! Manifest paths are stored with forward slashes regardless of host
//! convention. Resolution is purely lexical: `.` and `..` segments are folded
//! without touching the filesystem, so paths to directories that do not exist
//! yet (a fresh `jspm_packages`, say) resolve the same way as existing ones.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes internally and converting to
/// platform-native format only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Make a path absolute against the current working directory, then clean it.
    pub fn absolute(path: impl AsRef<Path>) -> Result<Self> {
        let candidate = Self::new(path.as_ref());
        if candidate.is_absolute() {
            return Ok(candidate.clean());
        }

        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        let cwd = Self::new(dunce::simplified(&cwd));
        Ok(cwd.join(candidate.as_str()).clean())
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether the path is rooted (`/x` or a drive-qualified `C:/x`).
    pub fn is_absolute(&self) -> bool {
        !split_root(&self.inner).0.is_empty()
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Fold `.` and `..` segments and collapse repeated separators.
    ///
    /// `..` never climbs above a root; on relative paths leading `..`
    /// segments are kept. An empty relative result becomes `.`.
    pub fn clean(&self) -> Self {
        let (root, rest) = split_root(&self.inner);
        let mut parts: Vec<&str> = Vec::new();

        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if parts.last().is_some_and(|last| *last != "..") {
                        parts.pop();
                    } else if root.is_empty() {
                        parts.push("..");
                    }
                }
                other => parts.push(other),
            }
        }

        let joined = parts.join("/");
        let inner = match (root.is_empty(), joined.is_empty()) {
            (true, true) => ".".to_string(),
            (false, true) => root.to_string(),
            _ => format!("{root}{joined}"),
        };
        Self { inner }
    }

    /// Resolve `relative` against this path, like a shell `cd`.
    ///
    /// An absolute `relative` replaces the base entirely. The result is
    /// always cleaned.
    pub fn resolve(&self, relative: &str) -> Self {
        let relative = Self::new(relative);
        if relative.is_absolute() {
            relative.clean()
        } else {
            self.join(relative.as_str()).clean()
        }
    }

    /// Express this path relative to `base`, using forward slashes.
    ///
    /// Returns an empty string when both paths are the same, and this path
    /// unchanged when the two do not share a root.
    pub fn relative_to(&self, base: &NormalizedPath) -> String {
        let target = self.clean();
        let base = base.clean();
        let (target_root, target_parts) = components(&target.inner);
        let (base_root, base_parts) = components(&base.inner);

        if target_root != base_root {
            return target.inner.clone();
        }

        let common = target_parts
            .iter()
            .zip(&base_parts)
            .take_while(|(a, b)| a == b)
            .count();

        let mut parts: Vec<&str> = vec![".."; base_parts.len() - common];
        parts.extend(target_parts[common..].iter().copied());
        parts.join("/")
    }

    /// Whether this path equals `base` or lies beneath it.
    pub fn is_within(&self, base: &NormalizedPath) -> bool {
        let relative = self.relative_to(base);
        relative != ".."
            && !relative.starts_with("../")
            && !Self::new(&relative).is_absolute()
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

/// Split a slash-normalized path into its root (`""`, `/`, `C:/` or `C:`)
/// and the remainder.
fn split_root(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        if bytes.get(2) == Some(&b'/') {
            return path.split_at(3);
        }
        return path.split_at(2);
    }
    if path.starts_with('/') {
        return path.split_at(1);
    }
    ("", path)
}

fn components(path: &str) -> (&str, Vec<&str>) {
    let (root, rest) = split_root(path);
    let parts = rest
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    (root, parts)
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
