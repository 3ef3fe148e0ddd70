//! Where settings live in a shared manifest.
//!
//! A `package.json` may keep jspm settings at the top level or nested under
//! the `jspm` key. [`Layout::detect`] makes that decision once per document;
//! [`resolve_read`] and [`resolve_write`] turn a logical field path into the
//! concrete document path for every later access.

use jspm_document::{DocumentStore, is_truthy};
use serde_json::Value;

use crate::constants::{DEPENDENCY_GROUPS, NAMESPACE_KEY};

/// Where the three dependency groups are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyBase {
    TopLevel,
    Namespace,
}

impl DependencyBase {
    /// Document path of `group` under this base.
    pub fn path<'a>(self, group: &'a str) -> Vec<&'a str> {
        match self {
            Self::TopLevel => vec![group],
            Self::Namespace => vec![NAMESPACE_KEY, group],
        }
    }
}

/// Load-time namespace decisions, reused by every read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Fields are stored under the namespace key.
    pub uses_namespace: bool,
    /// The document opted into jspm configuration at all.
    pub namespace_aware: bool,
    pub dependency_base: DependencyBase,
}

impl Layout {
    pub fn detect(document: &DocumentStore) -> Self {
        let has_namespace = document.has(&[NAMESPACE_KEY]);
        let namespace_aware = has_namespace || document.has(&["registry"]);

        // `"jspm": true` opts in with defaults; fields then stay top level.
        // Only a literal `true` counts, so `"jspm": false` still nests.
        let opt_in_flag = matches!(document.get(&[NAMESPACE_KEY]), Some(Value::Bool(true)));
        let uses_namespace = has_namespace && !opt_in_flag;

        let groups_under_namespace = DEPENDENCY_GROUPS
            .iter()
            .any(|group| document.has(&[NAMESPACE_KEY, *group]));

        let dependency_base = if groups_under_namespace {
            DependencyBase::Namespace
        } else {
            DependencyBase::TopLevel
        };

        let layout = Self {
            uses_namespace,
            namespace_aware,
            dependency_base,
        };
        tracing::debug!(?layout, file = %document.file_name(), "Resolved manifest layout");
        layout
    }
}

/// Concrete path for a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteTarget<'a> {
    /// The field is already in the document here.
    Existing(Vec<&'a str>),
    /// The field is absent; this is where it would be created.
    New(Vec<&'a str>),
}

/// `path` prefixed with the namespace key.
pub fn namespaced<'a>(path: &[&'a str]) -> Vec<&'a str> {
    std::iter::once(NAMESPACE_KEY)
        .chain(path.iter().copied())
        .collect()
}

/// Where to read `path` from: the top level first, then the namespace when
/// the layout nests fields. Falsy values fall through.
pub fn resolve_read<'a>(
    document: &DocumentStore,
    layout: &Layout,
    path: &[&'a str],
) -> Option<Vec<&'a str>> {
    if document.get(path).is_some_and(is_truthy) {
        return Some(path.to_vec());
    }

    if layout.uses_namespace {
        let prefixed = namespaced(path);
        if document.get(&prefixed).is_some_and(is_truthy) {
            return Some(prefixed);
        }
    }

    None
}

/// Where to write `path`: wherever it already lives (namespace first), or
/// where the layout puts new fields.
pub fn resolve_write<'a>(
    document: &DocumentStore,
    layout: &Layout,
    path: &[&'a str],
) -> WriteTarget<'a> {
    let prefixed = namespaced(path);

    if document.has(&prefixed) {
        WriteTarget::Existing(prefixed)
    } else if document.has(path) {
        WriteTarget::Existing(path.to_vec())
    } else if layout.uses_namespace {
        WriteTarget::New(prefixed)
    } else {
        WriteTarget::New(path.to_vec())
    }
}
