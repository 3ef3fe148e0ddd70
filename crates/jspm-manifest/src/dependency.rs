//! Dependency descriptors and their manifest encoding.
//!
//! A manifest entry such as `"lodash": "^3.0.0"` is shorthand for the fully
//! qualified `npm:lodash@^3.0.0` when the document registry is `npm`.
//! [`process_deps`] expands entries to [`DependencyDescriptor`]s;
//! [`DependencyDescriptor::to_target`] picks the shortest form that reads back
//! to the same descriptor.
//!
//! ```
//! use jspm_manifest::dependency::parse_target;
//!
//! let dep = parse_target("lodash", "^3.0.0", "npm").unwrap();
//! assert_eq!(dep.exact_name(), "npm:lodash@^3.0.0");
//! assert_eq!(dep.to_target("lodash", "npm"), "^3.0.0");
//! assert_eq!(dep.to_target("lodash", "github"), "npm:lodash@^3.0.0");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Dependency groups keyed by dependency name.
///
/// `None` marks an entry removed in memory; it is dropped on write.
pub type DependencyMap = BTreeMap<String, Option<DependencyDescriptor>>;

/// One dependency, normalized to registry, package and version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyDescriptor {
    pub registry: String,
    pub package: String,
    /// `None` means any version (`*`).
    pub version: Option<String>,
}

impl DependencyDescriptor {
    /// Build a descriptor; a `*` or empty version means any version.
    pub fn new(
        registry: impl Into<String>,
        package: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            registry: registry.into(),
            package: package.into(),
            version: version.filter(|v| !v.is_empty() && v != "*"),
        }
    }

    /// `package@version`, with `*` standing in for any version.
    pub fn exact_package(&self) -> String {
        format!(
            "{}@{}",
            self.package,
            self.version.as_deref().unwrap_or("*")
        )
    }

    /// `registry:package@version`, or `registry:package` for any version.
    pub fn exact_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}:{}@{}", self.registry, self.package, version),
            None => format!("{}:{}", self.registry, self.package),
        }
    }

    /// The manifest value for this descriptor stored under `name` in a
    /// document whose default registry is `registry`.
    pub fn to_target(&self, name: &str, registry: &str) -> String {
        if self.registry != registry {
            return self.exact_name();
        }
        if name == self.package {
            self.version.clone().unwrap_or_else(|| "*".to_string())
        } else {
            self.exact_package()
        }
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exact_name())
    }
}

impl FromStr for DependencyDescriptor {
    type Err = Error;

    /// Parse a fully qualified `registry:package[@version]`.
    fn from_str(s: &str) -> Result<Self> {
        split_qualified(s, s)
    }
}

/// Expand one manifest entry `name: target` against the document registry.
///
/// - `github:components/jquery@2.1` is already qualified;
/// - `lodash@^3.0.0` (or a bare scoped `@scope/pkg`) names a package;
/// - anything else is a version of the package called `name`.
pub fn parse_target(name: &str, target: &str, registry: &str) -> Result<DependencyDescriptor> {
    let target = target.trim();

    let names_package = target.rfind('@').is_some_and(|i| i > 0)
        || (target.starts_with('@') && target.contains('/'));

    let qualified = if target.contains(':') {
        target.to_string()
    } else if names_package {
        format!("{registry}:{target}")
    } else {
        format!("{registry}:{name}@{target}")
    };

    split_qualified(name, &qualified)
}

fn split_qualified(name: &str, qualified: &str) -> Result<DependencyDescriptor> {
    let Some((registry, rest)) = qualified.split_once(':') else {
        return Err(Error::invalid_dependency(
            name,
            qualified,
            "expected registry:package[@version]",
        ));
    };

    if registry.is_empty() {
        return Err(Error::invalid_dependency(name, qualified, "empty registry"));
    }

    let (package, version) = match rest.rfind('@') {
        Some(i) if i > 0 => (&rest[..i], Some(rest[i + 1..].to_string())),
        _ => (rest, None),
    };

    if package.is_empty() {
        return Err(Error::invalid_dependency(name, qualified, "empty package name"));
    }

    Ok(DependencyDescriptor::new(registry, package, version))
}

/// Normalize a raw dependency group read from the manifest.
pub fn process_deps(raw: Option<&Map<String, Value>>, registry: &str) -> Result<DependencyMap> {
    let mut deps = DependencyMap::new();
    let Some(raw) = raw else {
        return Ok(deps);
    };

    for (name, value) in raw {
        let target = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(Error::invalid_dependency(
                    name,
                    other.to_string(),
                    "target must be a string",
                ));
            }
        };
        deps.insert(name.clone(), Some(parse_target(name, &target, registry)?));
    }

    Ok(deps)
}

/// Encode a dependency group for the manifest, skipping removed entries.
pub fn encode_deps(deps: &DependencyMap, registry: &str) -> Map<String, Value> {
    deps.iter()
        .filter_map(|(name, dep)| {
            let dep = dep.as_ref()?;
            Some((name.clone(), Value::String(dep.to_target(name, registry))))
        })
        .collect()
}
