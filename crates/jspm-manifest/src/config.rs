//! The jspm view of a shared `package.json`

use std::collections::BTreeMap;
use std::path::Path;

use jspm_document::DocumentStore;
use jspm_fs::NormalizedPath;
use serde_json::{Map, Value};

use crate::Result;
use crate::constants::{
    CONFIG_FILE_KEY, CURRENT_DIR, DEFAULT_CONFIG_FILE, DEFAULT_PACKAGES_DIR, DEPENDENCIES,
    DEV_DEPENDENCIES, NAMESPACE_KEY, PEER_DEPENDENCIES, manifest_key_order,
};
use crate::dependency::{DependencyMap, encode_deps, process_deps};
use crate::layout::{Layout, WriteTarget, resolve_read, resolve_write};
use crate::settings::Settings;
use crate::warning::{ManifestWarning, is_valid_base_url};

const BASE_URL: [&str; 2] = ["directories", "baseURL"];
const PACKAGES: [&str; 2] = ["directories", "packages"];
const LIB: [&str; 2] = ["directories", "lib"];
const DIST: [&str; 2] = ["directories", "dist"];
const CONFIG_FILES_JSPM: [&str; 2] = ["configFiles", CONFIG_FILE_KEY];
const LEGACY_CONFIG_FILE: [&str; 1] = ["configFile"];

/// jspm configuration read from, and written back to, a project manifest.
///
/// Directories are absolute. Fields may be edited freely; [`write`](Self::write)
/// stores them back in whichever convention the manifest already uses and
/// omits values that equal their defaults.
#[derive(Debug, Clone)]
pub struct ManifestConfig {
    pub name: Option<String>,
    pub base_url: NormalizedPath,
    pub packages: NormalizedPath,
    pub lib: Option<NormalizedPath>,
    pub dist: Option<NormalizedPath>,
    /// Loader config files; `"jspm"` is always present.
    pub config_files: BTreeMap<String, NormalizedPath>,
    pub overrides: Map<String, Value>,
    pub dependencies: DependencyMap,
    pub peer_dependencies: DependencyMap,
    pub dev_dependencies: DependencyMap,

    document: DocumentStore,
    layout: Layout,
    document_root: NormalizedPath,
    registry: String,
    warnings: Vec<ManifestWarning>,
}

impl ManifestConfig {
    /// Load the manifest at `path`. A missing file reads as an empty manifest.
    pub fn load(path: impl AsRef<Path>, settings: &Settings) -> Result<Self> {
        let document = DocumentStore::load(path, manifest_key_order())?;
        Self::from_document(document, settings)
    }

    /// Read the configuration out of an already loaded document.
    pub fn from_document(mut document: DocumentStore, settings: &Settings) -> Result<Self> {
        let layout = Layout::detect(&document);
        let document_root = document
            .file_name()
            .parent()
            .unwrap_or_else(|| document.file_name().clone());

        if !layout.namespace_aware {
            document.set_object(&[NAMESPACE_KEY], Map::new(), false);
        }

        let mut warnings = Vec::new();

        let name = read_string(&document, &layout, &["name"])?;
        let registry = read_string(&document, &layout, &["registry"])?
            .unwrap_or_else(|| settings.default_registry.clone());

        let mut base_value = read_string(&document, &layout, &BASE_URL)?.unwrap_or_default();
        if !is_valid_base_url(&base_value) {
            warnings.push(ManifestWarning::InvalidBaseUrl { value: base_value }.emit());
            base_value = String::new();
        }
        let base_url = document_root.resolve(&base_value);

        let packages = match read_string(&document, &layout, &PACKAGES)? {
            Some(value) => document_root.resolve(&value),
            None => base_url.join(DEFAULT_PACKAGES_DIR).clean(),
        };
        if !packages.is_within(&base_url) {
            warnings.push(
                ManifestWarning::PackagesOutsideBaseUrl {
                    packages: packages.relative_to(&document_root),
                    base_url: base_url.relative_to(&document_root),
                }
                .emit(),
            );
        }

        let config_file = match read_string(&document, &layout, &CONFIG_FILES_JSPM)? {
            Some(value) => Some(value),
            None => read_string(&document, &layout, &LEGACY_CONFIG_FILE)?,
        };
        let config_file = match config_file {
            Some(value) => document_root.resolve(&value),
            None => base_url.join(DEFAULT_CONFIG_FILE).clean(),
        };
        let config_files = BTreeMap::from([(CONFIG_FILE_KEY.to_string(), config_file)]);

        let lib = read_string(&document, &layout, &LIB)?.map(|v| document_root.resolve(&v));
        let dist = read_string(&document, &layout, &DIST)?.map(|v| document_root.resolve(&v));

        let overrides = match resolve_read(&document, &layout, &["overrides"]) {
            Some(path) => document.get_object(&path, true)?.unwrap_or_default(),
            None => Map::new(),
        };

        let read_group = |group: &str| -> Result<DependencyMap> {
            if !layout.namespace_aware {
                return Ok(DependencyMap::new());
            }
            let raw = document.get_object(&layout.dependency_base.path(group), false)?;
            process_deps(raw.as_ref(), &registry)
        };
        let dependencies = read_group(DEPENDENCIES)?;
        let peer_dependencies = read_group(PEER_DEPENDENCIES)?;
        let dev_dependencies = read_group(DEV_DEPENDENCIES)?;

        tracing::debug!(
            file = %document.file_name(),
            base_url = %base_url,
            registry = %registry,
            dependencies = dependencies.len(),
            "Loaded manifest configuration"
        );

        Ok(Self {
            name,
            base_url,
            packages,
            lib,
            dist,
            config_files,
            overrides,
            dependencies,
            peer_dependencies,
            dev_dependencies,
            document,
            layout,
            document_root,
            registry,
            warnings,
        })
    }

    /// Directory containing the manifest.
    pub fn document_root(&self) -> &NormalizedPath {
        &self.document_root
    }

    /// Absolute path of the manifest file.
    pub fn file_name(&self) -> &NormalizedPath {
        self.document.file_name()
    }

    /// Default registry for dependencies of this manifest.
    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn uses_namespace(&self) -> bool {
        self.layout.uses_namespace
    }

    pub fn namespace_aware(&self) -> bool {
        self.layout.namespace_aware
    }

    /// Problems recovered from while loading or prompting.
    pub fn warnings(&self) -> &[ManifestWarning] {
        &self.warnings
    }

    pub(crate) fn push_warning(&mut self, warning: ManifestWarning) {
        self.warnings.push(warning.emit());
    }

    /// Path of `path` relative to the manifest directory, forward slashes.
    pub fn relative(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.document_root)
    }

    /// Main loader config file.
    pub fn config_file(&self) -> Option<&NormalizedPath> {
        self.config_files.get(CONFIG_FILE_KEY)
    }

    /// Store the configuration in the manifest and persist it.
    ///
    /// Returns `false` when the file content did not change. On failure the
    /// in-memory configuration is left as it was.
    pub fn write(&mut self) -> Result<bool> {
        let mut document = self.document.clone();
        self.sync(&mut document);
        let changed = document.write()?;
        self.document = document;
        Ok(changed)
    }

    /// The manifest text [`write`](Self::write) would produce.
    pub fn render(&self) -> Result<String> {
        let mut document = self.document.clone();
        self.sync(&mut document);
        Ok(document.render()?)
    }

    /// Whether [`write`](Self::write) would change the file.
    pub fn is_modified(&self) -> Result<bool> {
        let mut document = self.document.clone();
        self.sync(&mut document);
        Ok(document.is_modified()?)
    }

    fn sync(&self, document: &mut DocumentStore) {
        let base = self.layout.dependency_base;

        // Removed entries still count, so an empty map leaves the group as is.
        if !self.dependencies.is_empty() {
            document.set_object(
                &base.path(DEPENDENCIES),
                encode_deps(&self.dependencies, &self.registry),
                false,
            );
        }
        document.set_object(
            &base.path(PEER_DEPENDENCIES),
            encode_deps(&self.peer_dependencies, &self.registry),
            true,
        );
        document.set_object(
            &base.path(DEV_DEPENDENCIES),
            encode_deps(&self.dev_dependencies, &self.registry),
            true,
        );

        self.set_object(document, &["overrides"], self.overrides.clone(), true);

        if let Some(name) = &self.name {
            self.set_value(document, &["name"], name, None);
        }

        let base_url = self.relative(&self.base_url);
        let base_prefix = if base_url.is_empty() {
            String::new()
        } else {
            format!("{base_url}/")
        };
        let written_base = if base_url.is_empty() { CURRENT_DIR } else { base_url.as_str() };
        self.set_value(document, &BASE_URL, written_base, Some(CURRENT_DIR));

        let packages_default = format!("{base_prefix}{DEFAULT_PACKAGES_DIR}");
        self.set_value(
            document,
            &PACKAGES,
            &self.relative(&self.packages),
            Some(packages_default.as_str()),
        );

        if let Some(config_file) = self.config_file() {
            let config_default = format!("{base_prefix}{DEFAULT_CONFIG_FILE}");
            let path: &[&str] = if self.writes_legacy_config_file(document) {
                &LEGACY_CONFIG_FILE
            } else {
                &CONFIG_FILES_JSPM
            };
            self.set_value(
                document,
                path,
                &self.relative(config_file),
                Some(config_default.as_str()),
            );
        }

        if let Some(lib) = &self.lib {
            self.set_value(document, &LIB, &self.relative(lib), None);
        }
        if let Some(dist) = &self.dist {
            self.set_value(document, &DIST, &self.relative(dist), None);
        }
    }

    /// Manifests that only carry the old `configFile` key keep using it.
    ///
    /// Earlier jspm releases always moved the value to `configFiles.jspm`
    /// on write; here the key the manifest already uses is kept.
    fn writes_legacy_config_file(&self, document: &DocumentStore) -> bool {
        let has_either = |path: &[&str]| {
            let prefixed = crate::layout::namespaced(path);
            document.has(path) || document.has(&prefixed)
        };
        has_either(&LEGACY_CONFIG_FILE) && !has_either(&CONFIG_FILES_JSPM)
    }

    /// Write a value where it already lives, or create it only when it differs
    /// from `default`.
    fn set_value(
        &self,
        document: &mut DocumentStore,
        path: &[&str],
        value: &str,
        default: Option<&str>,
    ) {
        match resolve_write(document, &self.layout, path) {
            WriteTarget::Existing(target) => {
                document.set_value(&target, Value::String(value.to_string()));
            }
            WriteTarget::New(target) if default != Some(value) => {
                document.set_value(&target, Value::String(value.to_string()));
            }
            WriteTarget::New(_) => {}
        }
    }

    fn set_object(
        &self,
        document: &mut DocumentStore,
        path: &[&str],
        object: Map<String, Value>,
        clear_if_empty: bool,
    ) {
        let (WriteTarget::Existing(target) | WriteTarget::New(target)) =
            resolve_write(document, &self.layout, path);
        document.set_object(&target, object, clear_if_empty);
    }
}

/// Read a scalar through the namespace convention as a string.
fn read_string(document: &DocumentStore, layout: &Layout, path: &[&str]) -> Result<Option<String>> {
    let Some(target) = resolve_read(document, layout, path) else {
        return Ok(None);
    };
    Ok(document.get_value(&target)?.map(|value| match value {
        Value::String(s) => s,
        other => other.to_string(),
    }))
}
