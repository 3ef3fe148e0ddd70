//! The document store backing a manifest file

use std::path::Path;

use jspm_fs::{NormalizedPath, io};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::order::KeyOrder;
use crate::path::{
    display_path, get_at_path, kind_name, merge_preserving_order, remove_at_path, set_at_path,
};
use crate::style::Style;

/// A JSON document addressed by key paths and persisted to one file.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    file_name: NormalizedPath,
    root: Map<String, Value>,
    order: KeyOrder,
    style: Style,
    /// Text as last loaded or written; `None` until the file exists
    persisted: Option<String>,
}

impl DocumentStore {
    /// Load the document at `path`.
    ///
    /// A missing file yields an empty document that is created on the first
    /// [`write`](Self::write).
    pub fn load(path: impl AsRef<Path>, order: KeyOrder) -> Result<Self> {
        let file_name = NormalizedPath::absolute(path)?;

        if !file_name.exists() {
            tracing::debug!(file = %file_name, "Document does not exist yet, starting empty");
            return Ok(Self {
                file_name,
                root: Map::new(),
                order,
                style: Style::default(),
                persisted: None,
            });
        }

        let source = io::read_text(&file_name)?;
        let mut store = Self::parse(file_name, &source, order)?;
        store.persisted = Some(source);
        tracing::debug!(file = %store.file_name, "Loaded document");
        Ok(store)
    }

    /// Build a document from `source` without touching the filesystem.
    ///
    /// Whitespace-only sources are treated as an empty object.
    pub fn parse(file_name: NormalizedPath, source: &str, order: KeyOrder) -> Result<Self> {
        let root = if source.trim().is_empty() {
            Map::new()
        } else {
            let value: Value = serde_json::from_str(source).map_err(|e| Error::Parse {
                path: file_name.to_native(),
                message: e.to_string(),
            })?;
            match value {
                Value::Object(map) => map,
                _ => {
                    return Err(Error::RootNotObject {
                        path: file_name.to_native(),
                    });
                }
            }
        };

        Ok(Self {
            style: Style::detect(source),
            file_name,
            root,
            order,
            persisted: None,
        })
    }

    /// Absolute path of the backing file.
    pub fn file_name(&self) -> &NormalizedPath {
        &self.file_name
    }

    /// Whether a value (even `null`) exists at `path`.
    pub fn has(&self, path: &[&str]) -> bool {
        get_at_path(&self.root, path).is_some()
    }

    /// Raw access without type checks.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        get_at_path(&self.root, path)
    }

    /// Read a single value. `null` and missing paths read as `None`.
    pub fn get_value(&self, path: &[&str]) -> Result<Option<Value>> {
        match get_at_path(&self.root, path) {
            None | Some(Value::Null) => Ok(None),
            Some(value @ (Value::Array(_) | Value::Object(_))) => Err(Error::NotAScalar {
                path: display_path(path),
                found: kind_name(value),
            }),
            Some(value) => Ok(Some(value.clone())),
        }
    }

    /// Read an object.
    ///
    /// With `nested == false` every member must be a plain value; dependency
    /// groups are read this way. Overrides allow nesting.
    pub fn get_object(&self, path: &[&str], nested: bool) -> Result<Option<Map<String, Value>>> {
        let object = match get_at_path(&self.root, path) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(object)) => object,
            Some(other) => {
                return Err(Error::NotAnObject {
                    path: display_path(path),
                    found: kind_name(other),
                });
            }
        };

        if !nested {
            if let Some(key) = object.iter().find(|(_, v)| v.is_object()).map(|(k, _)| k) {
                let mut member_path = path.to_vec();
                member_path.push(key);
                return Err(Error::NestedValue {
                    path: display_path(&member_path),
                });
            }
        }

        Ok(Some(object.clone()))
    }

    /// Write a single value, creating parents as needed.
    pub fn set_value(&mut self, path: &[&str], value: Value) {
        set_at_path(&mut self.root, path, value, Some(&self.order));
    }

    /// Write an object, keeping the member order already in the document.
    ///
    /// An empty `object` with `clear_if_empty` removes the key instead of
    /// writing `{}`.
    pub fn set_object(&mut self, path: &[&str], object: Map<String, Value>, clear_if_empty: bool) {
        if object.is_empty() && clear_if_empty {
            self.remove(path);
            return;
        }

        let merged = match get_at_path(&self.root, path) {
            Some(Value::Object(existing)) => merge_preserving_order(existing, object),
            _ => object,
        };
        set_at_path(&mut self.root, path, Value::Object(merged), Some(&self.order));
    }

    /// Remove the value at `path`, returning it.
    pub fn remove(&mut self, path: &[&str]) -> Option<Value> {
        remove_at_path(&mut self.root, path)
    }

    /// Render the document in the style it was loaded with.
    pub fn render(&self) -> Result<String> {
        self.style.render(&self.root)
    }

    /// Whether the rendered document differs from what is on disk.
    pub fn is_modified(&self) -> Result<bool> {
        let rendered = self.render()?;
        Ok(self.persisted.as_deref() != Some(rendered.as_str()))
    }

    /// Persist the document.
    ///
    /// Returns `false` without touching the file when nothing changed.
    pub fn write(&mut self) -> Result<bool> {
        let rendered = self.render()?;
        if self.persisted.as_deref() == Some(rendered.as_str()) {
            tracing::debug!(file = %self.file_name, "Document unchanged, skipping write");
            return Ok(false);
        }

        io::write_text(&self.file_name, &rendered)?;
        tracing::debug!(file = %self.file_name, "Wrote document");
        self.persisted = Some(rendered);
        Ok(true)
    }
}
