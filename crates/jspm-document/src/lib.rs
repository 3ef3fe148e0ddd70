//! Path-addressed JSON document store
//!
//! A [`DocumentStore`] wraps one JSON file whose root is an object. Values are
//! addressed by key paths (`&["jspm", "directories", "baseURL"]`), existing
//! key order is kept on rewrite, and new keys are slotted in according to a
//! [`KeyOrder`] schema so freshly written documents read naturally.
//!
//! # Example
//!
//! ```
//! use jspm_document::{DocumentStore, KeyOrder};
//! use jspm_fs::NormalizedPath;
//! use serde_json::json;
//!
//! let order = KeyOrder::new().key("name").key("registry");
//! let mut doc = DocumentStore::parse(
//!     NormalizedPath::new("/project/package.json"),
//!     r#"{"registry": "npm"}"#,
//!     order,
//! )
//! .unwrap();
//!
//! doc.set_value(&["name"], json!("app"));
//! assert_eq!(doc.render().unwrap(), "{\n  \"name\": \"app\",\n  \"registry\": \"npm\"\n}");
//! ```

pub mod error;
pub mod order;
pub mod path;
pub mod store;
mod style;

pub use error::{Error, Result};
pub use order::KeyOrder;
pub use path::is_truthy;
pub use store::DocumentStore;
