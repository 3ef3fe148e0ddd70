//! Filesystem support for jspm manifest tooling
//!
//! Provides forward-slash path handling with lexical resolution, atomic
//! writes, and format-agnostic settings loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
