//! Configuration and option storage.
//!
//! [`Options`] is a plain value owned by the application and threaded
//! explicitly through dispatch. Well-known settings (the view directory)
//! get typed accessors; everything else lives in a string-keyed map of
//! [`serde_json::Value`] entries with get/set/unset semantics. A missing
//! key is a normal `None`, never an error, and the last writer wins.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

/// Mutable key/value option store plus typed configuration fields.
///
/// # Example
///
/// ```
/// use waymark_core::Options;
///
/// let mut options = Options::new();
/// options.set("site_name", "example");
/// assert_eq!(options.get("site_name").and_then(|v| v.as_str()), Some("example"));
///
/// options.unset("site_name");
/// assert!(options.get("site_name").is_none());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Options {
    view_dir: Option<PathBuf>,
    entries: HashMap<String, Value>,
}

impl Options {
    /// Creates an empty option store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Stores `value` under `name`, replacing any previous entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Removes the entry stored under `name`. Removing a missing key is a no-op.
    pub fn unset(&mut self, name: &str) {
        self.entries.remove(name);
    }

    /// Returns the configured view directory, if any.
    #[must_use]
    pub fn view_dir(&self) -> Option<&Path> {
        self.view_dir.as_deref()
    }

    /// Sets the root directory for view lookup and relative rendering.
    pub fn set_view_dir(&mut self, dir: impl Into<PathBuf>) {
        self.view_dir = Some(dir.into());
    }

    /// Clears the view directory.
    pub fn unset_view_dir(&mut self) {
        self.view_dir = None;
    }

    /// Returns the number of generic entries (the view directory is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no generic entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
