//! Extension-agnostic view file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use waymark_core::view_name;

use crate::error::ViewError;

/// Finds a view file for `path` inside `view_dir`.
///
/// The directory is listed non-recursively (files only, dot-entries
/// skipped) to collect the set of extensions in use; the listing is sorted
/// so the extension probe order is stable across platforms. The candidate
/// base name is the request path with outer slashes trimmed and interior
/// slashes replaced by dashes, and the first `<view_dir>/<name>.<ext>`
/// that exists wins.
///
/// Returns `Ok(None)` when no candidate exists; absence is not an error.
pub fn find_file(path: &str, view_dir: &Path) -> Result<Option<PathBuf>, ViewError> {
    let list_err = |source| ViewError::List {
        dir: view_dir.to_path_buf(),
        source,
    };

    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(view_dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.starts_with('.') || !entry.path().is_file() {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut extensions: Vec<String> = Vec::new();
    for name in &names {
        if let Some(ext) = Path::new(name).extension().and_then(|e| e.to_str()) {
            if !extensions.iter().any(|seen| seen == ext) {
                extensions.push(ext.to_string());
            }
        }
    }

    let base = view_name(path);
    for ext in &extensions {
        let candidate = view_dir.join(format!("{base}.{ext}"));
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
