//! View-layer errors.

use std::path::PathBuf;

/// Errors raised by view discovery and rendering.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// A view lookup or relative render needs a view directory and none is
    /// configured.
    #[error("view directory is not configured; set a view_dir before view lookup")]
    ViewDirUnset,

    /// The render target does not resolve to an existing file.
    #[error("view file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Listing the view directory failed.
    #[error("failed to list view directory {}", .dir.display())]
    List {
        /// The directory that could not be listed.
        dir: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading a template file failed.
    #[error("failed to read view file {}", .path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template rendering or context serialization failed.
    #[error("template rendering failed")]
    Render(#[from] tera::Error),
}
