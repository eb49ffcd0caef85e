//! File-backed template rendering.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ViewError;

/// Renders template files with named variables bound into scope.
///
/// A target that is not directly a file is resolved relative to the
/// renderer's view directory. Each render is independent: the template
/// body is executed against exactly the bindings passed in, so nothing
/// leaks between renders.
///
/// # Example
///
/// ```no_run
/// use waymark_view::Renderer;
/// use serde_json::json;
///
/// let renderer = Renderer::with_view_dir("templates");
/// let html = renderer.render_with("greeting.html", &json!({ "name": "Ada" }))?;
/// # Ok::<(), waymark_view::ViewError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct Renderer {
    view_dir: Option<PathBuf>,
}

impl Renderer {
    /// Creates a renderer without a view directory; only absolute or
    /// working-directory-relative file targets will resolve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer that resolves bare targets inside `dir`.
    #[must_use]
    pub fn with_view_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            view_dir: Some(dir.into()),
        }
    }

    /// The configured view directory, if any.
    #[must_use]
    pub fn view_dir(&self) -> Option<&Path> {
        self.view_dir.as_deref()
    }

    /// Renders `target` with an empty variable scope.
    pub fn render(&self, target: impl AsRef<Path>) -> Result<String, ViewError> {
        self.render_context(target.as_ref(), &Context::new())
    }

    /// Renders `target` with `vars` bound as template variables.
    ///
    /// `vars` must serialize to a map (e.g. a struct or a JSON object).
    pub fn render_with<C: Serialize>(
        &self,
        target: impl AsRef<Path>,
        vars: &C,
    ) -> Result<String, ViewError> {
        let context = Context::from_serialize(vars)?;
        self.render_context(target.as_ref(), &context)
    }

    fn render_context(&self, target: &Path, context: &Context) -> Result<String, ViewError> {
        let file = self.resolve_target(target)?;
        let source = fs::read_to_string(&file).map_err(|source| ViewError::Read {
            path: file.clone(),
            source,
        })?;
        // autoescape off: discovered views may be any extension and own
        // their output encoding
        let rendered = Tera::one_off(&source, context, false)?;
        Ok(rendered)
    }

    fn resolve_target(&self, target: &Path) -> Result<PathBuf, ViewError> {
        if target.is_file() {
            return Ok(target.to_path_buf());
        }
        let dir = self.view_dir.as_ref().ok_or(ViewError::ViewDirUnset)?;
        let joined = dir.join(target);
        if joined.is_file() {
            Ok(joined)
        } else {
            Err(ViewError::TemplateNotFound(joined))
        }
    }
}
