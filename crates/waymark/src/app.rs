//! Application state and the dispatch chain.
//!
//! [`App`] owns the route table, the option store, and the fallback
//! configuration. [`App::dispatch`] runs the chain for one request:
//! route match → auto-map → view discovery → not-found handler → error.

use waymark_core::{
    CONTENT_TYPE, IntoResponse, Options, Response, StatusCode, mime_type_for_extension,
    request_path,
};
use waymark_router::{PathParams, Route, RouteTable};
use waymark_view::{Renderer, ViewError, find_file};

/// A boxed fallback handler, invoked with the request path.
pub type FallbackHandler = Box<dyn Fn(&str) -> Response + Send + Sync>;

/// Policy for resolving paths that match no route.
#[derive(Default)]
pub enum AutoMap {
    /// Unmatched paths skip straight to the not-found handling.
    #[default]
    Disabled,
    /// Unmatched paths try view-file discovery in the view directory.
    Enabled,
    /// Unmatched paths are handed to a custom handler.
    Custom(FallbackHandler),
}

impl AutoMap {
    /// Wraps a handler as the custom auto-map policy.
    pub fn custom<H, R>(handler: H) -> Self
    where
        H: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoResponse,
    {
        Self::Custom(Box::new(move |path| handler(path).into_response()))
    }
}

impl std::fmt::Debug for AutoMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Enabled => f.write_str("Enabled"),
            Self::Custom(_) => f.debug_tuple("Custom").finish_non_exhaustive(),
        }
    }
}

/// Dispatch failure.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No route, no auto-map hit, no view file, no not-found handler.
    /// This is the one failure the dispatcher does not recover from.
    #[error("route not found for {path:?}; register a route or configure a not-found handler")]
    RouteNotFound {
        /// The unmatched request path.
        path: String,
    },

    /// A view-layer error surfaced mid-chain (unset view directory,
    /// unreadable template, render failure).
    #[error(transparent)]
    View(#[from] ViewError),
}

/// The assembled application: routes, options, fallbacks.
///
/// Dispatch is synchronous and takes `&self`, so a host may share an `App`
/// behind an `Arc` as long as one request is dispatched at a time per its
/// own execution model.
pub struct App {
    table: RouteTable,
    options: Options,
    auto_map: AutoMap,
    not_found: Option<FallbackHandler>,
}

impl App {
    /// Starts building an application.
    #[must_use]
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Registers a route after construction. Same semantics as
    /// [`AppBuilder::route`]: redefinition replaces the handler in place.
    pub fn define<H, R>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: Fn(&PathParams) -> R + Send + Sync + 'static,
        R: IntoResponse,
    {
        let pattern = pattern.into();
        tracing::debug!(%pattern, "route defined");
        self.table.define(pattern, handler);
    }

    /// Registered routes in definition order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// The option store.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Mutable access to the option store.
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// A renderer bound to the currently configured view directory.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        match self.options.view_dir() {
            Some(dir) => Renderer::with_view_dir(dir),
            None => Renderer::new(),
        }
    }

    /// Dispatches one request target through the chain.
    ///
    /// The query suffix (from the first `?`, inclusive) is stripped before
    /// matching. On a route match the handler's response is returned
    /// directly. Otherwise the auto-map policy runs, then the not-found
    /// handler (its response status is forced to `404` unless the handler
    /// set a non-default status), and finally
    /// [`DispatchError::RouteNotFound`].
    pub fn dispatch(&self, target: &str) -> Result<Response, DispatchError> {
        let path = request_path(target);

        if let Some(found) = self.table.resolve(path) {
            tracing::debug!(path, pattern = found.route.pattern(), "route matched");
            return Ok(found.route.call(&found.params));
        }

        match &self.auto_map {
            AutoMap::Custom(map) => {
                tracing::debug!(path, "dispatching to auto-map handler");
                return Ok(map(path));
            }
            AutoMap::Enabled => {
                let dir = self.options.view_dir().ok_or(ViewError::ViewDirUnset)?;
                if let Some(file) = find_file(path, dir)? {
                    tracing::debug!(path, file = %file.display(), "view file matched");
                    let body = self.renderer().render(&file)?;
                    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
                    return Ok(Response::ok()
                        .with_header(CONTENT_TYPE, mime_type_for_extension(ext))
                        .body_text(body));
                }
            }
            AutoMap::Disabled => {}
        }

        if let Some(handler) = &self.not_found {
            tracing::debug!(path, "dispatching to not-found handler");
            let mut response = handler(path);
            if response.status() == StatusCode::OK {
                response.set_status(StatusCode::NOT_FOUND);
            }
            return Ok(response);
        }

        tracing::debug!(path, "dispatch chain exhausted");
        Err(DispatchError::RouteNotFound {
            path: path.to_string(),
        })
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("table", &self.table)
            .field("options", &self.options)
            .field("auto_map", &self.auto_map)
            .field("not_found", &self.not_found.is_some())
            .finish()
    }
}

/// Builder for [`App`].
///
/// # Example
///
/// ```
/// use waymark::{App, AutoMap, PathParams};
///
/// let app = App::builder()
///     .route("/hello/:name", |params: &PathParams| {
///         format!("Hello, {}!", params.get(0).unwrap_or("stranger"))
///     })
///     .auto_map(AutoMap::Disabled)
///     .not_found(|path: &str| format!("nothing at {path}"))
///     .build();
///
/// let response = app.dispatch("/hello/Ada").unwrap();
/// assert_eq!(response.text(), Some("Hello, Ada!"));
/// ```
#[derive(Default)]
pub struct AppBuilder {
    table: RouteTable,
    options: Options,
    auto_map: AutoMap,
    not_found: Option<FallbackHandler>,
}

impl std::fmt::Debug for AppBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppBuilder")
            .field("table", &self.table)
            .field("options", &self.options)
            .field("auto_map", &self.auto_map)
            .field("not_found", &self.not_found.is_some())
            .finish()
    }
}

impl AppBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route. Patterns may contain `:name` parameter tokens;
    /// redefining a pattern replaces its handler without moving its
    /// position in the table.
    #[must_use]
    pub fn route<H, R>(mut self, pattern: impl Into<String>, handler: H) -> Self
    where
        H: Fn(&PathParams) -> R + Send + Sync + 'static,
        R: IntoResponse,
    {
        let pattern = pattern.into();
        tracing::debug!(%pattern, "route defined");
        self.table.define(pattern, handler);
        self
    }

    /// Sets the root directory for view discovery and relative rendering.
    #[must_use]
    pub fn view_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.options.set_view_dir(dir);
        self
    }

    /// Stores an arbitrary option entry.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Sets the auto-map policy for unmatched paths.
    #[must_use]
    pub fn auto_map(mut self, policy: AutoMap) -> Self {
        self.auto_map = policy;
        self
    }

    /// Configures the not-found handler. Its response status is forced to
    /// `404` unless the handler sets a non-default status itself.
    #[must_use]
    pub fn not_found<H, R>(mut self, handler: H) -> Self
    where
        H: Fn(&str) -> R + Send + Sync + 'static,
        R: IntoResponse,
    {
        self.not_found = Some(Box::new(move |path| handler(path).into_response()));
        self
    }

    /// Finalizes the application.
    #[must_use]
    pub fn build(self) -> App {
        App {
            table: self.table,
            options: self.options,
            auto_map: self.auto_map,
            not_found: self.not_found,
        }
    }
}
