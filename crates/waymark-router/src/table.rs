//! Route storage and lookup.
//!
//! Routes live in definition order; lookup takes the exact-match fast path
//! first, then scans patterns in order and stops at the first full match.
//! Redefining a pattern replaces its handler without moving its position.

use std::sync::Arc;

use waymark_core::{IntoResponse, Response};

use crate::pattern::{self, CompiledPattern};
use crate::r#match::{PathParams, RouteMatch};

/// A shared route handler. Handlers receive the extracted path parameters
/// and produce a response.
pub type BoxHandler = Arc<dyn Fn(&PathParams) -> Response + Send + Sync>;

/// A registered route: pattern plus handler.
#[derive(Clone)]
pub struct Route {
    pattern: String,
    compiled: CompiledPattern,
    handler: BoxHandler,
}

impl Route {
    /// The pattern this route was defined with.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of `:name` tokens in the pattern.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.compiled.param_count()
    }

    /// Invokes the handler with the given parameters.
    #[must_use]
    pub fn call(&self, params: &PathParams) -> Response {
        (self.handler)(params)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of routes.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `pattern`.
    ///
    /// Defining a pattern that already exists replaces its handler in
    /// place; the route keeps the table position of its first definition.
    pub fn define<H, R>(&mut self, pattern: impl Into<String>, handler: H)
    where
        H: Fn(&PathParams) -> R + Send + Sync + 'static,
        R: IntoResponse,
    {
        let pattern = pattern.into();
        let handler: BoxHandler = Arc::new(move |params| handler(params).into_response());
        if let Some(existing) = self.routes.iter_mut().find(|r| r.pattern == pattern) {
            existing.handler = handler;
            return;
        }
        let compiled = pattern::compile(&pattern);
        self.routes.push(Route {
            pattern,
            compiled,
            handler,
        });
    }

    /// Routes in definition order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolves `path` to a route.
    ///
    /// A pattern literally equal to the path wins outright with empty
    /// params; otherwise patterns are tried in definition order and the
    /// first full match wins. `None` is the normal no-match outcome.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        if let Some(route) = self.routes.iter().find(|r| r.pattern == path) {
            return Some(RouteMatch {
                route,
                params: PathParams::empty(),
            });
        }

        for route in &self.routes {
            if let Some(items) = route.compiled.capture(path) {
                return Some(RouteMatch {
                    route,
                    params: PathParams::new(items),
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::StatusCode;

    fn tagged(tag: &'static str) -> impl Fn(&PathParams) -> Response + Send + Sync + 'static {
        move |_params| Response::ok().body_text(tag)
    }

    fn body(table: &RouteTable, path: &str) -> Option<String> {
        table
            .resolve(path)
            .map(|m| m.route.call(&m.params).text().unwrap_or_default().to_string())
    }

    #[test]
    fn exact_pattern_resolves_with_empty_params() {
        let mut table = RouteTable::new();
        table.define("/about", tagged("about"));
        let found = table.resolve("/about").expect("match");
        assert!(found.params.is_empty());
        assert_eq!(found.route.pattern(), "/about");
    }

    #[test]
    fn single_param_extraction() {
        let mut table = RouteTable::new();
        table.define("/users/:id", |params: &PathParams| {
            format!("user {}", params.get(0).unwrap_or("?"))
        });
        let found = table.resolve("/users/42").expect("match");
        assert_eq!(found.params.get(0), Some("42"));
        assert_eq!(found.get_param("id"), Some("42"));
        assert_eq!(found.route.call(&found.params).text(), Some("user 42"));
    }

    #[test]
    fn params_in_left_to_right_order() {
        let mut table = RouteTable::new();
        table.define("/a/:x/b/:y", tagged("ab"));
        let found = table.resolve("/a/1/b/2").expect("match");
        assert_eq!(found.params.values().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn definition_order_breaks_ties() {
        let mut table = RouteTable::new();
        table.define("/x/:a", tagged("first"));
        table.define("/x/:b", tagged("second"));
        assert_eq!(body(&table, "/x/1").as_deref(), Some("first"));
    }

    #[test]
    fn exact_match_beats_pattern_match() {
        let mut table = RouteTable::new();
        table.define("/users/:id", tagged("pattern"));
        table.define("/users/me", tagged("exact"));
        // the pattern was defined first, but the literal wins
        assert_eq!(body(&table, "/users/me").as_deref(), Some("exact"));
        assert_eq!(body(&table, "/users/42").as_deref(), Some("pattern"));
    }

    #[test]
    fn redefinition_replaces_handler_in_place() {
        let mut table = RouteTable::new();
        table.define("/x/:a", tagged("old"));
        table.define("/x/:b", tagged("other"));
        table.define("/x/:a", tagged("new"));
        assert_eq!(table.len(), 2);
        // still first in table order, with the replacement handler
        assert_eq!(table.routes()[0].pattern(), "/x/:a");
        assert_eq!(body(&table, "/x/1").as_deref(), Some("new"));
    }

    #[test]
    fn no_match_is_none() {
        let mut table = RouteTable::new();
        table.define("/only", tagged("only"));
        assert!(table.resolve("/missing").is_none());
        assert!(RouteTable::new().resolve("/missing").is_none());
    }

    #[test]
    fn handlers_may_return_into_response_types() {
        let mut table = RouteTable::new();
        table.define("/gone", |_: &PathParams| (StatusCode::GONE, "gone"));
        let found = table.resolve("/gone").expect("match");
        assert_eq!(found.route.call(&found.params).status(), StatusCode::GONE);
    }
}
