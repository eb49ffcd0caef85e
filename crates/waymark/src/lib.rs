//! Minimal request router and view renderer.
//!
//! waymark dispatches a request path to a handler from an ordered route
//! table (`:name` segments capture parameters), or falls back to rendering
//! a template file named after the path, then to a configured not-found
//! handler. Transport is the host's problem: input is a request-target
//! string, output is a [`Response`] value.
//!
//! # Quick Start
//!
//! ```
//! use waymark::prelude::*;
//!
//! let app = App::builder()
//!     .route("/", |_params: &PathParams| "Hello, World!")
//!     .route("/users/:id", |params: &PathParams| {
//!         format!("user {}", params.get(0).unwrap_or("?"))
//!     })
//!     .not_found(|path: &str| format!("nothing at {path}"))
//!     .build();
//!
//! let response = app.dispatch("/users/42?tab=posts").unwrap();
//! assert_eq!(response.text(), Some("user 42"));
//!
//! let response = app.dispatch("/missing").unwrap();
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! ```
//!
//! # Dispatch Chain
//!
//! 1. Query suffix stripped from the request target
//! 2. Exact route match, then patterns in definition order
//! 3. [`AutoMap`] policy: a custom handler, or view-file discovery in the
//!    configured view directory
//! 4. Not-found handler (status forced to 404 unless it set its own)
//! 5. [`DispatchError::RouteNotFound`]
//!
//! # Crate Structure
//!
//! - [`waymark_core`] — options, responses, request-target helpers
//! - [`waymark_router`] — pattern compilation and the route table
//! - [`waymark_view`] — view discovery and Tera-backed rendering

#![forbid(unsafe_code)]

mod app;

// Re-export crates
pub use waymark_core as core;
pub use waymark_router as router;
pub use waymark_view as view;

// Re-export commonly used types
pub use app::{App, AppBuilder, AutoMap, DispatchError, FallbackHandler};
pub use waymark_core::{
    CONTENT_TYPE, Html, IntoResponse, Json, Options, Response, ResponseBody, StatusCode, Text,
    mime_type_for_extension, request_path, view_name,
};
pub use waymark_router::{PathParams, Route, RouteMatch, RouteTable};
pub use waymark_view::{Renderer, ViewError, find_file};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        App, AppBuilder, AutoMap, DispatchError, Html, IntoResponse, Json, Options, PathParams,
        Renderer, Response, StatusCode, Text,
    };
    pub use serde::{Deserialize, Serialize};
}
