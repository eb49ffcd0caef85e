//! Ordered pattern-matching router.
//!
//! This crate provides the route table and matcher for the waymark
//! framework.
//!
//! # Features
//!
//! - Exact-match fast path
//! - Path parameter extraction (`/users/:id`)
//! - First-match-wins in definition order
//! - Pattern literals are regex-escaped at compile time

#![forbid(unsafe_code)]

mod r#match;
mod pattern;
mod table;

pub use r#match::{PathParams, RouteMatch};
pub use table::{BoxHandler, Route, RouteTable};
