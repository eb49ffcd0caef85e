//! Core types for the waymark request router.
//!
//! This crate provides the fundamental building blocks:
//! - [`Options`] — the configuration/option store threaded through dispatch
//! - [`Response`], [`StatusCode`] and the [`IntoResponse`] conversion trait
//! - Request-target helpers ([`request_path`], [`view_name`])
//!
//! # Design Principles
//!
//! - No global state: options are an explicit value, owned by the caller
//! - Synchronous, single-request dispatch model
//! - All public types are `Send + Sync`

#![forbid(unsafe_code)]

mod options;
mod path;
mod response;

pub use options::Options;
pub use path::{request_path, view_name};
pub use response::{
    CONTENT_TYPE, Html, IntoResponse, Json, Response, ResponseBody, StatusCode, Text,
    mime_type_for_extension,
};
