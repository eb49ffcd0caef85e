//! Response types and conversions.
//!
//! Handlers produce a [`Response`]; the [`IntoResponse`] trait lets them
//! return plain strings, status codes, or the [`Html`]/[`Text`]/[`Json`]
//! wrappers instead of building one by hand. The host decides how a
//! `Response` is serialized onto its transport.

use serde::Serialize;

/// Canonical name of the content-type header.
pub const CONTENT_TYPE: &str = "content-type";

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u16);

impl StatusCode {
    /// 200 OK.
    pub const OK: StatusCode = StatusCode(200);
    /// 204 No Content.
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    /// 301 Moved Permanently.
    pub const MOVED_PERMANENTLY: StatusCode = StatusCode(301);
    /// 302 Found.
    pub const FOUND: StatusCode = StatusCode(302);
    /// 400 Bad Request.
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    /// 404 Not Found.
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    /// 410 Gone.
    pub const GONE: StatusCode = StatusCode(410);
    /// 500 Internal Server Error.
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);

    /// Creates a status code from its numeric value.
    #[must_use]
    pub fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true for 2xx codes.
    #[must_use]
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }

    /// Returns the canonical reason phrase, if one is known.
    #[must_use]
    pub fn reason(self) -> Option<&'static str> {
        match self.0 {
            200 => Some("OK"),
            204 => Some("No Content"),
            301 => Some("Moved Permanently"),
            302 => Some("Found"),
            400 => Some("Bad Request"),
            404 => Some("Not Found"),
            410 => Some("Gone"),
            500 => Some("Internal Server Error"),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason() {
            Some(reason) => write!(f, "{} {}", self.0, reason),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Response body.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Empty body.
    #[default]
    Empty,
    /// Bytes body.
    Bytes(Vec<u8>),
}

impl ResponseBody {
    /// Get body as bytes, consuming it.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Empty => Vec::new(),
            Self::Bytes(b) => b,
        }
    }

    /// Check if body is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty) || matches!(self, Self::Bytes(b) if b.is_empty())
    }
}

/// Response value returned to the host: status, headers, body.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: ResponseBody,
}

impl Response {
    /// Creates an empty response with the given status.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: ResponseBody::Empty,
        }
    }

    /// Creates an empty `200 OK` response.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Creates an empty `404 Not Found` response.
    #[must_use]
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND)
    }

    /// Replaces the status code.
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets the status code in place.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Appends a header. Names are stored lowercase.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name: String = name.into();
        self.headers.push((name.to_ascii_lowercase(), value.into()));
        self
    }

    /// Sets the body from a UTF-8 string.
    #[must_use]
    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        let text: String = text.into();
        self.body = ResponseBody::Bytes(text.into_bytes());
        self
    }

    /// Sets the body from raw bytes.
    #[must_use]
    pub fn body_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = ResponseBody::Bytes(bytes.into());
        self
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the first header value with the given name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all headers as (name, value) pairs.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the body.
    #[must_use]
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// Returns the body interpreted as UTF-8, if it is valid.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Empty => Some(""),
            ResponseBody::Bytes(bytes) => std::str::from_utf8(bytes).ok(),
        }
    }

    /// Decomposes the response into its parts.
    #[must_use]
    pub fn into_parts(self) -> (StatusCode, Vec<(String, String)>, ResponseBody) {
        (self.status, self.headers, self.body)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

/// Conversion into a [`Response`].
///
/// Implemented for the types handlers typically want to return directly.
pub trait IntoResponse {
    /// Converts the value into a response.
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::new(self)
    }
}

impl IntoResponse for &str {
    fn into_response(self) -> Response {
        Response::ok()
            .with_header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body_text(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        self.as_str().into_response()
    }
}

impl IntoResponse for () {
    fn into_response(self) -> Response {
        Response::new(StatusCode::NO_CONTENT)
    }
}

impl<T: IntoResponse> IntoResponse for (StatusCode, T) {
    fn into_response(self) -> Response {
        self.1.into_response().with_status(self.0)
    }
}

/// Plain-text response wrapper.
#[derive(Debug, Clone)]
pub struct Text<T>(pub T);

impl<T: Into<String>> IntoResponse for Text<T> {
    fn into_response(self) -> Response {
        Response::ok()
            .with_header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body_text(self.0)
    }
}

/// HTML response wrapper.
#[derive(Debug, Clone)]
pub struct Html<T>(pub T);

impl<T: Into<String>> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        Response::ok()
            .with_header(CONTENT_TYPE, "text/html; charset=utf-8")
            .body_text(self.0)
    }
}

/// JSON response wrapper. Serialization failure yields a 500 response.
#[derive(Debug, Clone)]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::ok()
                .with_header(CONTENT_TYPE, "application/json")
                .body_bytes(bytes),
            Err(_) => Response::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_header(CONTENT_TYPE, "text/plain; charset=utf-8")
                .body_text("response serialization failed"),
        }
    }
}

/// Maps a file extension to a content type for rendered views.
///
/// Unknown extensions fall back to `text/plain` — discovered views are
/// rendered to text, whatever their extension.
#[must_use]
pub fn mime_type_for_extension(ext: &str) -> &'static str {
    match ext {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "xml" => "application/xml",
        "svg" => "image/svg+xml",
        "md" => "text/markdown; charset=utf-8",
        "csv" => "text/csv; charset=utf-8",
        _ => "text/plain; charset=utf-8",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_roundtrip() {
        let response = Response::ok()
            .with_header("X-Test", "1")
            .body_text("hello");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header("x-test"), Some("1"));
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn str_into_response_is_plain_text_ok() {
        let response = "hi".into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.header(CONTENT_TYPE), Some("text/plain; charset=utf-8"));
        assert_eq!(response.text(), Some("hi"));
    }

    #[test]
    fn status_tuple_overrides_status() {
        let response = (StatusCode::GONE, "gone").into_response();
        assert_eq!(response.status(), StatusCode::GONE);
        assert_eq!(response.text(), Some("gone"));
    }

    #[test]
    fn html_wrapper_sets_content_type() {
        let response = Html("<p>hi</p>").into_response();
        assert_eq!(response.header(CONTENT_TYPE), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn json_wrapper_serializes() {
        let response = Json(serde_json::json!({"ok": true})).into_response();
        assert_eq!(response.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(response.text(), Some(r#"{"ok":true}"#));
    }

    #[test]
    fn unit_is_no_content() {
        let response = ().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.body().is_empty());
    }

    #[test]
    fn status_display_includes_reason() {
        assert_eq!(StatusCode::NOT_FOUND.to_string(), "404 Not Found");
        assert_eq!(StatusCode::new(599).to_string(), "599");
    }

    #[test]
    fn mime_lookup() {
        assert_eq!(mime_type_for_extension("html"), "text/html; charset=utf-8");
        assert_eq!(mime_type_for_extension("json"), "application/json");
        assert_eq!(mime_type_for_extension("tpl"), "text/plain; charset=utf-8");
    }
}
