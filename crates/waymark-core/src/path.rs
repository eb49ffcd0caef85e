//! Request-target string helpers.

use memchr::memchr;

/// Extracts the path portion of a request target by stripping the query
/// suffix (everything from the first `?`, inclusive).
///
/// A target that begins with `?` yields an empty path.
///
/// # Example
///
/// ```
/// use waymark_core::request_path;
///
/// assert_eq!(request_path("/search?q=x"), "/search");
/// assert_eq!(request_path("/search"), "/search");
/// assert_eq!(request_path("?q=x"), "");
/// ```
#[must_use]
pub fn request_path(target: &str) -> &str {
    match memchr(b'?', target.as_bytes()) {
        Some(pos) => &target[..pos],
        None => target,
    }
}

/// Derives a view base name from a request path: leading and trailing `/`
/// are trimmed and the remaining separators become `-`.
///
/// `/docs/intro/` and `docs/intro` both normalize to `docs-intro`.
#[must_use]
pub fn view_name(path: &str) -> String {
    path.trim_matches('/').replace('/', "-")
}
