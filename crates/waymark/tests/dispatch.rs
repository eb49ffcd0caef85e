//! Integration tests for the dispatch chain.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use waymark::{App, AutoMap, DispatchError, PathParams, StatusCode, ViewError};

fn write(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).expect("write fixture");
}

#[test]
fn route_match_returns_handler_response() {
    let app = App::builder()
        .route("/ping", |_: &PathParams| "pong")
        .build();

    let response = app.dispatch("/ping").expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), Some("pong"));
}

#[test]
fn query_suffix_is_stripped_before_matching() {
    let app = App::builder()
        .route("/search", |_: &PathParams| "results")
        .build();

    let with_query = app.dispatch("/search?q=x").expect("dispatch");
    let without = app.dispatch("/search").expect("dispatch");
    assert_eq!(with_query.text(), without.text());
}

#[test]
fn leading_question_mark_dispatches_empty_path() {
    let app = App::builder().route("", |_: &PathParams| "root").build();

    let response = app.dispatch("?q=x").expect("dispatch");
    assert_eq!(response.text(), Some("root"));
}

#[test]
fn params_are_passed_positionally() {
    let app = App::builder()
        .route("/a/:x/b/:y", |params: &PathParams| {
            format!("{}+{}", params.get(0).unwrap_or("?"), params.get(1).unwrap_or("?"))
        })
        .build();

    let response = app.dispatch("/a/1/b/2").expect("dispatch");
    assert_eq!(response.text(), Some("1+2"));
}

#[test]
fn exact_match_wins_over_pattern_for_same_literal() {
    let app = App::builder()
        .route("/users/:id", |params: &PathParams| {
            format!("user {}", params.get(0).unwrap_or("?"))
        })
        .route("/users/me", |_: &PathParams| "self")
        .build();

    assert_eq!(app.dispatch("/users/me").unwrap().text(), Some("self"));
    assert_eq!(app.dispatch("/users/7").unwrap().text(), Some("user 7"));
}

#[test]
fn custom_auto_map_short_circuits() {
    let app = App::builder()
        .auto_map(AutoMap::custom(|path: &str| format!("mapped {path}")))
        .not_found(|_: &str| "unreached")
        .build();

    let response = app.dispatch("/anything").expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), Some("mapped /anything"));
}

#[test]
fn enabled_auto_map_renders_discovered_view() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "about.html", "<h1>{{ 40 + 2 }}</h1>");

    let app = App::builder()
        .view_dir(dir.path())
        .auto_map(AutoMap::Enabled)
        .build();

    let response = app.dispatch("/about").expect("dispatch");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), Some("<h1>42</h1>"));
    assert_eq!(response.header("content-type"), Some("text/html; charset=utf-8"));
}

#[test]
fn enabled_auto_map_falls_through_to_not_found() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "present.html", "");

    let app = App::builder()
        .view_dir(dir.path())
        .auto_map(AutoMap::Enabled)
        .not_found(|path: &str| format!("no view for {path}"))
        .build();

    let response = app.dispatch("/absent").expect("dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), Some("no view for /absent"));
}

#[test]
fn enabled_auto_map_without_view_dir_is_a_configuration_error() {
    let app = App::builder().auto_map(AutoMap::Enabled).build();

    let err = app.dispatch("/anything").expect_err("should fail");
    assert!(matches!(err, DispatchError::View(ViewError::ViewDirUnset)));
}

#[test]
fn not_found_handler_status_is_forced_to_404() {
    let app = App::builder().not_found(|_: &str| "gone missing").build();

    let response = app.dispatch("/missing").expect("dispatch");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), Some("gone missing"));
}

#[test]
fn not_found_handler_keeps_an_explicit_status() {
    let app = App::builder()
        .not_found(|_: &str| (StatusCode::GONE, "tombstone"))
        .build();

    let response = app.dispatch("/old").expect("dispatch");
    assert_eq!(response.status(), StatusCode::GONE);
}

#[test]
fn exhausted_chain_is_route_not_found() {
    let app = App::builder().build();

    let err = app.dispatch("/nowhere?x=1").expect_err("should fail");
    match err {
        DispatchError::RouteNotFound { path } => assert_eq!(path, "/nowhere"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn route_match_bypasses_fallbacks() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "hit.html", "view body");

    let app = App::builder()
        .route("/hit", |_: &PathParams| "handler body")
        .view_dir(dir.path())
        .auto_map(AutoMap::Enabled)
        .not_found(|_: &str| "unreached")
        .build();

    let response = app.dispatch("/hit").expect("dispatch");
    assert_eq!(response.text(), Some("handler body"));
}

#[test]
fn handlers_can_render_views_through_the_app_renderer() {
    let dir = TempDir::new().expect("tempdir");
    write(dir.path(), "page.html", "rendered {{ n }}");

    let renderer = App::builder().view_dir(dir.path()).build().renderer();
    let out = renderer
        .render_with("page.html", &serde_json::json!({ "n": 3 }))
        .expect("render");
    assert_eq!(out, "rendered 3");
}
