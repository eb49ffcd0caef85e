//! Getting Started Example
//!
//! Walks through route registration, parameter capture, and the fallback
//! chain.
//!
//! Run with: cargo run --example getting_started -p waymark

use waymark::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("waymark getting started\n");

    // === Basic routes ===
    println!("1. Basic routes:");
    let app = App::builder()
        .route("/", |_params: &PathParams| "Hello, World!")
        .route("/health", |_params: &PathParams| {
            Json(serde_json::json!({ "status": "healthy" }))
        })
        .build();

    let response = app.dispatch("/").unwrap();
    println!("   GET / -> {} ({})", response.status(), response.text().unwrap_or(""));
    assert_eq!(response.text(), Some("Hello, World!"));

    let response = app.dispatch("/health").unwrap();
    println!("   GET /health -> {} ({})", response.status(), response.text().unwrap_or(""));
    assert_eq!(response.status(), StatusCode::OK);

    // === Path parameters ===
    println!("\n2. Path parameters:");
    let app = App::builder()
        .route("/users/:id", |params: &PathParams| {
            format!("user #{}", params.get(0).unwrap_or("?"))
        })
        .build();

    let response = app.dispatch("/users/42?tab=posts").unwrap();
    println!("   GET /users/42?tab=posts -> {}", response.text().unwrap_or(""));
    assert_eq!(response.text(), Some("user #42"));

    // === Fallback chain ===
    println!("\n3. Fallback chain:");
    let app = App::builder()
        .route("/", |_params: &PathParams| "home")
        .auto_map(AutoMap::custom(|path: &str| {
            Html(format!("<p>auto-mapped {path}</p>"))
        }))
        .build();

    let response = app.dispatch("/pages/anything").unwrap();
    println!("   GET /pages/anything -> {}", response.text().unwrap_or(""));
    assert_eq!(response.text(), Some("<p>auto-mapped /pages/anything</p>"));

    // === Not-found handler ===
    println!("\n4. Not-found handler:");
    let app = App::builder()
        .route("/", |_params: &PathParams| "home")
        .not_found(|path: &str| format!("nothing at {path}"))
        .build();

    let response = app.dispatch("/nonexistent").unwrap();
    println!("   GET /nonexistent -> {}", response.status());
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    println!("\nAll getting started examples validated successfully!");
}
