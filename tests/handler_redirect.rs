mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::{redirect_handler, stats_handler};
use shorturl::domain::repositories::UrlRegistry;
use shorturl::infrastructure::registry::InMemoryUrlRegistry;
use std::sync::Arc;

fn test_server() -> (TestServer, Arc<InMemoryUrlRegistry>) {
    let (state, registry) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), registry)
}

#[tokio::test]
async fn test_redirect_to_original_url() {
    let (server, registry) = test_server();
    common::create_test_record(&registry, "abc", "https://example.com/landing").await;

    let response = server.get("/abc").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let (server, _registry) = test_server();

    let response = server.get("/ghost").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Short URL not found");
}

#[tokio::test]
async fn test_redirect_expired_code_is_gone() {
    let (server, registry) = test_server();
    common::create_expired_record(&registry, "old", "https://stale.example.com").await;

    let response = server.get("/old").await;

    response.assert_status(StatusCode::GONE);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Short URL has expired");
    // The stale target must not leak through headers either.
    assert!(response.maybe_header("location").is_none());
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (server, registry) = test_server();
    common::create_test_record(&registry, "abc", "https://example.com").await;

    for _ in 0..3 {
        server
            .get("/abc")
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let response = server.get("/shorturls/abc").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["clicks"], 3);
}

#[tokio::test]
async fn test_expired_code_never_counts_clicks() {
    let (server, registry) = test_server();
    common::create_expired_record(&registry, "old", "https://stale.example.com").await;

    server.get("/old").await.assert_status(StatusCode::GONE);

    let record = registry.find_by_code("old").await.unwrap().unwrap();
    assert_eq!(record.clicks, 0);
}

#[tokio::test]
async fn test_favicon_is_not_found_without_touching_registry() {
    let (server, registry) = test_server();

    let response = server.get("/favicon.ico").await;

    response.assert_status_not_found();
    assert!(registry.list_all().await.unwrap().is_empty());
    assert!(registry.find_by_code("favicon.ico").await.unwrap().is_none());
}
