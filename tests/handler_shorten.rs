mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use shorturl::api::handlers::shorten_handler;

fn test_server() -> TestServer {
    let (state, _registry) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn shortcode_of(short_link: &str) -> &str {
    short_link.rsplit('/').next().unwrap()
}

#[tokio::test]
async fn test_shorten_success() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let short_link = body["shortLink"].as_str().unwrap();

    assert!(short_link.starts_with(common::TEST_BASE_URL));

    let code = shortcode_of(short_link);
    assert!((3..=10).contains(&code.len()));
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_default_expiry_is_thirty_days() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let expiry: DateTime<Utc> = body["expiry"].as_str().unwrap().parse().unwrap();
    let days = (expiry - Utc::now()).num_days();

    assert!((29..=30).contains(&days), "expiry was {} days out", days);
}

#[tokio::test]
async fn test_shorten_explicit_validity() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 1 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let expiry: DateTime<Utc> = body["expiry"].as_str().unwrap().parse().unwrap();
    let hours = (expiry - Utc::now()).num_hours();

    assert!((23..=24).contains(&hours), "expiry was {} hours out", hours);
}

#[tokio::test]
async fn test_shorten_with_custom_shortcode() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "abc" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let short_link = body["shortLink"].as_str().unwrap();

    assert!(short_link.ends_with("/abc"));
}

#[tokio::test]
async fn test_shorten_duplicate_shortcode_conflicts() {
    let server = test_server();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://one.example.com", "shortcode": "abc" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://two.example.com", "shortcode": "abc" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Shortcode already exists");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid URL provided");
}

#[tokio::test]
async fn test_shorten_invalid_shortcode_format() {
    let server = test_server();

    for bad_code in ["ab", "elevenchars", "with-dash", "with space"] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "https://example.com", "shortcode": bad_code }))
            .await;

        response.assert_status_bad_request();

        let body = response.json::<serde_json::Value>();
        assert_eq!(
            body["error"], "Invalid shortcode format (3-10 alphanumeric chars)",
            "shortcode {:?} should be rejected",
            bad_code
        );
    }
}

#[tokio::test]
async fn test_shorten_zero_validity_falls_back_to_default() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 0 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let expiry: DateTime<Utc> = body["expiry"].as_str().unwrap().parse().unwrap();
    let days = (expiry - Utc::now()).num_days();

    assert!((29..=30).contains(&days));
}

#[tokio::test]
async fn test_generated_codes_differ_across_requests() {
    let server = test_server();
    let mut codes = std::collections::HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        codes.insert(shortcode_of(body["shortLink"].as_str().unwrap()).to_string());
    }

    assert_eq!(codes.len(), 20);
}
