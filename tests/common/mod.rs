#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use shorturl::application::services::ShortUrlService;
use shorturl::domain::entities::NewShortUrl;
use shorturl::domain::repositories::UrlRegistry;
use shorturl::infrastructure::registry::InMemoryUrlRegistry;
use shorturl::infrastructure::telemetry::NullSink;
use shorturl::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Builds application state over a fresh in-memory registry.
///
/// The registry handle is returned alongside so tests can seed records
/// directly (e.g., already-expired ones).
pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRegistry>) {
    let registry = Arc::new(InMemoryUrlRegistry::new());
    let shortener = Arc::new(ShortUrlService::new(registry.clone(), 30));

    let state = AppState {
        shortener,
        telemetry: Arc::new(NullSink),
        base_url: TEST_BASE_URL.to_string(),
    };

    (state, registry)
}

pub async fn create_test_record(registry: &InMemoryUrlRegistry, code: &str, url: &str) {
    registry
        .insert(NewShortUrl {
            shortcode: code.to_string(),
            original_url: url.to_string(),
            expires_at: Utc::now() + Duration::days(30),
        })
        .await
        .unwrap();
}

pub async fn create_expired_record(registry: &InMemoryUrlRegistry, code: &str, url: &str) {
    registry
        .insert(NewShortUrl {
            shortcode: code.to_string(),
            original_url: url.to_string(),
            expires_at: Utc::now() - Duration::hours(1),
        })
        .await
        .unwrap();
}
