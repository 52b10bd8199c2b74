//! Shared application state threaded through all handlers.

use std::sync::Arc;

use crate::application::services::ShortUrlService;
use crate::infrastructure::registry::InMemoryUrlRegistry;
use crate::infrastructure::telemetry::LogSink;

/// Process-wide state, constructed once at startup.
///
/// Owns the shortener service (which in turn owns the registry), the
/// telemetry sink, and the base URL short links are built from. Handlers
/// receive it via Axum state injection; nothing else holds a reference that
/// outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortUrlService<InMemoryUrlRegistry>>,
    pub telemetry: Arc<dyn LogSink>,
    pub base_url: String,
}
