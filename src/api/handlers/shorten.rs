//! Handler for short URL registration.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::infrastructure::telemetry::LogEntry;
use crate::state::AppState;

/// Registers a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, days
///   "shortcode": "abcd1"     // optional, 3-10 alphanumeric
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/abcd1",
///   "expiry": "2026-09-05T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 with a distinct message for an invalid URL, an invalid custom
/// shortcode, or a shortcode collision.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    match state
        .shortener
        .create_short_url(payload.url.clone(), payload.validity, payload.shortcode)
        .await
    {
        Ok(record) => {
            state.telemetry.emit(
                LogEntry::info("route", "Short URL created successfully").with_meta(json!({
                    "shortcode": record.shortcode,
                    "originalUrl": record.original_url,
                })),
            );

            let short_link = state
                .shortener
                .short_link(&state.base_url, &record.shortcode);

            Ok(Json(ShortenResponse {
                short_link,
                expiry: record.expires_at,
            }))
        }
        Err(err) => {
            state.telemetry.emit(
                LogEntry::error("route", err.to_string()).with_meta(json!({ "url": payload.url })),
            );
            Err(err)
        }
    }
}
