//! Handlers for stats lookups.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::stats::{StatsListItem, StatsResponse};
use crate::error::AppError;
use crate::infrastructure::telemetry::LogEntry;
use crate::state::AppState;

/// Returns statistics for one shortcode. Does not count a click.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "expiry": "2026-09-05T12:00:00Z",
///   "clicks": 4,
///   "createdAt": "2026-08-06T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 for unknown codes and 410 for expired ones.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    match state.shortener.stats(&code).await {
        Ok(record) => {
            state.telemetry.emit(
                LogEntry::info("route", "Short URL stats retrieved")
                    .with_meta(json!({ "code": code })),
            );
            Ok(Json(record.into()))
        }
        Err(err) => {
            state
                .telemetry
                .emit(LogEntry::error("route", err.to_string()).with_meta(json!({ "code": code })));
            Err(err)
        }
    }
}

/// Lists every registered record in insertion order.
///
/// Administrative/debug surface; not part of the redirect contract.
///
/// # Endpoint
///
/// `GET /shorturls`
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatsListItem>>, AppError> {
    let records = state.shortener.list_stats().await?;

    Ok(Json(records.into_iter().map(StatsListItem::from).collect()))
}
