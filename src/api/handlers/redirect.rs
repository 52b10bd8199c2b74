//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::telemetry::LogEntry;
use crate::state::AppState;

/// Browsers request this alongside every visit; it must never reach the
/// registry.
const FAVICON_CODE: &str = "favicon.ico";

/// Redirects a shortcode to its original URL, counting the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 for unknown codes and 410 for expired ones.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if code == FAVICON_CODE {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    match state.shortener.resolve(&code).await {
        Ok(original_url) => {
            state.telemetry.emit(
                LogEntry::info("route", "Redirecting to original URL").with_meta(json!({
                    "code": code,
                    "originalUrl": original_url,
                })),
            );

            Ok(Redirect::temporary(&original_url).into_response())
        }
        Err(err) => {
            state
                .telemetry
                .emit(LogEntry::error("route", err.to_string()).with_meta(json!({ "code": code })));
            Err(err)
        }
    }
}
