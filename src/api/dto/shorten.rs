//! DTOs for the registration endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to register a short URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    pub url: String,

    /// Validity window in days. Missing or zero falls back to the configured
    /// default.
    pub validity: Option<u32>,

    /// Optional custom shortcode (3-10 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Successful registration response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
