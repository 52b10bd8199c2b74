//! DTOs for stats endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Statistics for a single short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortUrl> for StatsResponse {
    fn from(record: ShortUrl) -> Self {
        Self {
            original_url: record.original_url,
            expiry: record.expires_at,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}

/// One row of the administrative listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsListItem {
    pub shortcode: String,
    pub original_url: String,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortUrl> for StatsListItem {
    fn from(record: ShortUrl) -> Self {
        Self {
            shortcode: record.shortcode,
            original_url: record.original_url,
            expiry: record.expires_at,
            clicks: record.clicks,
            created_at: record.created_at,
        }
    }
}
