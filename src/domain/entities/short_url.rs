//! Short URL entity representing a shortcode to URL mapping.

use chrono::{DateTime, Utc};

/// A registered short URL with click accounting.
///
/// `shortcode` is immutable once assigned and unique across the registry.
/// `expires_at` is fixed at creation and never mutated; `clicks` only ever
/// grows.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
}

impl ShortUrl {
    /// Returns true once wall-clock time is strictly past the expiry instant.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Input data for registering a new short URL.
///
/// The registry assigns `id` and `created_at` and starts the click counter
/// at zero on insert.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub shortcode: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}
