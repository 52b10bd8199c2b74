//! Registry trait for short URL storage.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;

/// Single source of truth for shortcode → record mappings over the process
/// lifetime.
///
/// Mutating operations are atomic per key: concurrent click increments on the
/// same shortcode are all reflected, and two records can never share a key.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::InMemoryUrlRegistry`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Atomically checks for and inserts a new record.
    ///
    /// Check and insert happen under one exclusive section, so a racing
    /// insert for the same shortcode observes the conflict instead of
    /// overwriting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the shortcode is already taken.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Exact lookup by shortcode. Case-sensitive, no normalization.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Adds one click to a record. Silently does nothing for unknown codes.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// All records in insertion order. Administrative/debug use only.
    async fn list_all(&self) -> Result<Vec<ShortUrl>, AppError>;
}
