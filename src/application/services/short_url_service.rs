//! Short URL registration and resolution service.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRegistry;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Orchestrates registration, redirect resolution, and stats lookups against
/// the registry.
pub struct ShortUrlService<R: UrlRegistry> {
    registry: Arc<R>,
    default_validity_days: u32,
}

impl<R: UrlRegistry> ShortUrlService<R> {
    pub fn new(registry: Arc<R>, default_validity_days: u32) -> Self {
        Self {
            registry,
            default_validity_days,
        }
    }

    /// Registers a new short URL.
    ///
    /// A missing or zero `validity_days` falls back to the configured default
    /// window. Without a custom shortcode, generation retries until an unused
    /// code is claimed; each attempt is an atomic check-and-insert, so two
    /// racing registrations can never end up sharing a code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or custom code,
    /// and [`AppError::Conflict`] when the custom code is already taken.
    pub async fn create_short_url(
        &self,
        url: String,
        validity_days: Option<u32>,
        custom_code: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        validate_url(&url)?;

        let days = validity_days
            .filter(|&days| days > 0)
            .unwrap_or(self.default_validity_days);
        let expires_at = Utc::now() + Duration::days(i64::from(days));

        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            return self
                .registry
                .insert(NewShortUrl {
                    shortcode: code,
                    original_url: url,
                    expires_at,
                })
                .await;
        }

        loop {
            let code = generate_code();

            match self
                .registry
                .insert(NewShortUrl {
                    shortcode: code,
                    original_url: url.clone(),
                    expires_at,
                })
                .await
            {
                Ok(record) => return Ok(record),
                Err(AppError::Conflict(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolves a shortcode for redirect, counting the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] for codes past their validity window.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let record = self.lookup_active(code).await?;

        self.registry.increment_clicks(code).await?;

        Ok(record.original_url)
    }

    /// Returns the record behind a shortcode without counting a click.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::resolve`].
    pub async fn stats(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.lookup_active(code).await
    }

    /// All registered records in insertion order. Administrative use only.
    pub async fn list_stats(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.registry.list_all().await
    }

    /// Builds the public short link for a code.
    pub fn short_link(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    async fn lookup_active(&self, code: &str) -> Result<ShortUrl, AppError> {
        let record = self
            .registry
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        if record.is_expired() {
            return Err(AppError::expired("Short URL has expired"));
        }

        Ok(record)
    }
}
