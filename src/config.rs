//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base used to build short links
//!   (default: `http://localhost:3000`)
//! - `DEFAULT_VALIDITY_DAYS` - Validity window when the request carries none
//!   (default: 30)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ## Telemetry (optional)
//!
//! Setting `TELEMETRY_LOG_URL` enables the remote log sink and requires:
//!
//! - `TELEMETRY_AUTH_URL`
//! - `TELEMETRY_EMAIL`, `TELEMETRY_NAME`, `TELEMETRY_ROLL_NO`
//! - `TELEMETRY_ACCESS_CODE`, `TELEMETRY_CLIENT_ID`, `TELEMETRY_CLIENT_SECRET`
//!
//! Without `TELEMETRY_LOG_URL` the service runs with a no-op sink.

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::telemetry::AuthCredentials;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL embedded in returned short links.
    pub base_url: String,
    /// Validity window (days) applied when a request carries none.
    pub default_validity_days: u32,
    pub log_level: String,
    pub log_format: String,
    /// Remote telemetry sink settings; `None` disables the sink.
    pub telemetry: Option<TelemetryConfig>,
}

/// Settings for the remote telemetry sink.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_url: String,
    pub auth_url: String,
    pub credentials: AuthCredentials,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if telemetry is enabled but incompletely configured.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_validity_days = env::var("DEFAULT_VALIDITY_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let telemetry = Self::load_telemetry().context("Failed to load telemetry configuration")?;

        Ok(Self {
            listen_addr,
            base_url,
            default_validity_days,
            log_level,
            log_format,
            telemetry,
        })
    }

    /// Loads telemetry settings; `TELEMETRY_LOG_URL` is the on/off switch.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink is enabled but any of the auth
    /// variables are missing.
    fn load_telemetry() -> Result<Option<TelemetryConfig>> {
        let Ok(log_url) = env::var("TELEMETRY_LOG_URL") else {
            return Ok(None);
        };

        let auth_url = env::var("TELEMETRY_AUTH_URL")
            .context("TELEMETRY_AUTH_URL must be set when TELEMETRY_LOG_URL is set")?;

        let credentials = AuthCredentials {
            email: env::var("TELEMETRY_EMAIL").context("TELEMETRY_EMAIL must be set")?,
            name: env::var("TELEMETRY_NAME").context("TELEMETRY_NAME must be set")?,
            roll_no: env::var("TELEMETRY_ROLL_NO").context("TELEMETRY_ROLL_NO must be set")?,
            access_code: env::var("TELEMETRY_ACCESS_CODE")
                .context("TELEMETRY_ACCESS_CODE must be set")?,
            client_id: env::var("TELEMETRY_CLIENT_ID")
                .context("TELEMETRY_CLIENT_ID must be set")?,
            client_secret: env::var("TELEMETRY_CLIENT_SECRET")
                .context("TELEMETRY_CLIENT_SECRET must be set")?,
        };

        Ok(Some(TelemetryConfig {
            log_url,
            auth_url,
            credentials,
        }))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an absolute http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `default_validity_days` is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.default_validity_days == 0 || self.default_validity_days > 3650 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_DAYS must be between 1 and 3650, got {}",
                self.default_validity_days
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without credentials).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Default validity: {} days", self.default_validity_days);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if let Some(ref telemetry) = self.telemetry {
            tracing::info!("  Telemetry: {} (enabled)", telemetry.log_url);
        } else {
            tracing::info!("  Telemetry: disabled");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g., via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
