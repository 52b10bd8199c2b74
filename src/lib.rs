//! # shorturl
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the registry trait
//! - **Application Layer** ([`application`]) - Registration and resolution
//!   logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and
//!   the remote telemetry sink
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random or custom shortcodes with atomic collision handling
//! - Per-record validity windows with 410 Gone after expiry
//! - Click accounting on redirects
//! - Optional fire-and-forget remote telemetry with cached bearer tokens
//!
//! ## Quick Start
//!
//! ```bash
//! # All configuration is optional; see the config module for variables
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! State lives in process memory only: every restart begins with an empty
//! registry.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortUrlService;
    pub use crate::domain::entities::{NewShortUrl, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
