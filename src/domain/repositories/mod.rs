//! Registry trait definitions for the domain layer.
//!
//! The trait defines the contract for record storage; the concrete in-memory
//! implementation lives in `crate::infrastructure::registry`. A mock
//! implementation is auto-generated via `mockall` for unit tests.

pub mod url_registry;

pub use url_registry::UrlRegistry;

#[cfg(test)]
pub use url_registry::MockUrlRegistry;
