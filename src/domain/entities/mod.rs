//! Core domain entities.

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
