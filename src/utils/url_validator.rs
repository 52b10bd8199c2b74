//! Validation for original URLs submitted to the service.

use crate::error::AppError;
use url::Url;

/// Validates that the input parses as an absolute http(s) URL with a host.
///
/// No normalization is performed; the URL is stored exactly as submitted.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed input, non-HTTP(S) schemes,
/// and URLs without a host.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    let parsed = Url::parse(input).map_err(|_| AppError::bad_request("Invalid URL provided"))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(AppError::bad_request("Invalid URL provided"));
    }

    Ok(())
}
