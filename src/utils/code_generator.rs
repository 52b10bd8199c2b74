//! Shortcode generation and validation.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};

/// Length of generated shortcodes.
const GENERATED_CODE_LENGTH: usize = 6;

/// Length bounds for custom shortcodes.
const MIN_CODE_LENGTH: usize = 3;
const MAX_CODE_LENGTH: usize = 10;

/// Generates a pseudo-random alphanumeric shortcode.
///
/// Uniqueness is not guaranteed here; callers retry on collision when
/// claiming the code in the registry.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-supplied custom shortcode.
///
/// # Rules
///
/// - Length: 3-10 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    let valid = (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric());

    if valid {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Invalid shortcode format (3-10 alphanumeric chars)",
        ))
    }
}
