//! Short code generation, validation and normalization.
//!
//! Codes are case-insensitive, so everything is kept in lowercase: generated
//! codes use only `[a-z0-9]` and user-chosen codes are lowercased before
//! validation and lookup.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of randomly generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Alphabet for generated codes.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

const MIN_CUSTOM_LENGTH: usize = 3;
const MAX_CUSTOM_LENGTH: usize = 32;

/// Generates a random code of [`GENERATED_CODE_LENGTH`] characters.
///
/// Uniqueness is not guaranteed; callers retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Canonical form of a code as received on a path.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}

/// Validates a user-chosen code, already normalized.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CUSTOM_LENGTH || code.len() > MAX_CUSTOM_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 3-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
