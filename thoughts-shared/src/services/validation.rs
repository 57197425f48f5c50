//! Input validation run before any store access.
//!
//! These checks mirror the database constraints (message length, lower-case
//! email) so invalid input is rejected with a readable message instead of a
//! constraint violation.

use uuid::Uuid;

use super::error::{ServiceError, ServiceResult};

/// Minimum thought length after trimming, in characters
pub const MIN_MESSAGE_LENGTH: usize = 5;

/// Maximum thought length after trimming, in characters
pub const MAX_MESSAGE_LENGTH: usize = 140;

/// Trims a thought message and checks its length.
///
/// ```
/// use thoughts_shared::services::validation::validate_message;
///
/// assert_eq!(validate_message("  hello world  ").unwrap(), "hello world");
/// assert!(validate_message("hey").is_err());
/// ```
pub fn validate_message(raw: &str) -> ServiceResult<String> {
    let message = raw.trim();
    let length = message.chars().count();

    if length == 0 {
        return Err(ServiceError::Validation("A message is required".to_string()));
    }
    if length < MIN_MESSAGE_LENGTH {
        return Err(ServiceError::Validation(format!(
            "A message must be at least {} characters",
            MIN_MESSAGE_LENGTH
        )));
    }
    if length > MAX_MESSAGE_LENGTH {
        return Err(ServiceError::Validation(format!(
            "A message cannot exceed {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }

    Ok(message.to_string())
}

/// Trims and lower-cases an email address.
pub fn normalize_email(raw: &str) -> ServiceResult<String> {
    let email = raw.trim().to_lowercase();

    if email.is_empty() {
        return Err(ServiceError::Validation("Email is required".to_string()));
    }

    Ok(email)
}

/// Parses a thought identifier.
pub fn parse_thought_id(raw: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::InvalidId)
}

/// Coerces the `hearts` query value into a minimum hearts filter.
///
/// Integers are used as-is, decimals round up (hearts are whole numbers),
/// and anything empty, non-numeric or non-finite yields `None`, i.e. no
/// filter.
pub fn parse_min_hearts(raw: Option<&str>) -> Option<i32> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(value) = raw.parse::<i32>() {
        return Some(value);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            Some(value.ceil().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
        }
        _ => None,
    }
}
