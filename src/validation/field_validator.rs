//! Field validators for the sign-up inputs.
//!
//! Each validator is a pure function from the raw field text to the first
//! failing rule, or `None` when the value is acceptable.

use crate::types::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const OTP_LENGTH: usize = 5;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("name pattern is valid"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9 +\-()]+$").expect("phone pattern is valid"));

/// Full name: letters and spaces, at least two characters once trimmed
pub fn validate_name(value: &str) -> Option<ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::Required);
    }

    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return Some(ValidationError::TooShort);
    }

    if !NAME_REGEX.is_match(value) {
        return Some(ValidationError::InvalidCharacters);
    }

    None
}

/// Syntactic `local@domain.tld` check, no DNS lookups
pub fn validate_email(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required);
    }

    if !EMAIL_REGEX.is_match(value) {
        return Some(ValidationError::InvalidFormat);
    }

    None
}

/// Phone number made of digits and `+ - ( )` separators, with at least
/// [`MIN_PHONE_DIGITS`] digits
pub fn validate_phone(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::Required);
    }

    if !PHONE_REGEX.is_match(value) {
        return Some(ValidationError::InvalidCharacters);
    }

    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < MIN_PHONE_DIGITS {
        return Some(ValidationError::TooShort);
    }

    None
}

/// One-time code. Only the length is checked.
pub fn validate_otp(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::Required);
    }

    if value.chars().count() != OTP_LENGTH {
        return Some(ValidationError::WrongLength);
    }

    None
}
