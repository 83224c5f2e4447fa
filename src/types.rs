//! Type definitions for simbld_signup
//!
//! Contains the shared field identifiers, the validation error taxonomy and
//! the error types returned by the form, the wizard and the config loader.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Input fields known to the sign-up flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    Otp,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone"),
            Field::Password => write!(f, "password"),
            Field::Otp => write!(f, "otp"),
        }
    }
}

/// Reason a single field value was rejected.
///
/// The messages are English defaults; a UI is free to render its own text
/// from the variant or from [`ValidationError::error_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Value is too short")]
    TooShort,

    /// Reserved; no field enforces a maximum length.
    #[error("Value is too long")]
    TooLong,

    #[error("Invalid format")]
    InvalidFormat,

    #[error("Value contains invalid characters")]
    InvalidCharacters,

    #[error("Value has the wrong length")]
    WrongLength,

    #[error("Must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("Must contain at least one number")]
    MissingDigit,

    #[error("Must contain at least one special character (!@#$%^&*)")]
    MissingSymbol,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Required => "REQUIRED",
            ValidationError::TooShort => "TOO_SHORT",
            ValidationError::TooLong => "TOO_LONG",
            ValidationError::InvalidFormat => "INVALID_FORMAT",
            ValidationError::InvalidCharacters => "INVALID_CHARACTERS",
            ValidationError::WrongLength => "WRONG_LENGTH",
            ValidationError::MissingUppercase => "MISSING_UPPERCASE",
            ValidationError::MissingLowercase => "MISSING_LOWERCASE",
            ValidationError::MissingDigit => "MISSING_DIGIT",
            ValidationError::MissingSymbol => "MISSING_SYMBOL",
        }
    }
}

/// At most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` for `field`, removing any previous entry when valid
    pub fn record(&mut self, field: Field, result: Option<ValidationError>) {
        match result {
            Some(error) => {
                self.0.insert(field, error);
            },
            None => {
                self.0.remove(&field);
            },
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> =
            self.iter().map(|(field, error)| format!("{}: {}", field, error)).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Errors returned when submitting a form or the last wizard step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(FieldErrors),

    #[error("Form has already been submitted")]
    AlreadySubmitted,

    #[error("Field not supported by this form: {0}")]
    UnsupportedField(Field),
}

impl SubmissionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SubmissionError::Rejected(_) => "SUBMISSION_REJECTED",
            SubmissionError::AlreadySubmitted => "ALREADY_SUBMITTED",
            SubmissionError::UnsupportedField(_) => "UNSUPPORTED_FIELD",
        }
    }

    /// Field errors carried by a rejected submission
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SubmissionError::Rejected(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Wizard actions that are not valid in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Action not available at step {0}")]
    WrongStep(u8),

    #[error("Sign in with {0} is not available")]
    ProviderUnavailable(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {message}")]
    Invalid {
        message: String,
    },

    #[error("Logger initialization failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
