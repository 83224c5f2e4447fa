//! Pure field validators and password scoring

pub mod field_validator;
pub mod password;

pub use field_validator::{validate_email, validate_name, validate_otp, validate_phone};
pub use password::{
    estimate_strength, password_requirements, score_password_strength, validate_password,
    PasswordPolicy, PasswordRequirements, PasswordStrength, Requirement, StrengthScore,
};

use crate::types::{Field, ValidationError};

/// Dispatch to the validator for `field`
pub fn validate_field(field: Field, value: &str, policy: PasswordPolicy) -> Option<ValidationError> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::Password => validate_password(value, policy),
        Field::Otp => validate_otp(value),
    }
}
