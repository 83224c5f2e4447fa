//! Password validation utilities.
//!
//! Enforces the requirements of a [`PasswordPolicy`]:
//! - Minimum length
//! - Character class requirements (case classes only under the strict policy)

use super::{PasswordPolicy, Requirement};
use crate::types::ValidationError;

/// Validates a password against the policy requirements
///
/// Returns the first failing requirement, checked in policy order
pub fn validate_password(password: &str, policy: PasswordPolicy) -> Option<ValidationError> {
  if password.is_empty() {
    return Some(ValidationError::Required);
  }

  policy
      .requirements()
      .iter()
      .find(|requirement| !requirement.is_met(password))
      .map(|requirement| missing_error(*requirement))
}

fn missing_error(requirement: Requirement) -> ValidationError {
  match requirement {
    Requirement::Length => ValidationError::TooShort,
    Requirement::Uppercase => ValidationError::MissingUppercase,
    Requirement::Lowercase => ValidationError::MissingLowercase,
    Requirement::Digit => ValidationError::MissingDigit,
    Requirement::Symbol => ValidationError::MissingSymbol,
  }
}

/// Get detailed validation results for a password
///
/// Every flag is evaluated independently, whatever the policy
pub fn password_requirements(password: &str) -> PasswordRequirements {
  PasswordRequirements {
    meets_length: Requirement::Length.is_met(password),
    has_uppercase: Requirement::Uppercase.is_met(password),
    has_lowercase: Requirement::Lowercase.is_met(password),
    has_digit: Requirement::Digit.is_met(password),
    has_symbol: Requirement::Symbol.is_met(password),
  }
}

/// Detailed password validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PasswordRequirements {
  pub meets_length: bool,
  pub has_uppercase: bool,
  pub has_lowercase: bool,
  pub has_digit: bool,
  pub has_symbol: bool,
}

impl PasswordRequirements {
  pub fn is_met(&self, requirement: Requirement) -> bool {
    match requirement {
      Requirement::Length => self.meets_length,
      Requirement::Uppercase => self.has_uppercase,
      Requirement::Lowercase => self.has_lowercase,
      Requirement::Digit => self.has_digit,
      Requirement::Symbol => self.has_symbol,
    }
  }

  /// Check if all requirements of the policy are met
  pub fn is_valid(&self, policy: PasswordPolicy) -> bool {
    policy.requirements().iter().all(|requirement| self.is_met(*requirement))
  }

  /// Checklist rows for the requirements the policy enforces
  pub fn checklist(&self, policy: PasswordPolicy) -> Vec<(Requirement, bool)> {
    policy.requirements().iter().map(|requirement| (*requirement, self.is_met(*requirement))).collect()
  }
}
