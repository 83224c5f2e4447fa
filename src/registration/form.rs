//! Single-page sign-up form state.
//!
//! Only the raw values, the touched set and the accepted submission are
//! stored. Errors and the strength meter are derived from the values on
//! every read, so a field's error follows its value as soon as the field
//! has been touched.

use crate::registration::dto::Registration;
use crate::types::{Field, FieldErrors, SubmissionError, ValidationError};
use crate::validation::{
    estimate_strength, password_requirements, validate_field, PasswordPolicy,
    PasswordRequirements, StrengthScore,
};
use log::{debug, info, warn};
use std::collections::BTreeSet;

/// Fields rendered by the single-page form
pub const FORM_FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Password];

/// Fields the user has left at least once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedFields(BTreeSet<Field>);

impl TouchedFields {
    pub fn mark(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn mark_all(&mut self, fields: &[Field]) {
        self.0.extend(fields.iter().copied());
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, Default)]
struct FormValues {
    name: String,
    email: String,
    phone: String,
    password: String,
}

impl FormValues {
    fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Password => Some(&self.password),
            Field::Otp => None,
        }
    }

    fn slot(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Password => Some(&mut self.password),
            Field::Otp => None,
        }
    }
}

/// Name, email, phone and password form with continuous validation
#[derive(Debug, Clone)]
pub struct SignupForm {
    policy: PasswordPolicy,
    values: FormValues,
    touched: TouchedFields,
    submitted: Option<Registration>,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(PasswordPolicy::Strict)
    }
}

impl SignupForm {
    pub fn new(policy: PasswordPolicy) -> Self {
        Self {
            policy,
            values: FormValues::default(),
            touched: TouchedFields::default(),
            submitted: None,
        }
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        self.values.get(field)
    }

    /// Store a keystroke and return the field's error for the new value.
    ///
    /// Rejected once the form has been submitted, until [`SignupForm::reset`].
    pub fn set_value(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<Option<ValidationError>, SubmissionError> {
        if self.submitted.is_some() {
            return Err(SubmissionError::AlreadySubmitted);
        }
        let slot = self.values.slot(field).ok_or(SubmissionError::UnsupportedField(field))?;
        *slot = value.into();

        let error = self.error(field);
        debug!("Field {} changed, error: {:?}", field, error);
        Ok(error)
    }

    /// Mark the field as left by the user
    pub fn blur(&mut self, field: Field) -> Result<(), SubmissionError> {
        if !FORM_FIELDS.contains(&field) {
            return Err(SubmissionError::UnsupportedField(field));
        }
        self.touched.mark(field);
        Ok(())
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.is_touched(field)
    }

    /// Current error for the field, touched or not
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.values.get(field).and_then(|value| validate_field(field, value, self.policy))
    }

    /// Error to display: only shown once the field has been touched
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if self.touched.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FORM_FIELDS {
            errors.record(field, self.error(field));
        }
        errors
    }

    pub fn visible_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FORM_FIELDS {
            errors.record(field, self.visible_error(field));
        }
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn strength(&self) -> StrengthScore {
        estimate_strength(&self.values.password, self.policy)
    }

    pub fn password_requirements(&self) -> PasswordRequirements {
        password_requirements(&self.values.password)
    }

    /// Validate every field and accept the sign-up if none fails.
    ///
    /// All fields become touched whatever the outcome, so every error shows.
    pub fn submit(&mut self) -> Result<Registration, SubmissionError> {
        if self.submitted.is_some() {
            return Err(SubmissionError::AlreadySubmitted);
        }

        self.touched.mark_all(&FORM_FIELDS);

        let errors = self.errors();
        if !errors.is_empty() {
            warn!("Sign-up rejected with {} invalid field(s): {}", errors.len(), errors);
            return Err(SubmissionError::Rejected(errors));
        }

        let registration =
            Registration::from_form(&self.values.name, &self.values.email, &self.values.phone);
        info!("Sign-up accepted for {} ({})", registration.email, registration.id);

        self.submitted = Some(registration.clone());
        Ok(registration)
    }

    /// Accepted registration, shown on the success screen
    pub fn submission(&self) -> Option<&Registration> {
        self.submitted.as_ref()
    }

    /// Back to an empty, untouched form
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.submitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PasswordStrength;

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::default();
        form.set_value(Field::Name, "John Doe").unwrap();
        form.set_value(Field::Email, "john@example.com").unwrap();
        form.set_value(Field::Phone, "+1 (555) 123-4567").unwrap();
        form.set_value(Field::Password, "Abc12345!").unwrap();
        form
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = SignupForm::default();
        let error = form.set_value(Field::Name, "A").unwrap();
        assert_eq!(error, Some(ValidationError::TooShort));
        assert_eq!(form.visible_error(Field::Name), None);

        form.blur(Field::Name).unwrap();
        assert_eq!(form.visible_error(Field::Name), Some(ValidationError::TooShort));
    }

    #[test]
    fn test_error_follows_value_after_touch() {
        let mut form = SignupForm::default();
        form.blur(Field::Email).unwrap();
        assert_eq!(form.visible_error(Field::Email), Some(ValidationError::Required));

        form.set_value(Field::Email, "john@").unwrap();
        assert_eq!(form.visible_error(Field::Email), Some(ValidationError::InvalidFormat));

        form.set_value(Field::Email, "john@example.com").unwrap();
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn test_submit_empty_form_touches_everything() {
        let mut form = SignupForm::default();
        let err = form.submit().unwrap_err();

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 4);
        for field in FORM_FIELDS {
            assert!(form.is_touched(field));
            assert_eq!(errors.get(field), Some(ValidationError::Required));
        }
        assert_eq!(form.visible_errors(), form.errors());
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = filled_form();
        let registration = form.submit().unwrap();

        assert_eq!(registration.name.as_deref(), Some("John Doe"));
        assert_eq!(registration.email, "john@example.com");
        assert_eq!(form.submission(), Some(&registration));
        assert_eq!(form.submit(), Err(SubmissionError::AlreadySubmitted));
    }

    #[test]
    fn test_values_frozen_after_submit() {
        let mut form = filled_form();
        let registration = form.submit().unwrap();

        assert_eq!(
            form.set_value(Field::Email, "other@example.com"),
            Err(SubmissionError::AlreadySubmitted)
        );
        assert_eq!(form.value(Field::Email), Some("john@example.com"));
        assert_eq!(form.submission(), Some(&registration));
        assert!(form.errors().is_empty());

        form.reset();
        assert_eq!(form.set_value(Field::Email, "other@example.com"), Ok(None));
    }

    #[test]
    fn test_single_bad_field_rejects() {
        let mut form = filled_form();
        form.set_value(Field::Password, "abcdefgh").unwrap();

        let err = form.submit().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Password), Some(ValidationError::MissingUppercase));
    }

    #[test]
    fn test_strength_uses_form_policy() {
        let mut form = SignupForm::new(PasswordPolicy::Strict);
        form.set_value(Field::Password, "abcdefgh").unwrap();
        assert_eq!(form.strength().score, 40);
        assert_eq!(form.strength().strength, PasswordStrength::Medium);

        let mut relaxed = SignupForm::new(PasswordPolicy::Relaxed);
        relaxed.set_value(Field::Password, "abcdefgh").unwrap();
        assert_eq!(relaxed.error(Field::Password), Some(ValidationError::MissingDigit));
    }

    #[test]
    fn test_otp_not_part_of_form() {
        let mut form = SignupForm::default();
        assert_eq!(
            form.set_value(Field::Otp, "12345"),
            Err(SubmissionError::UnsupportedField(Field::Otp))
        );
        assert_eq!(form.blur(Field::Otp), Err(SubmissionError::UnsupportedField(Field::Otp)));
        assert_eq!(form.error(Field::Otp), None);
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.blur(Field::Name).unwrap();
        form.submit().unwrap();

        form.reset();
        assert_eq!(form.value(Field::Name), Some(""));
        assert!(!form.is_touched(Field::Name));
        assert!(form.submission().is_none());
        assert_eq!(form.visible_errors(), FieldErrors::new());
    }
}
