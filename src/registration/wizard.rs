//! Three-step sign-up wizard: email, then one-time code, then password.
//!
//! Unlike the single-page form, a step is only validated when the user asks
//! to continue. A failed continue leaves the step where it is and reports
//! the error for that step's field alone.

use crate::registration::code_sender::{CodeSender, LogCodeSender};
use crate::registration::dto::Registration;
use crate::types::{Field, FieldErrors, SubmissionError, ValidationError, WizardError};
use crate::validation::{
    estimate_strength, password_requirements, validate_field, PasswordPolicy, Requirement,
    StrengthScore,
};
use log::{debug, info, warn};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WizardStep {
    EmailEntry,
    OtpEntry,
    PasswordEntry,
}

impl WizardStep {
    /// 1-based position shown in the progress indicator
    pub fn number(self) -> u8 {
        match self {
            WizardStep::EmailEntry => 1,
            WizardStep::OtpEntry => 2,
            WizardStep::PasswordEntry => 3,
        }
    }

    /// Field validated when continuing from this step
    pub fn field(self) -> Field {
        match self {
            WizardStep::EmailEntry => Field::Email,
            WizardStep::OtpEntry => Field::Otp,
            WizardStep::PasswordEntry => Field::Password,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::EmailEntry => None,
            WizardStep::OtpEntry => Some(WizardStep::EmailEntry),
            WizardStep::PasswordEntry => Some(WizardStep::OtpEntry),
        }
    }
}

/// Result of a successful continue
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Advanced(WizardStep),
    Submitted(Registration),
}

/// Social sign-in buttons offered next to the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
    Facebook,
    Microsoft,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocialProvider::Google => write!(f, "Google"),
            SocialProvider::Github => write!(f, "GitHub"),
            SocialProvider::Facebook => write!(f, "Facebook"),
            SocialProvider::Microsoft => write!(f, "Microsoft"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupWizard<S = LogCodeSender> {
    step: WizardStep,
    email: String,
    otp: String,
    password: String,
    errors: FieldErrors,
    policy: PasswordPolicy,
    sender: S,
    submitted: Option<Registration>,
}

impl Default for SignupWizard<LogCodeSender> {
    fn default() -> Self {
        Self::new(LogCodeSender)
    }
}

impl<S: CodeSender> SignupWizard<S> {
    /// Wizard using the relaxed password policy
    pub fn new(sender: S) -> Self {
        Self::with_policy(sender, PasswordPolicy::Relaxed)
    }

    pub fn with_policy(sender: S, policy: PasswordPolicy) -> Self {
        Self {
            step: WizardStep::EmailEntry,
            email: String::new(),
            otp: String::new(),
            password: String::new(),
            errors: FieldErrors::new(),
            policy,
            sender,
            submitted: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn policy(&self) -> PasswordPolicy {
        self.policy
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::Otp => Some(&self.otp),
            Field::Password => Some(&self.password),
            Field::Name | Field::Phone => None,
        }
    }

    /// Store a keystroke. Errors stay as they are until the next continue.
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) -> Result<(), SubmissionError> {
        if self.submitted.is_some() {
            return Err(SubmissionError::AlreadySubmitted);
        }
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Otp => &mut self.otp,
            Field::Password => &mut self.password,
            Field::Name | Field::Phone => return Err(SubmissionError::UnsupportedField(field)),
        };
        *slot = value.into();
        Ok(())
    }

    /// Validate the current step and move forward if it passes
    pub fn continue_step(&mut self) -> Result<StepOutcome, SubmissionError> {
        if self.submitted.is_some() {
            return Err(SubmissionError::AlreadySubmitted);
        }

        let field = self.step.field();
        let result = validate_field(field, self.value(field).unwrap_or_default(), self.policy);
        self.errors.clear();
        if let Some(error) = result {
            self.errors.record(field, Some(error));
            warn!("Step {} rejected: {}: {}", self.step.number(), field, error);
            return Err(SubmissionError::Rejected(self.errors.clone()));
        }

        match self.step {
            WizardStep::EmailEntry => {
                self.sender.send_code(&self.email);
                self.advance(WizardStep::OtpEntry)
            },
            WizardStep::OtpEntry => self.advance(WizardStep::PasswordEntry),
            WizardStep::PasswordEntry => {
                let registration = Registration::from_wizard(&self.email);
                info!("Sign-up accepted for {} ({})", registration.email, registration.id);
                self.submitted = Some(registration.clone());
                Ok(StepOutcome::Submitted(registration))
            },
        }
    }

    fn advance(&mut self, next: WizardStep) -> Result<StepOutcome, SubmissionError> {
        info!("Wizard step {} -> {}", self.step.number(), next.number());
        self.step = next;
        Ok(StepOutcome::Advanced(next))
    }

    /// Go back one step, keeping every entered value. No-op once submitted.
    pub fn back(&mut self) -> WizardStep {
        if self.submitted.is_some() {
            return self.step;
        }
        if let Some(previous) = self.step.previous() {
            debug!("Wizard back {} -> {}", self.step.number(), previous.number());
            self.step = previous;
            self.errors.clear();
        }
        self.step
    }

    /// "Wrong email?" link on the code step; the entered code is discarded
    pub fn wrong_email(&mut self) -> Result<(), WizardError> {
        self.require_code_step()?;
        self.otp.clear();
        self.errors.clear();
        self.step = WizardStep::EmailEntry;
        Ok(())
    }

    pub fn resend_code(&mut self) -> Result<(), WizardError> {
        self.require_code_step()?;
        self.sender.send_code(&self.email);
        Ok(())
    }

    fn require_code_step(&self) -> Result<(), WizardError> {
        if self.submitted.is_some() || self.step != WizardStep::OtpEntry {
            return Err(WizardError::WrongStep(self.step.number()));
        }
        Ok(())
    }

    /// Social sign-in is not wired to any provider
    pub fn social_sign_in(&self, provider: SocialProvider) -> Result<(), WizardError> {
        warn!("Sign in with {} requested but no provider is configured", provider);
        Err(WizardError::ProviderUnavailable(provider.to_string()))
    }

    /// Start over from the email step with everything cleared
    pub fn restart(&mut self) {
        self.step = WizardStep::EmailEntry;
        self.email.clear();
        self.otp.clear();
        self.password.clear();
        self.errors.clear();
        self.submitted = None;
    }

    pub fn strength(&self) -> StrengthScore {
        estimate_strength(&self.password, self.policy)
    }

    pub fn password_checklist(&self) -> Vec<(Requirement, bool)> {
        password_requirements(&self.password).checklist(self.policy)
    }

    pub fn submission(&self) -> Option<&Registration> {
        self.submitted.as_ref()
    }
}
