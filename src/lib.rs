//! Simbld Sign-up
//!
//! Framework-free core of the sign-up screens: field validators, password
//! policies and strength scoring, the single-page form state and the
//! three-step wizard. Rendering is left to the caller.

pub mod config;
pub mod registration;
pub mod types;
pub mod validation;

// Re-export commonly used types and functions
pub use crate::config::{init_logging, load_config, SignupConfig};
pub use registration::{
    CodeSender, LogCodeSender, Registration, SignupForm, SignupWizard, SocialProvider,
    StepOutcome, WizardStep,
};
pub use types::{ConfigError, Field, FieldErrors, SubmissionError, ValidationError, WizardError};
pub use validation::{
    score_password_strength, validate_email, validate_name, validate_otp, validate_password,
    validate_phone, PasswordPolicy, PasswordStrength,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "simbld-signup";
