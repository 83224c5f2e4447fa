pub mod code_sender;
pub mod dto;
pub mod form;
pub mod wizard;

pub use code_sender::{CodeSender, LogCodeSender};
pub use dto::Registration;
pub use form::{SignupForm, TouchedFields, FORM_FIELDS};
pub use wizard::{SignupWizard, SocialProvider, StepOutcome, WizardStep};
