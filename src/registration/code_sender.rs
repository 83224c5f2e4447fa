//! Delivery of one-time codes during the sign-up wizard.
//!
//! Real delivery lives outside this crate; the wizard only needs something
//! to call when a code has to go out.

use log::info;

/// Collaborator invoked when the wizard needs a code sent to an address
pub trait CodeSender {
    fn send_code(&mut self, email: &str);
}

/// Stub sender that only logs the request
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCodeSender;

impl CodeSender for LogCodeSender {
    fn send_code(&mut self, email: &str) {
        info!("Verification code requested for {}", email);
    }
}

impl<S: CodeSender + ?Sized> CodeSender for &mut S {
    fn send_code(&mut self, email: &str) {
        (**self).send_code(email);
    }
}
