//! Registration Data Transfer Objects
//!
//! Records handed back to the UI when a sign-up is accepted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Accepted sign-up. The password is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Registration {
    /// Registration from the single-page form
    pub fn from_form(name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.trim().to_string()),
            email: email.trim().to_string(),
            phone: Some(phone.trim().to_string()),
            submitted_at: Utc::now(),
        }
    }

    /// Registration from the wizard, which only collects an email
    pub fn from_wizard(email: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
            email: email.trim().to_string(),
            phone: None,
            submitted_at: Utc::now(),
        }
    }
}
