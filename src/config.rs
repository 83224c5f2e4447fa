//! Configuration management for simbld_signup
//!
//! Loads the password policy of each sign-up variant and the log level from
//! `SIGNUP_*` environment variables (a `.env` file is honoured), falling back
//! to the defaults below.

use crate::registration::{CodeSender, SignupForm, SignupWizard};
use crate::types::ConfigError;
use crate::validation::PasswordPolicy;
use config::{Config, Environment};
use log::LevelFilter;
use serde::Deserialize;

/// Complete sign-up configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupConfig {
    /// Policy of the single-page form
    pub form_policy: PasswordPolicy,
    /// Policy of the step-by-step wizard
    pub wizard_policy: PasswordPolicy,
    pub log_level: String,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            form_policy: PasswordPolicy::Strict,
            wizard_policy: PasswordPolicy::Relaxed,
            log_level: "info".to_string(),
        }
    }
}

impl SignupConfig {
    pub fn signup_form(&self) -> SignupForm {
        SignupForm::new(self.form_policy)
    }

    pub fn signup_wizard<S: CodeSender>(&self, sender: S) -> SignupWizard<S> {
        SignupWizard::with_policy(sender, self.wizard_policy)
    }
}

/// Load configuration from `.env` and the process environment
pub fn load_config() -> Result<SignupConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from(Environment::with_prefix("SIGNUP"))
}

/// Load configuration from the given environment source
pub fn load_config_from(environment: Environment) -> Result<SignupConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("form_policy", "strict")?
        .set_default("wizard_policy", "relaxed")?
        .set_default("log_level", "info")?
        .add_source(environment)
        .build()?;

    let config: SignupConfig = settings.try_deserialize()?;
    validate_config(&config)?;
    Ok(config)
}

fn parse_log_level(level: &str) -> Result<LevelFilter, ConfigError> {
    level.parse::<LevelFilter>().map_err(|_| ConfigError::Invalid {
        message: format!("Unknown log level: {}", level),
    })
}

/// Validate configuration values
fn validate_config(config: &SignupConfig) -> Result<(), ConfigError> {
    parse_log_level(&config.log_level)?;
    Ok(())
}

/// Install the global logger at the configured level
pub fn init_logging(config: &SignupConfig) -> Result<(), ConfigError> {
    let level = parse_log_level(&config.log_level)?;
    env_logger::Builder::new().filter_level(level).try_init()?;
    Ok(())
}
