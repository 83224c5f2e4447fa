//! Password policies.
//!
//! Two rule sets exist: `Strict`, used by the single-page sign-up form, and
//! `Relaxed`, used by the step-by-step wizard. They differ in which character
//! classes are required, in the strength weights and in the Medium/Strong
//! boundary, so each policy carries its own static rule table.

pub mod strength;
pub mod validator;

use serde::{Deserialize, Serialize};

pub use strength::{estimate_strength, score_password_strength, PasswordStrength, StrengthScore};
pub use validator::{password_requirements, validate_password, PasswordRequirements};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const LONG_PASSWORD_LENGTH: usize = 12;
pub const SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Which password rule set to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordPolicy {
    #[default]
    Strict,
    Relaxed,
}

/// A single password requirement, as shown in a checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Requirement {
    pub fn is_met(self, password: &str) -> bool {
        match self {
            Requirement::Length => password.chars().count() >= MIN_PASSWORD_LENGTH,
            Requirement::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Requirement::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Requirement::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Requirement::Symbol => password.chars().any(|c| SYMBOLS.contains(&c)),
        }
    }
}

/// One additive strength criterion
#[derive(Debug, Clone, Copy)]
pub(crate) enum ScoreRule {
    LengthAtLeast(usize),
    Has(Requirement),
}

impl ScoreRule {
    fn is_met(self, password: &str) -> bool {
        match self {
            ScoreRule::LengthAtLeast(min) => password.chars().count() >= min,
            ScoreRule::Has(requirement) => requirement.is_met(password),
        }
    }
}

pub(crate) struct PolicyRules {
    /// Checked in order after the emptiness check; first failure wins
    pub requirements: &'static [Requirement],
    pub weights: &'static [(ScoreRule, u8)],
    /// Scores below this are Weak
    pub weak_below: u8,
    /// Scores below this (and not Weak) are Medium
    pub medium_below: u8,
}

static STRICT_RULES: PolicyRules = PolicyRules {
    requirements: &[
        Requirement::Length,
        Requirement::Uppercase,
        Requirement::Lowercase,
        Requirement::Digit,
        Requirement::Symbol,
    ],
    weights: &[
        (ScoreRule::LengthAtLeast(MIN_PASSWORD_LENGTH), 20),
        (ScoreRule::LengthAtLeast(LONG_PASSWORD_LENGTH), 20),
        (ScoreRule::Has(Requirement::Uppercase), 20),
        (ScoreRule::Has(Requirement::Lowercase), 20),
        (ScoreRule::Has(Requirement::Digit), 10),
        (ScoreRule::Has(Requirement::Symbol), 10),
    ],
    weak_below: 40,
    medium_below: 70,
};

static RELAXED_RULES: PolicyRules = PolicyRules {
    requirements: &[Requirement::Length, Requirement::Digit, Requirement::Symbol],
    weights: &[
        (ScoreRule::LengthAtLeast(MIN_PASSWORD_LENGTH), 40),
        (ScoreRule::Has(Requirement::Digit), 30),
        (ScoreRule::Has(Requirement::Symbol), 30),
    ],
    weak_below: 40,
    medium_below: 80,
};

impl PasswordPolicy {
    pub(crate) fn rules(self) -> &'static PolicyRules {
        match self {
            PasswordPolicy::Strict => &STRICT_RULES,
            PasswordPolicy::Relaxed => &RELAXED_RULES,
        }
    }

    /// Requirements enforced by this policy, in checking order
    pub fn requirements(self) -> &'static [Requirement] {
        self.rules().requirements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_100() {
        for policy in [PasswordPolicy::Strict, PasswordPolicy::Relaxed] {
            let total: u32 = policy.rules().weights.iter().map(|(_, w)| u32::from(*w)).sum();
            assert_eq!(total, 100, "{:?} weights must sum to 100", policy);
        }
    }

    #[test]
    fn test_relaxed_has_no_case_requirements() {
        let requirements = PasswordPolicy::Relaxed.requirements();
        assert!(!requirements.contains(&Requirement::Uppercase));
        assert!(!requirements.contains(&Requirement::Lowercase));
    }

    #[test]
    fn test_symbol_set_is_limited() {
        assert!(Requirement::Symbol.is_met("pass!"));
        assert!(!Requirement::Symbol.is_met("pass?"));
        assert!(!Requirement::Symbol.is_met("pass_word"));
    }
}
