//! Password strength estimation.
//!
//! Scores are additive over independent criteria, so a password that fails
//! validation can still earn points for the criteria it does meet.

use super::PasswordPolicy;
use serde::Serialize;
use std::fmt;

/// Password strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Band a score with the policy's own thresholds
    pub fn from_score(score: u8, policy: PasswordPolicy) -> Self {
        let rules = policy.rules();
        if score < rules.weak_below {
            PasswordStrength::Weak
        } else if score < rules.medium_below {
            PasswordStrength::Medium
        } else {
            PasswordStrength::Strong
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "Weak"),
            PasswordStrength::Medium => write!(f, "Medium"),
            PasswordStrength::Strong => write!(f, "Strong"),
        }
    }
}

/// Score on a 0-100 scale together with its band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthScore {
    pub score: u8,
    pub strength: PasswordStrength,
}

/// Sum the weights of every criterion the password meets
pub fn score_password_strength(password: &str, policy: PasswordPolicy) -> u8 {
    policy
        .rules()
        .weights
        .iter()
        .filter(|(rule, _)| rule.is_met(password))
        .map(|(_, weight)| *weight)
        .sum()
}

pub fn estimate_strength(password: &str, policy: PasswordPolicy) -> StrengthScore {
    let score = score_password_strength(password, policy);
    StrengthScore {
        score,
        strength: PasswordStrength::from_score(score, policy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_score() {
        // 20 (len >= 8) + 20 (upper) + 20 (lower) + 10 (digit) + 10 (symbol)
        let result = estimate_strength("Abc12345!", PasswordPolicy::Strict);
        assert_eq!(result.score, 80);
        assert_eq!(result.strength, PasswordStrength::Strong);
    }

    #[test]
    fn test_strict_long_password_scores_full() {
        assert_eq!(score_password_strength("Abcdef12345!", PasswordPolicy::Strict), 100);
    }

    #[test]
    fn test_relaxed_score() {
        let result = estimate_strength("abcdefgh", PasswordPolicy::Relaxed);
        assert_eq!(result.score, 40);
        assert_eq!(result.strength, PasswordStrength::Medium);

        assert_eq!(score_password_strength("abcdefgh1!", PasswordPolicy::Relaxed), 100);
        assert_eq!(score_password_strength("a1!", PasswordPolicy::Relaxed), 60);
    }

    #[test]
    fn test_score_not_short_circuited() {
        // too short, yet digit and symbol still count
        assert_eq!(score_password_strength("1!", PasswordPolicy::Strict), 20);
        assert_eq!(score_password_strength("", PasswordPolicy::Strict), 0);
    }

    #[test]
    fn test_band_boundaries_differ_per_policy() {
        assert_eq!(PasswordStrength::from_score(39, PasswordPolicy::Strict), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(40, PasswordPolicy::Strict), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(70, PasswordPolicy::Strict), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(70, PasswordPolicy::Relaxed), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(80, PasswordPolicy::Relaxed), PasswordStrength::Strong);
    }
}
