//! Policy violations and the evaluation that collects them.

use thiserror::Error;

/// Minimum number of characters a password must contain.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "{}:\"<>,./;'[]\\$";

/// A single policy rule the candidate failed to satisfy.
///
/// The `Display` output is the human-readable message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    #[error("Password must contain at least one uppercase letter (A-Z).")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter (a-z).")]
    MissingLowercase,
    #[error("Password must contain at least one number (0-9).")]
    MissingDigit,
    #[error("Password must contain at least one special character ({{}}:\"<>,./;'[]\\$).")]
    MissingSpecial,
}

impl Violation {
    /// Human-readable message for this violation.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result of checking a password against the policy.
///
/// Violations are kept in rule order: length, uppercase, lowercase, digit, special.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyEvaluation {
    pub violations: Vec<Violation>,
}

impl PolicyEvaluation {
    /// `true` when no rule was violated.
    pub fn is_acceptable(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// All messages joined by newlines, one rule per line.
    pub fn summary(&self) -> String {
        self.messages().join("\n")
    }

    pub fn contains(&self, violation: Violation) -> bool {
        self.violations.contains(&violation)
    }
}
