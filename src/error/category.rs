//! Error category classification.
//!
//! Categories drive how the front end reacts to a failure: show a hint and
//! keep going, send the user back to sign-in, or give up on persistence.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Authentication problems; the user has to sign in (again).
    Auth,

    /// Invalid input the user can correct.
    User,

    /// Storage or filesystem errors.
    System,

    /// Broken or unreadable configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "Sign in again to continue",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check permissions and free space in the data directory",
            ErrorCategory::Configuration => "Fix or remove config.json in the data directory",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(ErrorCategory::Auth.as_str(), "auth");
        assert_eq!(ErrorCategory::System.to_string(), "system");
    }

    #[test]
    fn test_every_category_has_hint() {
        for category in [
            ErrorCategory::Auth,
            ErrorCategory::User,
            ErrorCategory::System,
            ErrorCategory::Configuration,
        ] {
            assert!(!category.recovery_hint().is_empty());
        }
    }
}
