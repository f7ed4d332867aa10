//! Authentication error types.

use thiserror::Error;

/// Mock authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up with an email that already has an account.
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// A sign-up field failed validation.
    #[error("{field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: &'static str,
    },

    /// The stored session ran past its expiry.
    #[error("Session expired")]
    SessionExpired,

    /// An operation needs a signed-in user.
    #[error("Not signed in")]
    NotAuthenticated,
}

impl AuthError {
    /// Whether the user has to go through sign-in to recover.
    pub fn requires_reauth(&self) -> bool {
        matches!(self, AuthError::SessionExpired | AuthError::NotAuthenticated)
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            AuthError::EmailAlreadyRegistered => "AUTH_EMAIL_TAKEN",
            AuthError::InvalidInput { .. } => "AUTH_INVALID_INPUT",
            AuthError::SessionExpired => "AUTH_SESSION_EXPIRED",
            AuthError::NotAuthenticated => "AUTH_NOT_AUTHENTICATED",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AuthError::SessionExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_requires_reauth() {
        assert!(AuthError::SessionExpired.requires_reauth());
        assert!(AuthError::NotAuthenticated.requires_reauth());
        assert!(!AuthError::EmailAlreadyRegistered.requires_reauth());
    }
}
