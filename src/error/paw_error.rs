//! Unified error type for the PawMatch application.

use std::path::PathBuf;
use thiserror::Error;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::profile::ProfileError;
use super::store::StoreError;

/// Unified error type for the PawMatch application.
///
/// Every service returns this (through [`PawResult`](super::PawResult)) so the
/// front end has one place to categorize, log and display failures.
#[derive(Debug, Error)]
pub enum PawError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// `config.json` exists but could not be used.
    #[error("invalid configuration in '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl PawError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PawError::Store(_) => ErrorCategory::System,
            PawError::Auth(err) if err.requires_reauth() => ErrorCategory::Auth,
            PawError::Auth(_) | PawError::Profile(_) => ErrorCategory::User,
            PawError::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PawError::Store(err) => err.error_code(),
            PawError::Auth(err) => err.error_code(),
            PawError::Profile(err) => err.error_code(),
            PawError::Config { .. } => "CONFIG_INVALID",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PawError::Store(err) => err.user_message(),
            PawError::Auth(err) => err.user_message(),
            PawError::Profile(err) => err.user_message(),
            PawError::Config { path, message } => {
                format!("Could not read '{}': {}", path.display(), message)
            }
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    pub fn requires_reauth(&self) -> bool {
        matches!(self, PawError::Auth(err) if err.requires_reauth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_auth_error() {
        let err: PawError = AuthError::InvalidCredentials.into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.error_code(), "AUTH_INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(!err.requires_reauth());
    }

    #[test]
    fn test_expired_session_category() {
        let err: PawError = AuthError::SessionExpired.into();
        assert_eq!(err.category(), ErrorCategory::Auth);
        assert!(err.requires_reauth());
    }

    #[test]
    fn test_store_error_is_system() {
        let err: PawError = StoreError::Unavailable {
            operation: "set",
            message: "disk gone".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "STORE_UNAVAILABLE");
    }

    #[test]
    fn test_config_error_message() {
        let err = PawError::Config {
            path: PathBuf::from("/tmp/config.json"),
            message: "expected value".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_message().contains("/tmp/config.json"));
    }
}
