//! Dog registration validation errors.

use thiserror::Error;

/// A registration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Failures while filling in or submitting the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// One or more fields of `step` are invalid.
    #[error("step {step} has {} invalid field(s)", .errors.len())]
    InvalidStep { step: u8, errors: Vec<FieldError> },
}

impl ProfileError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ProfileError::InvalidStep { errors, .. } => errors,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ProfileError::InvalidStep { .. } => "PROFILE_INVALID_STEP",
        }
    }

    pub fn user_message(&self) -> String {
        match self.field_errors().first() {
            Some(first) => first.to_string(),
            None => self.to_string(),
        }
    }
}
