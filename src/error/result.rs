//! Result type alias for PawMatch operations.

use super::paw_error::PawError;
use super::store::StoreError;

/// Type alias for Results using PawError.
pub type PawResult<T> = Result<T, PawError>;

/// Type alias for store-level results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Extension trait for logging an error before it is dropped or shown.
pub trait ResultExt<T> {
    /// Log the error at warn level with `operation` attached, passing the result through.
    fn log_err(self, operation: &str) -> Self;
}

impl<T> ResultExt<T> for PawResult<T> {
    fn log_err(self, operation: &str) -> Self {
        if let Err(err) = &self {
            tracing::warn!(
                operation,
                code = err.error_code(),
                category = %err.category(),
                "{}",
                err
            );
        }
        self
    }
}
