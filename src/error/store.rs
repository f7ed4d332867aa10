//! Persistence store errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of a [`KeyValueStore`](crate::traits::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to {operation} '{}': {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing document is not a JSON object we can use.
    #[error("store file '{}' is corrupt: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    /// A value could not be converted to or from JSON.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Could not work out where to keep data.
    #[error("could not determine the home directory")]
    NoHomeDirectory,

    /// Injected by test doubles.
    #[error("{operation} failed: {message}")]
    Unavailable {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Io { .. } => "STORE_IO",
            StoreError::Corrupt { .. } => "STORE_CORRUPT",
            StoreError::Serialization { .. } => "STORE_SERDE",
            StoreError::NoHomeDirectory => "STORE_NO_HOME",
            StoreError::Unavailable { .. } => "STORE_UNAVAILABLE",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            StoreError::Io { path, .. } => {
                format!("Could not save or load your data in '{}'.", path.display())
            }
            StoreError::Corrupt { path, .. } => format!(
                "Saved data in '{}' is unreadable. Run with --reset to start over.",
                path.display()
            ),
            StoreError::Serialization { key, .. } => {
                format!("Could not store '{}'.", key)
            }
            StoreError::NoHomeDirectory => {
                "Could not determine your home directory. Set PAWMATCH_HOME.".to_string()
            }
            StoreError::Unavailable { .. } => "Storage is unavailable.".to_string(),
        }
    }
}
