//! Error handling for PawMatch.
//!
//! - **Error Categories**: classification for handling decisions
//! - **Domain-specific Errors**: store, auth and registration errors
//! - **Unified Error Type**: `PawError` consolidates them
//! - **Result Type Alias**: `PawResult<T>` for service return types
//!
//! The gesture engine itself is infallible; everything here belongs to the
//! collaborators around it.

mod auth;
mod category;
mod paw_error;
mod profile;
mod result;
mod store;

pub use auth::AuthError;
pub use category::ErrorCategory;
pub use paw_error::PawError;
pub use profile::{FieldError, ProfileError};
pub use result::{PawResult, ResultExt, StoreResult};
pub use store::StoreError;
