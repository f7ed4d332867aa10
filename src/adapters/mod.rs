//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`JsonFileStore`] - JSON document storage on disk
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::InMemoryStore`] - In-memory key-value storage

pub mod json_file_store;
pub mod mock;

pub use json_file_store::{JsonFileStore, STORE_FILE};
pub use mock::InMemoryStore;
