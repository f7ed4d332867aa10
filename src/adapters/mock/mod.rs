//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without file system access.
//!
//! # Available Mocks
//!
//! - [`InMemoryStore`] - In-memory key-value storage with injectable failures

pub mod memory_store;

pub use memory_store::InMemoryStore;
