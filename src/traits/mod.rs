//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`KeyValueStore`] - JSON key-value persistence
//! - [`StoreExt`] - typed get/set helpers for any store

pub mod storage;

pub use storage::{namespaced, KeyValueStore, StoreExt, KEY_PREFIX};
