//! Key-value store trait abstraction.
//!
//! Provides a trait-based abstraction for the JSON key-value store that keeps
//! filters, swipe history, matches and the session, so services can be tested
//! against an in-memory double.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Prefix every key gets inside the backing namespace.
pub const KEY_PREFIX: &str = "pawmatch_";

/// Build the namespaced key for `key`.
pub fn namespaced(key: &str) -> String {
    format!("{}{}", KEY_PREFIX, key)
}

/// Synchronous JSON key-value storage.
///
/// Implementations namespace keys with [`KEY_PREFIX`]; `clear` only removes
/// keys inside that namespace. Values are stored as JSON and come back as
/// JSON, with no type coercion (dates come back as strings).
///
/// # Example
///
/// ```
/// use pawmatch::adapters::InMemoryStore;
/// use pawmatch::traits::{KeyValueStore, StoreExt};
///
/// let store = InMemoryStore::new();
/// store.set_item("answer", &42u32).unwrap();
/// assert_eq!(store.get_item::<u32>("answer").unwrap(), Some(42));
/// store.remove("answer").unwrap();
/// assert!(store.get("answer").unwrap().is_none());
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Load the value stored under `key`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if nothing is stored under it
    /// - `Err(error)` if the backing storage failed
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Remove every key in this store's namespace.
    fn clear(&self) -> StoreResult<()>;
}

/// Typed helpers on top of [`KeyValueStore`].
pub trait StoreExt: KeyValueStore {
    /// Load and deserialize `key`.
    ///
    /// A stored value that no longer fits `T` is logged and treated as absent.
    fn get_item<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_value(value) {
            Ok(item) => Ok(Some(item)),
            Err(err) => {
                tracing::warn!(key, "ignoring unreadable stored value: {}", err);
                Ok(None)
            }
        }
    }

    /// Serialize and store `value` under `key`.
    fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })?;
        self.set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
