//! In-memory key-value store for testing.
//!
//! Provides a store that keeps its namespace in memory, suitable for testing
//! services without file system access.

use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

use crate::error::{StoreError, StoreResult};
use crate::traits::{namespaced, KeyValueStore, KEY_PREFIX};

/// In-memory key-value store for testing.
///
/// Keys are namespaced exactly like the file store, so `clear` leaves
/// foreign keys alone. Clones share the same contents.
///
/// # Example
///
/// ```
/// use pawmatch::adapters::InMemoryStore;
/// use pawmatch::traits::KeyValueStore;
/// use serde_json::json;
///
/// let store = InMemoryStore::new();
/// store.set("swipes", json!([])).unwrap();
/// assert_eq!(store.raw_keys(), vec!["pawmatch_swipes".to_string()]);
///
/// store.set_set_should_fail(true);
/// assert!(store.set("swipes", json!([1])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    /// Stored entries, keyed by the namespaced key
    entries: Arc<Mutex<Map<String, Value>>>,
    /// Whether get should fail
    get_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    set_should_fail: Arc<Mutex<bool>>,
    /// Whether remove and clear should fail
    remove_should_fail: Arc<Mutex<bool>>,
    /// Keys whose set fails regardless of `set_should_fail`
    failing_set_keys: Arc<Mutex<Vec<String>>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Map::new())),
            get_should_fail: Arc::new(Mutex::new(false)),
            set_should_fail: Arc::new(Mutex::new(false)),
            remove_should_fail: Arc::new(Mutex::new(false)),
            failing_set_keys: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Configure whether get should fail.
    pub fn set_get_should_fail(&self, should_fail: bool) {
        *self.get_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether set should fail.
    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    /// Make set fail for `key` only.
    pub fn fail_set_for(&self, key: &str) {
        self.failing_set_keys.lock().unwrap().push(key.to_string());
    }

    /// Configure whether remove and clear should fail.
    pub fn set_remove_should_fail(&self, should_fail: bool) {
        *self.remove_should_fail.lock().unwrap() = should_fail;
    }

    /// Insert a raw entry without namespacing (for testing foreign keys).
    pub fn insert_raw(&self, key: &str, value: Value) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    /// All raw keys currently held, sorted.
    pub fn raw_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        if *self.get_should_fail.lock().unwrap() {
            return Err(StoreError::Unavailable {
                operation: "get",
                message: "Mock get failure".to_string(),
            });
        }

        Ok(self.entries.lock().unwrap().get(&namespaced(key)).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let key_fails = self.failing_set_keys.lock().unwrap().iter().any(|k| k == key);
        if key_fails || *self.set_should_fail.lock().unwrap() {
            return Err(StoreError::Unavailable {
                operation: "set",
                message: "Mock set failure".to_string(),
            });
        }

        self.entries.lock().unwrap().insert(namespaced(key), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        if *self.remove_should_fail.lock().unwrap() {
            return Err(StoreError::Unavailable {
                operation: "remove",
                message: "Mock remove failure".to_string(),
            });
        }

        self.entries.lock().unwrap().remove(&namespaced(key));
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        if *self.remove_should_fail.lock().unwrap() {
            return Err(StoreError::Unavailable {
                operation: "clear",
                message: "Mock clear failure".to_string(),
            });
        }

        self.entries
            .lock()
            .unwrap()
            .retain(|k, _| !k.starts_with(KEY_PREFIX));
        Ok(())
    }
}
