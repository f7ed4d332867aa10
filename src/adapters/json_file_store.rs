//! File-backed key-value store adapter.
//!
//! Keeps the whole namespace in one JSON object on disk, by default
//! `~/.pawmatch/store.json`.

use serde_json::{Map, Value};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::traits::{namespaced, KeyValueStore, KEY_PREFIX};

/// Name of the store document inside the data directory.
pub const STORE_FILE: &str = "store.json";

/// JSON document store.
///
/// Every key is written as `pawmatch_<key>`. Foreign keys in the document
/// are preserved on write and untouched by [`clear`](KeyValueStore::clear).
/// Each write replaces the file through a temporary sibling and a rename.
///
/// # Example
///
/// ```ignore
/// use pawmatch::adapters::JsonFileStore;
/// use pawmatch::traits::StoreExt;
///
/// let store = JsonFileStore::in_dir(&data_dir);
/// store.set_item("dog_filters", &filters)?;
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `<data_dir>/store.json`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::at_path(data_dir.as_ref().join(STORE_FILE))
    }

    /// Store backed by an explicit file.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> StoreResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(StoreError::io("read", &self.path, err)),
        };

        if raw.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(StoreError::Corrupt {
                path: self.path.clone(),
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
            Err(err) => Err(StoreError::Corrupt {
                path: self.path.clone(),
                message: err.to_string(),
            }),
        }
    }

    fn write_document(&self, document: &Map<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|err| StoreError::io("create directory", parent, err))?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        let file =
            fs::File::create(&tmp_path).map_err(|err| StoreError::io("create", &tmp_path, err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document).map_err(|err| StoreError::Corrupt {
            path: tmp_path.clone(),
            message: err.to_string(),
        })?;
        writer
            .flush()
            .map_err(|err| StoreError::io("write", &tmp_path, err))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(|err| StoreError::io("replace", &self.path, err))
    }

    /// Run `f` against the loaded document under the process-local lock.
    fn with_document<T>(
        &self,
        f: impl FnOnce(&mut Map<String, Value>) -> (T, bool),
    ) -> StoreResult<T> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut document = self.read_document()?;
        let (out, dirty) = f(&mut document);
        if dirty {
            self.write_document(&document)?;
        }
        Ok(out)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let key = namespaced(key);
        self.with_document(|doc| (doc.get(&key).cloned(), false))
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let key = namespaced(key);
        tracing::trace!(key = %key, path = %self.path.display(), "store set");
        self.with_document(|doc| {
            doc.insert(key, value);
            ((), true)
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let key = namespaced(key);
        self.with_document(|doc| {
            let removed = doc.remove(&key).is_some();
            ((), removed)
        })
    }

    fn clear(&self) -> StoreResult<()> {
        let removed = self.with_document(|doc| {
            let before = doc.len();
            doc.retain(|k, _| !k.starts_with(KEY_PREFIX));
            let removed = before - doc.len();
            (removed, removed > 0)
        })?;
        tracing::info!(removed, path = %self.path.display(), "cleared store namespace");
        Ok(())
    }
}
