//! Key-value persistence for the last rendered input.
//!
//! The session controller treats storage as a synchronous local resource with
//! a single fixed key: the raw input is written on every successful render
//! and read back once at startup. [`MemoryStore`] covers tests and throwaway
//! sessions; [`FileStore`] is the reload-surviving implementation, a JSON
//! file holding the key-value map.

use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key under which the last rendered input is saved
pub const SAVED_CODE_KEY: &str = "savedCode";

/// Synchronous key-value store scoped to one host
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, if present
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Volatile store for tests and persistence-disabled sessions
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one JSON object per file, loaded once at open.
///
/// Each `set` is an independent key overwrite flushed to disk immediately, so
/// a session's saved input survives process restarts the way origin-scoped
/// browser storage survives reloads.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                Error::StorageError(format!("failed to read {}: {}", path.display(), e))
            })?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| {
                    Error::StorageError(format!("malformed store {}: {}", path.display(), e))
                })?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::StorageError(format!("failed to serialize store: {}", e)))?;
        fs::write(&self.path, raw).map_err(|e| {
            Error::StorageError(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}
