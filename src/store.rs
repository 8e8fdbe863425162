//! String-keyed durable stores backing the watchlist.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::NamedTempFile;

use crate::config;
use crate::error::{CatalogError, Result};

/// Generic key-value slot storage: one string value per key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory which is then renamed over
/// the target, so readers never observe a half-written value.
pub struct FileStore {
    pub dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir` (or the platform data directory),
    /// creating the directory if needed.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(CatalogError::InvalidArgument(format!(
                "Invalid store key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| CatalogError::Io(e.error))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-process store, mainly for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| CatalogError::LockPoisoned("key-value store"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| CatalogError::LockPoisoned("key-value store"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
