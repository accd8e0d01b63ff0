//! JSON-file backed [`DataBase`]

use super::atomic::AtomicFileWriter;
use super::errors::{CacheError, CacheResult};
use super::traits::DataBase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// A single cached value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheEntry {
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Cache persisted as one JSON document.
///
/// The whole document is loaded at [`open`](FileDataBase::open) and
/// rewritten after every mutation.
#[derive(Debug)]
pub struct FileDataBase {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, CacheEntry>>,
}

impl FileDataBase {
    /// Open the cache at `path`, creating an empty one if the file is missing
    pub fn open(path: impl AsRef<Path>) -> CacheResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| CacheError::corrupted(&path, e.to_string()))?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened cache");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored entries
    pub fn len(&self) -> CacheResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> CacheResult<MutexGuard<'_, BTreeMap<String, CacheEntry>>> {
        self.entries
            .lock()
            .map_err(|_| CacheError::storage("cache lock poisoned"))
    }

    fn persist(&self, entries: &BTreeMap<String, CacheEntry>) -> CacheResult<()> {
        AtomicFileWriter::new(&self.path)?.write_json(entries)
    }
}

impl DataBase for FileDataBase {
    fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.lock()?.get(key).map(|e| e.value.clone()))
    }

    fn put(&self, key: &str, value: &str) -> CacheResult<()> {
        let mut entries = self.lock()?;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                updated_at: Utc::now(),
            },
        );
        self.persist(&entries)
    }

    fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.lock()?.contains_key(key))
    }

    fn delete(&self, key: &str) -> CacheResult<()> {
        let mut entries = self.lock()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }

    fn keys(&self) -> CacheResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }

    fn timestamp(&self, key: &str) -> CacheResult<Option<DateTime<Utc>>> {
        Ok(self.lock()?.get(key).map(|e| e.updated_at))
    }

    fn clear(&self) -> CacheResult<()> {
        let mut entries = self.lock()?;
        entries.clear();
        self.persist(&entries)
    }
}
