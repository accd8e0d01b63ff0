//! The persistence capability consumed by command builders.

use super::errors::CacheResult;
use chrono::{DateTime, Duration, Utc};

/// A small persistent key/value store shared by every command of a process.
///
/// The store owns its own locking; callers only ever hold `&self`.
pub trait DataBase: Send + Sync {
    /// Fetch the value stored under `key`
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store `value` under `key`, stamping it with the current time
    fn put(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Whether `key` has a value
    fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> CacheResult<()>;

    /// All stored keys, sorted
    fn keys(&self) -> CacheResult<Vec<String>>;

    /// When `key` was last written
    fn timestamp(&self, key: &str) -> CacheResult<Option<DateTime<Utc>>>;

    /// Remove every entry
    fn clear(&self) -> CacheResult<()>;

    /// True when `key` is missing or older than `max_age`
    fn is_stale(&self, key: &str, max_age: Duration) -> CacheResult<bool> {
        Ok(match self.timestamp(key)? {
            Some(written) => Utc::now() - written > max_age,
            None => true,
        })
    }
}
