//! Error types for the cache

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors raised by a [`DataBase`](super::DataBase) implementation
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupted cache file {path}: {message}")]
    Corrupted { path: PathBuf, message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl CacheError {
    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a corrupted data error
    pub fn corrupted<S: Into<String>>(path: impl Into<PathBuf>, message: S) -> Self {
        Self::Corrupted {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get a user-friendly error message with recovery suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            CacheError::Corrupted { path, .. } => format!(
                "The cache file {} is unreadable. Delete it to start fresh.",
                path.display()
            ),
            _ => self.to_string(),
        }
    }
}
