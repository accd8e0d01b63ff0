//! Error types for release tooling

use std::path::PathBuf;
use thiserror::Error;

/// Result type for release operations
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Errors raised while building or publishing a release
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The remote already has a release for this tag
    #[error("Release {tag} already exists")]
    AlreadyExists { tag: String },

    /// The remote has no release for this tag
    #[error("Release {tag} not found")]
    NotFound { tag: String },

    /// The tag is malformed or already taken
    #[error("Invalid tag '{tag}': {reason}")]
    InvalidTag { tag: String, reason: String },

    /// Missing or bad release settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cross-compilation failed
    #[error("Build failed for {target}: {message}")]
    Build { target: String, message: String },

    /// A built artifact is missing on disk
    #[error("Artifact missing: {path}")]
    MissingArtifact { path: PathBuf },

    /// Unclassified error response from the hosting API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure talking to the hosting API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReleaseError {
    /// Create an invalid tag error
    pub fn invalid_tag<S: Into<String>>(tag: &str, reason: S) -> Self {
        Self::InvalidTag {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }

    /// User-facing message for errors the tool knows how to explain.
    ///
    /// `None` means the error is unrecognized and should be re-raised.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ReleaseError::AlreadyExists { tag } => Some(format!(
                "A release for {} already exists. Remove it first or pick a new tag.",
                tag
            )),
            ReleaseError::NotFound { tag } => Some(format!(
                "Could not find a release for {}. Nothing was removed.",
                tag
            )),
            ReleaseError::InvalidTag { tag, reason } => {
                Some(format!("Tag '{}' cannot be released: {}", tag, reason))
            }
            ReleaseError::Config(message) => Some(format!("Release settings: {}", message)),
            _ => None,
        }
    }
}
