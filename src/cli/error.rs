//! Error types for CLI operations

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur while wiring or dispatching commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Error raised by a command while it ran
    #[error("Execution error: {0}")]
    ExecutionError(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Cache access error
    #[error("Cache error: {0}")]
    CacheError(#[from] crate::cache::CacheError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Command line could not be parsed
    #[error("Argument error: {0}")]
    ArgumentError(String),

    /// Invalid argument or input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A command with the same name is already registered
    #[error("Duplicate command: {0}")]
    DuplicateCommand(String),

    /// No command with this name is registered
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl CliError {
    /// Create an execution error
    pub fn execution<S: Into<String>>(msg: S) -> Self {
        Self::ExecutionError(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::ExecutionError(format!("{:#}", err))
    }
}
