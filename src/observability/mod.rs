//! Observability utilities for command-line applications.
//!
//! This module provides a markdown run log whose entries are mirrored as
//! `tracing` events.
//!
//! # Example
//!
//! ```no_run
//! use cmdkit::observability::Logger;
//!
//! let logger = Logger::new(None, Some("DEBUG")).unwrap();
//! logger.log_run_start("cmdkit", "0.1.0").unwrap();
//! logger.log_command_start("version", &[]).unwrap();
//! logger.log_command_result("version", None, 1).unwrap();
//! ```

pub mod logger;

// Re-export main types for convenience
pub use logger::{LogLevel, Logger};
