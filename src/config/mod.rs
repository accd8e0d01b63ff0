//! Configuration management for command-line applications.
//!
//! This module provides the [`Config`] capability that builders hand to
//! commands, a TOML-backed implementation, and environment variable
//! resolution via `.env` files.
//!
//! # Example
//!
//! ```no_run
//! use cmdkit::config::{Config, ConfigurationLoader, EnvironmentLoader};
//!
//! let env = EnvironmentLoader::new(None);
//! let loader = ConfigurationLoader::new(Some(&env.config_path())).unwrap();
//!
//! println!("App: {:?}", loader.get("app.name"));
//! ```

pub mod config;
pub mod environment;
pub mod traits;

// Re-export main types for convenience
pub use self::config::{
    AppConfig, CacheConfig, Configuration, ConfigurationLoader, LoggingConfig, OutputConfig,
};
pub use self::environment::{expand_path, EnvironmentLoader};
pub use self::traits::Config;
