//! Test utilities and mock implementations for CLI testing
//!
//! Provides mock runners and resources for unit testing builders and
//! commands without a real configuration file or cache.

pub mod mocks;

pub use mocks::{MockConfig, MockDataBase, MockRunner};
