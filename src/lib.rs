//! Command Builder Kit (cmdkit) - wiring command runners to shared resources
//!
//! cmdkit separates *what a command does* from *what it needs*. A command
//! author writes a [`Runner`](cli::Runner); a [`Builder`](cli::Builder)
//! turns it into an executable [`Command`](cli::Command) and hands out the
//! configuration, cache and output stream of the running application.
//!
//! - **`config`** - `Config` capability, TOML configuration and environment loading
//! - **`cache`** - `DataBase` capability and a file-backed cache
//! - **`observability`** - Markdown run log mirrored to `tracing`
//! - **`cli`** - Builder/Runner/Command core, dispatcher and built-in commands
//! - **`release`** - Cross-compiling and publishing release binaries
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! cmdkit = { version = "0.1", features = ["cli"] }
//! # Or enable everything:
//! cmdkit = { version = "0.1", features = ["all"] }
//! ```
//!
//! # Example: building and running a command
//!
//! ```ignore
//! use cmdkit::cli::{Builder, BuilderExt, MinimalBuilder};
//!
//! let builder = MinimalBuilder::new();
//! let out = builder.output();
//! let version = builder.build_fn("version", "Print the version", move |_cmd, _args| {
//!     out.line("1.0.0")?;
//!     Ok(())
//! });
//!
//! version.run(&[])?;
//! ```
//!
//! # Example: a full application
//!
//! ```ignore
//! use cmdkit::cli::{commands, CommandTree, FullBuilder};
//! use cmdkit::config::EnvironmentLoader;
//!
//! let env = EnvironmentLoader::new(None);
//! let builder = FullBuilder::from_environment(&env)?;
//! let mut tree = CommandTree::new("pizza", "1.0.0");
//! commands::register_builtins(&builder, &mut tree, "pizza", "1.0.0")?;
//! tree.run()?;
//! ```

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Persistent cache (enabled with the `cache` feature)
#[cfg(feature = "cache")]
pub mod cache;

/// Observability utilities (enabled with the `observability` feature)
#[cfg(feature = "observability")]
pub mod observability;

/// Command building and dispatch (enabled with the `cli` feature)
#[cfg(feature = "cli")]
pub mod cli;

/// Release tooling (enabled with the `release` feature)
#[cfg(feature = "release")]
pub mod release;

/// Prelude module for convenient imports
pub mod prelude {
    #[cfg(feature = "config")]
    pub use crate::config::{Config, ConfigurationLoader, EnvironmentLoader};

    #[cfg(feature = "cache")]
    pub use crate::cache::{DataBase, FileDataBase};

    #[cfg(feature = "observability")]
    pub use crate::observability::Logger;

    #[cfg(feature = "cli")]
    pub use crate::cli::{
        Builder, BuilderExt, CliError, CliResult, Command, CommandTree, FullBuilder,
        MinimalBuilder, Output, Runner,
    };

    #[cfg(feature = "release")]
    pub use crate::release::{ReleaseApi, ReleaseConfig, ReleaseError, ReleaseResult};
}
