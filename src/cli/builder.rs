//! Builders: the factory that turns runners into commands.
//!
//! Command-authoring code is written once against `&dyn Builder` and never
//! learns which resources back it. The application picks one builder at
//! startup:
//!
//! - [`FullBuilder`] - live configuration, cache and output
//! - [`MinimalBuilder`] - no configuration, no cache, standard output
//!
//! # Example
//!
//! ```rust,ignore
//! use cmdkit::cli::{Builder, BuilderExt, Command, MinimalBuilder};
//!
//! fn version_cmd(b: &dyn Builder) -> Command {
//!     let out = b.output();
//!     b.build_fn("version", "print the version", move |_, _| {
//!         out.line("1.0.0")?;
//!         Ok(())
//!     })
//! }
//!
//! let cmd = version_cmd(&MinimalBuilder::new());
//! cmd.run(&[])?;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{DataBase, FileDataBase};
use crate::cli::command::Command;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::Output;
use crate::cli::runner::Runner;
use crate::config::{Config, ConfigurationLoader, EnvironmentLoader};

/// Shared resources plus a command factory.
///
/// Accessors never fail and always return handles to the same underlying
/// resource. `None` from [`config`](Builder::config) or [`db`](Builder::db)
/// means the feature is unavailable, not that something went wrong.
pub trait Builder {
    /// Configuration handle, if this builder supports configuration
    fn config(&self) -> Option<Arc<dyn Config>>;

    /// Cache handle, if this builder supports persistence
    fn db(&self) -> Option<Arc<dyn DataBase>>;

    /// Output sink. Never absent; standard output unless configured otherwise.
    fn output(&self) -> Output;

    /// Bind `runner` into a new command.
    ///
    /// Performs no I/O and touches none of the builder's resources.
    fn build(&self, use_: &str, short: &str, runner: Box<dyn Runner>) -> Command {
        Command::new(use_, short, runner)
    }
}

/// Generic conveniences available on every builder, including `dyn Builder`.
pub trait BuilderExt: Builder {
    /// Build from any runner value
    fn build_with<R: Runner + 'static>(&self, use_: &str, short: &str, runner: R) -> Command {
        self.build(use_, short, Box::new(runner))
    }

    /// Build from a closure
    fn build_fn<F>(&self, use_: &str, short: &str, f: F) -> Command
    where
        F: Fn(&Command, &[String]) -> CliResult<()> + Send + Sync + 'static,
    {
        self.build(use_, short, Box::new(f))
    }
}

impl<B: Builder + ?Sized> BuilderExt for B {}

/// Builder with no configuration, no cache and standard output.
///
/// Used for commands that need no shared state, bootstrap code, and test
/// harnesses.
#[derive(Debug, Clone)]
pub struct MinimalBuilder {
    output: Output,
}

impl MinimalBuilder {
    pub fn new() -> Self {
        Self {
            output: Output::stdout(),
        }
    }
}

impl Default for MinimalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for MinimalBuilder {
    fn config(&self) -> Option<Arc<dyn Config>> {
        None
    }

    fn db(&self) -> Option<Arc<dyn DataBase>> {
        None
    }

    fn output(&self) -> Output {
        self.output.clone()
    }
}

/// Builder backed by live configuration and cache.
#[derive(Clone)]
pub struct FullBuilder {
    config: Arc<dyn Config>,
    db: Option<Arc<dyn DataBase>>,
    output: Output,
}

impl FullBuilder {
    /// Assemble a builder from already-opened resources. Output is stdout.
    pub fn new(config: Arc<dyn Config>, db: Option<Arc<dyn DataBase>>) -> Self {
        Self {
            config,
            db,
            output: Output::stdout(),
        }
    }

    /// Replace the output sink
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Load configuration and open the cache from the locations `env` resolves.
    ///
    /// The cache is left absent when `cache.enabled` is false or the cache
    /// file cannot be opened.
    pub fn from_environment(env: &EnvironmentLoader) -> CliResult<Self> {
        let config_path = env.config_path();
        let loader = ConfigurationLoader::new(Some(&config_path))
            .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;

        let cache_path = if loader.config.cache.enabled {
            Some(env.cache_path(loader.config.cache.path.as_deref()))
        } else {
            None
        };

        tracing::debug!(config = %config_path.display(), "loaded configuration");
        Ok(Self::from_loader(loader, cache_path))
    }

    /// Wrap loaded configuration and open the cache at `cache_path`.
    ///
    /// A cache that fails to open is logged and left absent; the
    /// configuration is kept either way.
    pub fn from_loader(loader: ConfigurationLoader, cache_path: Option<PathBuf>) -> Self {
        let db: Option<Arc<dyn DataBase>> = match cache_path {
            Some(path) => match FileDataBase::open(&path) {
                Ok(db) => Some(Arc::new(db)),
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        "cache unavailable: {}",
                        e.user_friendly_message()
                    );
                    None
                }
            },
            None => None,
        };

        tracing::debug!(cache = db.is_some(), "full builder ready");
        Self::new(Arc::new(loader), db)
    }
}

impl Builder for FullBuilder {
    fn config(&self) -> Option<Arc<dyn Config>> {
        Some(Arc::clone(&self.config))
    }

    fn db(&self) -> Option<Arc<dyn DataBase>> {
        self.db.clone()
    }

    fn output(&self) -> Output {
        self.output.clone()
    }
}

impl std::fmt::Debug for FullBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullBuilder")
            .field("config_file", &self.config.file())
            .field("cache", &self.db.is_some())
            .field("output", &self.output)
            .finish()
    }
}
