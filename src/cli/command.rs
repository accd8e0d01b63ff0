//! The unit a builder produces and a dispatcher consumes.

use std::fmt;
use std::sync::Arc;

use crate::cli::error::CliResult;
use crate::cli::runner::Runner;

/// Name of the trailing free-form argument every command accepts
pub const ARGS_ID: &str = "args";

/// A named, describable, dispatchable command.
///
/// Immutable once built. Holds no reference back to the builder that made
/// it; any shared resource it needs was captured by its runner.
#[derive(Clone)]
pub struct Command {
    name: String,
    short: String,
    runner: Arc<dyn Runner>,
}

impl Command {
    /// Bind `runner` to a name and a one-line description.
    ///
    /// This is the constructor every builder delegates to. It allocates and
    /// nothing else.
    pub fn new(name: impl Into<String>, short: impl Into<String>, runner: Box<dyn Runner>) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            runner: Arc::from(runner),
        }
    }

    /// The name the command is invoked by
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line human readable description
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Run the command. The runner's result is returned as-is.
    pub fn run(&self, args: &[String]) -> CliResult<()> {
        self.runner.run(self, args)
    }

    /// Render the command's registration for a clap tree.
    ///
    /// Argument parsing belongs to the command itself, so everything after
    /// the command name is collected verbatim.
    pub fn to_clap(&self) -> clap::Command {
        clap::Command::new(self.name.clone())
            .about(self.short.clone())
            .arg(
                clap::Arg::new(ARGS_ID)
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true)
                    .value_parser(clap::value_parser!(String)),
            )
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .finish_non_exhaustive()
    }
}
