//! CLI feature - building commands from runners and shared resources
//!
//! The pieces, leaves first:
//!
//! - [`Runner`] - a command's behavior, written by the command author
//! - [`Builder`] - shared resources (config, cache, output) plus a factory
//!   turning runners into [`Command`]s; [`FullBuilder`] and
//!   [`MinimalBuilder`] are the two variants
//! - [`CommandTree`] - registers commands and dispatches one invocation
//!
//! # Example
//!
//! ```rust,ignore
//! use cmdkit::cli::{commands, BuilderExt, CommandTree, MinimalBuilder};
//!
//! let builder = MinimalBuilder::new();
//! let mut tree = CommandTree::new("pizza", "1.0.0");
//! commands::register_builtins(&builder, &mut tree, "pizza", "1.0.0")?;
//! tree.run()?;
//! ```

pub mod builder;
pub mod command;
pub mod commands;
pub mod error;
pub mod output;
pub mod runner;
pub mod tree;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-exports for convenience
pub use builder::{Builder, BuilderExt, FullBuilder, MinimalBuilder};
pub use command::Command;
pub use error::{CliError, CliResult};
pub use output::{Output, SharedBuffer};
pub use runner::Runner;
pub use tree::CommandTree;
pub use utils::{display_error_with_suggestions, exit_code};
