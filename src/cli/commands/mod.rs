//! Built-in commands
//!
//! Each command is authored against `&dyn Builder` and captures the
//! resources it needs when it is built, so it works the same under a full
//! or a minimal builder.

pub mod cache;
pub mod config;
pub mod misc;

use crate::cli::builder::Builder;
use crate::cli::error::CliResult;
use crate::cli::tree::CommandTree;

/// Build every built-in command and register it in `tree`
pub fn register_builtins(
    builder: &dyn Builder,
    tree: &mut CommandTree,
    app_name: &str,
    app_version: &str,
) -> CliResult<()> {
    tree.register(misc::version_command(builder, app_name, app_version))?;
    tree.register(misc::echo_command(builder))?;
    tree.register(config::config_command(builder))?;
    tree.register(cache::cache_command(builder))?;
    Ok(())
}
