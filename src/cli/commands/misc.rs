//! Miscellaneous commands
//!
//! Simple utility commands that need nothing but output:
//! - version: Show version information
//! - echo: Echo the arguments

use crate::cli::builder::{Builder, BuilderExt};
use crate::cli::command::Command;

/// `version` - writes `<name> <version>`
pub fn version_command(builder: &dyn Builder, app_name: &str, app_version: &str) -> Command {
    let out = builder.output();
    let line = format!("{} {}", app_name, app_version);
    builder.build_fn("version", "Show version information", move |_, _| {
        out.line(&line)?;
        Ok(())
    })
}

/// `echo` - writes its arguments separated by spaces
pub fn echo_command(builder: &dyn Builder) -> Command {
    let out = builder.output();
    builder.build_fn("echo", "Echo the arguments", move |_, args| {
        out.line(&args.join(" "))?;
        Ok(())
    })
}
