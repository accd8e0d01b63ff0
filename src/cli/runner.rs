//! The behavior half of a command.
//!
//! A [`Runner`] holds a command's business logic. It is authored once per
//! command, handed to a [`Builder`](crate::cli::Builder), and from then on
//! owned by the [`Command`] built from it.

use crate::cli::command::Command;
use crate::cli::error::CliResult;

/// Executes a command with the arguments supplied at dispatch time.
///
/// Any `Fn(&Command, &[String]) -> CliResult<()>` closure is a runner, so
/// most commands never need a dedicated type.
///
/// # Example
///
/// ```rust,ignore
/// use cmdkit::cli::{Builder, BuilderExt, MinimalBuilder};
///
/// let builder = MinimalBuilder::new();
/// let out = builder.output();
/// let cmd = builder.build_fn("hello", "say hello", move |_cmd, args| {
///     out.line(&format!("hello {}", args.join(" ")))?;
///     Ok(())
/// });
/// ```
pub trait Runner: Send + Sync {
    /// Run the command. `cmd` is the command this runner was built into.
    fn run(&self, cmd: &Command, args: &[String]) -> CliResult<()>;
}

impl<F> Runner for F
where
    F: Fn(&Command, &[String]) -> CliResult<()> + Send + Sync,
{
    fn run(&self, cmd: &Command, args: &[String]) -> CliResult<()> {
        self(cmd, args)
    }
}

impl<R: Runner + ?Sized> Runner for std::sync::Arc<R> {
    fn run(&self, cmd: &Command, args: &[String]) -> CliResult<()> {
        (**self).run(cmd, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::error::CliError;
    use std::sync::Arc;

    type RunFn = fn(&Command, &[String]) -> CliResult<()>;

    fn needs_args(cmd: &Command, args: &[String]) -> CliResult<()> {
        if args.is_empty() {
            return Err(CliError::invalid_input(format!("{} needs arguments", cmd.name())));
        }
        Ok(())
    }

    fn run_via<R: Runner>(runner: &R, cmd: &Command, args: &[String]) -> CliResult<()> {
        runner.run(cmd, args)
    }

    #[test]
    fn test_boxed_and_shared_runners() {
        let cmd = Command::new("order", "", Box::new(needs_args));
        let args = vec!["large".to_string()];

        let boxed: Box<RunFn> = Box::new(needs_args as RunFn);
        assert!(run_via(&boxed, &cmd, &args).is_ok());
        assert!(run_via(&boxed, &cmd, &[]).is_err());

        let shared: Arc<RunFn> = Arc::new(needs_args as RunFn);
        assert!(run_via(&shared, &cmd, &args).is_ok());

        let err = cmd.run(&[]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(ref m) if m == "order needs arguments"));
    }
}
