//! Command tree: registers built commands and dispatches one invocation.
//!
//! Parsing is delegated to clap. Each registered [`Command`] becomes a
//! subcommand whose trailing arguments are handed to it verbatim.

use std::ffi::OsString;
use std::io::Write;
use std::time::Instant;

use clap::error::{ContextKind, ContextValue, ErrorKind};

use crate::cli::command::{Command, ARGS_ID};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::Output;
use crate::observability::Logger;

/// The root of an application's command hierarchy
pub struct CommandTree {
    name: String,
    version: String,
    about: Option<String>,
    commands: Vec<Command>,
    logger: Option<Logger>,
    output: Output,
}

impl CommandTree {
    /// Create an empty tree for application `name`
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            about: None,
            commands: Vec::new(),
            logger: None,
            output: Output::stdout(),
        }
    }

    /// Set the application description shown in help
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Record every dispatch in a run log
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Where help and version text are written
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Add a command. Names must be non-empty, must not start with `-`,
    /// and must be unique within the tree.
    pub fn register(&mut self, command: Command) -> CliResult<()> {
        if command.name().trim().is_empty() {
            return Err(CliError::invalid_input("command name must not be empty"));
        }
        if command.name().starts_with('-') {
            return Err(CliError::invalid_input(format!(
                "command name must not start with '-': {}",
                command.name()
            )));
        }
        if self.get(command.name()).is_some() {
            return Err(CliError::DuplicateCommand(command.name().to_string()));
        }

        tracing::debug!(command = command.name(), "registered command");
        self.commands.push(command);
        Ok(())
    }

    /// Look up a registered command by name
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Build the clap application for this tree.
    ///
    /// Help is only available as `-h`/`--help`, so `help` can be registered
    /// like any other command.
    pub fn to_clap(&self) -> clap::Command {
        let mut app = clap::Command::new(self.name.clone())
            .version(self.version.clone())
            .subcommand_required(false)
            .disable_help_subcommand(true);

        if let Some(about) = &self.about {
            app = app.about(about.clone());
        }

        for command in &self.commands {
            app = app.subcommand(command.to_clap());
        }

        app
    }

    /// Dispatch using the process's arguments
    pub fn run(&self) -> CliResult<()> {
        self.run_from(std::env::args_os())
    }

    /// Dispatch a full argument vector (including the program name).
    ///
    /// Help and version requests are written to the tree's output and
    /// succeed. The invoked command's result is returned unchanged.
    pub fn run_from<I, T>(&self, argv: I) -> CliResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut app = self.to_clap();
        let matches = match app.try_get_matches_from_mut(argv) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                let mut out = self.output.clone();
                write!(out, "{}", e.render())?;
                out.flush()?;
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
                let name = match e.get(ContextKind::InvalidSubcommand) {
                    Some(ContextValue::String(name)) => name.clone(),
                    _ => String::new(),
                };
                return Err(CliError::UnknownCommand(name));
            }
            Err(e) => return Err(CliError::ArgumentError(e.render().to_string())),
        };

        let (name, sub_matches) = match matches.subcommand() {
            Some(found) => found,
            None => {
                let mut out = self.output.clone();
                write!(out, "{}", app.render_help())?;
                out.flush()?;
                return Err(CliError::invalid_input("no command given"));
            }
        };

        let command = self
            .get(name)
            .ok_or_else(|| CliError::UnknownCommand(name.to_string()))?;

        let args: Vec<String> = sub_matches
            .get_many::<String>(ARGS_ID)
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default();

        self.dispatch(command, &args)
    }

    fn dispatch(&self, command: &Command, args: &[String]) -> CliResult<()> {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log_command_start(command.name(), args) {
                tracing::warn!("failed to write run log: {:#}", e);
            }
        }

        let started = Instant::now();
        let result = command.run(args);

        if let Some(logger) = &self.logger {
            let error = result.as_ref().err().map(|e| e.to_string());
            if let Err(e) = logger.log_command_result(
                command.name(),
                error.as_deref(),
                started.elapsed().as_millis(),
            ) {
                tracing::warn!("failed to write run log: {:#}", e);
            }
        }

        result
    }
}

impl std::fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandTree")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}
