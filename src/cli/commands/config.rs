//! Config command implementation
//!
//! Shows configuration through the builder's [`Config`] handle.

use std::io::Write;
use std::sync::Arc;

use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::cli::builder::Builder;
use crate::cli::command::Command;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::Output;
use crate::cli::runner::Runner;
use crate::config::Config;

/// Runner behind the `config` command
pub struct ConfigRunner {
    config: Option<Arc<dyn Config>>,
    output: Output,
}

impl ConfigRunner {
    pub fn new(config: Option<Arc<dyn Config>>, output: Output) -> Self {
        Self { config, output }
    }

    fn show_all(&self, config: &dyn Config) -> CliResult<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Key", "Value"]);
        for key in config.keys() {
            table.add_row(vec![key.clone(), config.get(&key).unwrap_or_default()]);
        }

        let mut out = self.output.clone();
        if let Some(file) = config.file() {
            writeln!(out, "{} {}", "Configuration file:".cyan().bold(), file.display())?;
        }
        writeln!(out, "{}", table)?;
        out.flush()?;
        Ok(())
    }
}

impl Runner for ConfigRunner {
    fn run(&self, _cmd: &Command, args: &[String]) -> CliResult<()> {
        let config = match &self.config {
            Some(config) => config,
            None => {
                self.output.line("configuration not available")?;
                return Ok(());
            }
        };

        match args {
            [] => self.show_all(config.as_ref()),
            [key] => {
                let value = config
                    .get(key)
                    .ok_or_else(|| CliError::ConfigError(format!("no such key: {}", key)))?;
                self.output.line(&value)?;
                Ok(())
            }
            _ => Err(CliError::invalid_input("usage: config [key]")),
        }
    }
}

/// `config [key]` - show all settings, or one
pub fn config_command(builder: &dyn Builder) -> Command {
    let runner = ConfigRunner::new(builder.config(), builder.output());
    builder.build("config", "Show configuration", Box::new(runner))
}
