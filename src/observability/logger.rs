//! Markdown run log for command invocations.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, defaulting to `Info` for anything unrecognized
    pub fn parse(level: &str) -> Self {
        match level.trim().to_uppercase().as_str() {
            "DEBUG" | "TRACE" => LogLevel::Debug,
            "WARN" | "WARNING" => LogLevel::Warn,
            "ERROR" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Logger for command runs.
///
/// Entries are appended to a markdown file and mirrored as `tracing`
/// events. Nothing is printed to the terminal, so command output stays
/// untouched.
#[derive(Debug)]
pub struct Logger {
    log_file: PathBuf,
    log_level: LogLevel,
}

impl Logger {
    /// Initialize logger.
    ///
    /// # Arguments
    /// * `log_file` - Path to log file. If None, creates a timestamped file in temp directory.
    /// * `log_level` - Logging level (defaults to "INFO").
    pub fn new(log_file: Option<&Path>, log_level: Option<&str>) -> Result<Self> {
        let log_file = match log_file {
            Some(p) => p.to_path_buf(),
            None => std::env::temp_dir().join("cmdkit-logs").join(format!(
                "run_{}_{}.md",
                Utc::now().timestamp_millis(),
                std::process::id()
            )),
        };

        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let logger = Self {
            log_file,
            log_level: LogLevel::parse(log_level.unwrap_or("INFO")),
        };

        if !logger.log_file.exists() {
            logger.initialize_log_file()?;
        }

        Ok(logger)
    }

    fn initialize_log_file(&self) -> Result<()> {
        let mut file = File::create(&self.log_file)
            .with_context(|| format!("Failed to create log file: {}", self.log_file.display()))?;

        let now: DateTime<Utc> = Utc::now();

        writeln!(file, "# Command Run Log\n")?;
        writeln!(file, "Log started: {}\n", now.to_rfc3339())?;
        writeln!(file, "---\n")?;

        Ok(())
    }

    fn append_to_log(&self, content: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .with_context(|| format!("Failed to open log file: {}", self.log_file.display()))?;

        write!(file, "{}", content).with_context(|| "Failed to write to log file")?;

        Ok(())
    }

    /// Whether entries at `level` are written
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.log_level
    }

    /// Log the start of a process run.
    pub fn log_run_start(&self, app: &str, version: &str) -> Result<()> {
        if !self.enabled(LogLevel::Info) {
            return Ok(());
        }
        let content = format!(
            "## Run Started - {}\n\n**App:** {} {}\n**Pid:** {}\n\n",
            Utc::now().to_rfc3339(),
            app,
            version,
            std::process::id()
        );
        self.append_to_log(&content)?;
        tracing::info!(app, version, "run started");
        Ok(())
    }

    /// Log that a command is about to run.
    ///
    /// # Arguments
    /// * `command` - Command name.
    /// * `args` - Arguments handed to the command.
    pub fn log_command_start(&self, command: &str, args: &[String]) -> Result<()> {
        if !self.enabled(LogLevel::Debug) {
            return Ok(());
        }
        let content = format!(
            "### Command Started - {}\n\n**Command:** `{}`\n**Args:** `{}`\n\n",
            Utc::now().to_rfc3339(),
            command,
            args.join(" ")
        );
        self.append_to_log(&content)?;
        tracing::debug!(command, ?args, "command started");
        Ok(())
    }

    /// Log the outcome of a command.
    ///
    /// # Arguments
    /// * `command` - Command name.
    /// * `error` - The failure message, or None on success.
    /// * `elapsed_ms` - Wall time spent in the command.
    pub fn log_command_result(
        &self,
        command: &str,
        error: Option<&str>,
        elapsed_ms: u128,
    ) -> Result<()> {
        let level = if error.is_some() {
            LogLevel::Error
        } else {
            LogLevel::Info
        };
        if !self.enabled(level) {
            return Ok(());
        }

        let mut content = format!(
            concat!(
                "### Command Finished - {}\n\n",
                "**Command:** `{}`\n**Status:** {}\n**Elapsed:** {} ms\n\n"
            ),
            Utc::now().to_rfc3339(),
            command,
            if error.is_some() { "failed" } else { "ok" },
            elapsed_ms
        );
        if let Some(err) = error {
            content.push_str(&format!("**Error:** {}\n\n", err));
            tracing::error!(command, error = err, "command failed");
        } else {
            tracing::info!(command, elapsed_ms = elapsed_ms as u64, "command finished");
        }

        self.append_to_log(&content)
    }

    /// Log custom content.
    ///
    /// # Arguments
    /// * `title` - Log entry title.
    /// * `content` - Log content.
    /// * `level` - Log level name (defaults to "INFO").
    pub fn log_custom(&self, title: &str, content: &str, level: Option<&str>) -> Result<()> {
        let level = LogLevel::parse(level.unwrap_or("INFO"));
        if !self.enabled(level) {
            return Ok(());
        }
        let log_content = format!(
            "### {} - {} [{}]\n\n{}\n\n",
            title,
            Utc::now().to_rfc3339(),
            level.as_str(),
            content
        );
        self.append_to_log(&log_content)?;

        match level {
            LogLevel::Error => tracing::error!("{}: {}", title, content),
            LogLevel::Warn => tracing::warn!("{}: {}", title, content),
            LogLevel::Debug => tracing::debug!("{}: {}", title, content),
            LogLevel::Info => tracing::info!("{}: {}", title, content),
        }
        Ok(())
    }

    /// Get the log file path.
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Get the log level.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

#[cfg(test)]
mod tests;
