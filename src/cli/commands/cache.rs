//! Cache command implementation
//!
//! Inspects and clears the cache through the builder's [`DataBase`] handle.

use std::sync::Arc;

use chrono::Duration;

use crate::cache::DataBase;
use crate::cli::builder::Builder;
use crate::cli::command::Command;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output::Output;
use crate::cli::runner::Runner;
use crate::config::Config;

/// Runner behind the `cache` command
pub struct CacheRunner {
    db: Option<Arc<dyn DataBase>>,
    config: Option<Arc<dyn Config>>,
    output: Output,
}

impl CacheRunner {
    pub fn new(db: Option<Arc<dyn DataBase>>, output: Output) -> Self {
        Self {
            db,
            config: None,
            output,
        }
    }

    /// Read `cache.ttl_hours` from `config` to flag stale entries
    pub fn with_config(mut self, config: Option<Arc<dyn Config>>) -> Self {
        self.config = config;
        self
    }

    fn max_age(&self) -> Option<Duration> {
        self.config
            .as_ref()
            .and_then(|c| c.get_u64("cache.ttl_hours"))
            .and_then(|hours| i64::try_from(hours).ok())
            .map(Duration::hours)
    }

    fn status(&self, db: &dyn DataBase) -> CliResult<()> {
        let keys = db.keys()?;
        let max_age = self.max_age();
        self.output.line(&format!("Entries: {}", keys.len()))?;
        for key in keys {
            let stamp = db
                .timestamp(&key)?
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string());
            let stale = match max_age {
                Some(age) if db.is_stale(&key, age)? => " [stale]",
                _ => "",
            };
            self.output
                .line(&format!("  {} (updated {}){}", key, stamp, stale))?;
        }
        Ok(())
    }
}

impl Runner for CacheRunner {
    fn run(&self, _cmd: &Command, args: &[String]) -> CliResult<()> {
        let db = match &self.db {
            Some(db) => db.as_ref(),
            None => {
                self.output.line("cache not available")?;
                return Ok(());
            }
        };

        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        match args.as_slice() {
            [] | ["status"] => self.status(db),
            ["get", key] => {
                let value = db
                    .get(key)?
                    .ok_or_else(|| {
                        CliError::invalid_input(format!("no cached value for {}", key))
                    })?;
                self.output.line(&value)?;
                Ok(())
            }
            ["clear"] => {
                db.clear()?;
                self.output.line("cache cleared")?;
                Ok(())
            }
            _ => Err(CliError::invalid_input("usage: cache [status | get <key> | clear]")),
        }
    }
}

/// `cache [status | get <key> | clear]`
pub fn cache_command(builder: &dyn Builder) -> Command {
    let runner = CacheRunner::new(builder.db(), builder.output()).with_config(builder.config());
    builder.build("cache", "Inspect or clear the cache", Box::new(runner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::builder::{FullBuilder, MinimalBuilder};
    use crate::cli::output::SharedBuffer;
    use crate::cli::test_utils::{MockConfig, MockDataBase};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_status_get_clear() {
        let buffer = SharedBuffer::new();
        let db = Arc::new(MockDataBase::new());
        db.put("menu", "cheese").unwrap();
        let config = MockConfig::with_values(&[("cache.ttl_hours", "12")]);
        let builder = FullBuilder::new(Arc::new(config), Some(db.clone() as Arc<dyn DataBase>))
            .with_output(buffer.output());
        let cmd = cache_command(&builder);

        cmd.run(&[]).unwrap();
        assert!(buffer.contents().contains("Entries: 1"));
        assert!(!buffer.contents().contains("[stale]"));

        cmd.run(&args(&["get", "menu"])).unwrap();
        assert!(buffer.contents().contains("cheese\n"));

        cmd.run(&args(&["clear"])).unwrap();
        assert!(db.keys().unwrap().is_empty());

        assert!(cmd.run(&args(&["get", "menu"])).is_err());
        assert!(cmd.run(&args(&["explode"])).is_err());
    }

    #[test]
    fn test_absent_cache_is_not_an_error() {
        let buffer = SharedBuffer::new();
        let runner = CacheRunner::new(MinimalBuilder::new().db(), buffer.output());
        let cmd = Command::new("cache", "", Box::new(runner));

        cmd.run(&args(&["clear"])).unwrap();
        assert_eq!(buffer.contents(), "cache not available\n");
    }

    #[test]
    fn test_zero_ttl_marks_entries_stale() {
        let buffer = SharedBuffer::new();
        let db = Arc::new(MockDataBase::new());
        db.put("menu", "cheese").unwrap();
        let config: Arc<dyn Config> =
            Arc::new(MockConfig::with_values(&[("cache.ttl_hours", "0")]));
        let runner = CacheRunner::new(Some(db as Arc<dyn DataBase>), buffer.output())
            .with_config(Some(config));
        let cmd = Command::new("cache", "", Box::new(runner));

        std::thread::sleep(std::time::Duration::from_millis(5));
        cmd.run(&args(&["status"])).unwrap();
        assert!(buffer.contents().contains("menu"));
        assert!(buffer.contents().contains("[stale]"));
    }
}
