//! Environment variable loading and management.
//!
//! Resolves where the configuration file and cache live. Values come from
//! the process environment, optionally seeded from a `.env` file.

use std::env;
use std::path::{Path, PathBuf};

/// Overrides the configuration file location
pub const CONFIG_ENV: &str = "CMDKIT_CONFIG";
/// Overrides the cache file location
pub const CACHE_ENV: &str = "CMDKIT_CACHE";
/// Overrides the run log level
pub const LOG_ENV: &str = "CMDKIT_LOG";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to .env file. Only an explicitly given file is loaded.
    pub fn new(env_file: Option<&Path>) -> Self {
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!("Failed to load .env file {}: {}", path.display(), e);
                }
            }
        }

        Self {
            env_file: env_file.map(|p| p.to_path_buf()),
        }
    }

    /// The `.env` file this loader was given, if any
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Directory holding this application's files (`~/.config/cmdkit`)
    pub fn app_dir(&self) -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmdkit")
    }

    /// Configuration file path: `$CMDKIT_CONFIG`, else `<app_dir>/config.toml`
    pub fn config_path(&self) -> PathBuf {
        env::var(CONFIG_ENV)
            .ok()
            .map(|p| expand_path(&p))
            .unwrap_or_else(|| self.app_dir().join("config.toml"))
    }

    /// Cache file path: `$CMDKIT_CACHE`, else `configured`, else `<app_dir>/cache.json`
    pub fn cache_path(&self, configured: Option<&str>) -> PathBuf {
        env::var(CACHE_ENV)
            .ok()
            .or_else(|| configured.map(str::to_string))
            .map(|p| expand_path(&p))
            .unwrap_or_else(|| self.app_dir().join("cache.json"))
    }

    /// Log level override from `$CMDKIT_LOG`
    pub fn log_level(&self) -> Option<String> {
        env::var(LOG_ENV).ok().filter(|v| !v.trim().is_empty())
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Expand `~` and `$VARS` in a user-supplied path.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_env_overrides() {
        env::remove_var(CONFIG_ENV);
        env::remove_var(CACHE_ENV);
        let loader = EnvironmentLoader::default();
        assert!(loader.config_path().ends_with("cmdkit/config.toml"));
        assert_eq!(
            loader.cache_path(Some("/srv/cache.json")),
            PathBuf::from("/srv/cache.json")
        );

        env::set_var(CONFIG_ENV, "/etc/cmdkit.toml");
        env::set_var(CACHE_ENV, "/var/cache/cmdkit.json");
        assert_eq!(loader.config_path(), PathBuf::from("/etc/cmdkit.toml"));
        assert_eq!(
            loader.cache_path(Some("/srv/cache.json")),
            PathBuf::from("/var/cache/cmdkit.json")
        );

        env::remove_var(CONFIG_ENV);
        env::remove_var(CACHE_ENV);
    }

    #[test]
    fn test_env_file_loading() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "CMDKIT_TEST_ENV_FILE_VALUE=loaded").unwrap();

        let loader = EnvironmentLoader::new(Some(file.path()));
        assert_eq!(loader.env_file(), Some(file.path()));
        assert_eq!(
            env::var("CMDKIT_TEST_ENV_FILE_VALUE").ok(),
            Some("loaded".to_string())
        );
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_path("~/cmdkit");
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
