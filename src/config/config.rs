//! TOML configuration parsing and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::Config;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub app: AppConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    /// Free-form settings owned by individual commands
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

/// Application identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub log_file: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub path: Option<String>,
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: None,
            ttl_hours: default_ttl_hours(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_ttl_hours() -> u64 {
    12
}

/// Loads and manages TOML configuration.
#[derive(Debug)]
pub struct ConfigurationLoader {
    pub config_path: PathBuf,
    pub config: Configuration,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. If None or missing, uses default config.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config_path = config_path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("config/cmdkit.toml"));

        let config = if config_path.exists() {
            Self::load_config(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "config file missing, using defaults");
            Self::get_default_config()
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Create a configuration loader from a pre-parsed Configuration.
    ///
    /// Nothing is read from disk; `config_path` is only used by [`save`](Self::save).
    pub fn from_config(config: Configuration, config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config,
        }
    }

    /// Load configuration from TOML file.
    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Get default configuration.
    pub fn get_default_config() -> Configuration {
        Configuration {
            app: AppConfig {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            cache: CacheConfig::default(),
            values: BTreeMap::new(),
        }
    }

    /// Write the configuration back to `config_path`.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }

        let content =
            toml::to_string_pretty(&self.config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content).with_context(|| {
            format!("Failed to write config file: {}", self.config_path.display())
        })
    }

    /// Get configuration value by dot-notation key.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match key {
            "app.name" => Some(self.config.app.name.clone()),
            "app.version" => Some(self.config.app.version.clone()),
            "output.color" => Some(self.config.output.color.to_string()),
            "logging.log_file" => self.config.logging.log_file.clone(),
            "logging.log_level" => Some(self.config.logging.log_level.clone()),
            "cache.enabled" => Some(self.config.cache.enabled.to_string()),
            "cache.path" => self.config.cache.path.clone(),
            "cache.ttl_hours" => Some(self.config.cache.ttl_hours.to_string()),
            _ => {
                let name = key.strip_prefix("values.").unwrap_or(key);
                self.config.values.get(name).cloned()
            }
        }
    }
}

impl Config for ConfigurationLoader {
    fn get(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = [
            "app.name",
            "app.version",
            "output.color",
            "logging.log_file",
            "logging.log_level",
            "cache.enabled",
            "cache.path",
            "cache.ttl_hours",
        ]
        .iter()
        .filter(|k| self.get_string(k).is_some())
        .map(|k| k.to_string())
        .collect();

        keys.extend(self.config.values.keys().map(|k| format!("values.{}", k)));
        keys.sort();
        keys
    }

    fn file(&self) -> Option<&Path> {
        Some(&self.config_path)
    }
}
