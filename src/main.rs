//! `cmdkit` - demo application wiring the built-in commands.

use std::path::Path;

use colored::*;

use cmdkit::cli::{
    commands, display_error_with_suggestions, exit_code, Builder, CommandTree, FullBuilder,
    MinimalBuilder,
};
use cmdkit::config::{expand_path, EnvironmentLoader};
use cmdkit::observability::Logger;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let env = EnvironmentLoader::new(Some(Path::new(".env")));

    let builder: Box<dyn Builder> = match FullBuilder::from_environment(&env) {
        Ok(builder) => Box::new(builder),
        Err(e) => {
            display_error_with_suggestions(
                &e,
                "Continuing without configuration or cache",
                Some(APP_NAME),
            );
            Box::new(MinimalBuilder::new())
        }
    };

    let config = builder.config();
    let app_name = config
        .as_ref()
        .map(|c| c.get_or("app.name", APP_NAME))
        .unwrap_or_else(|| APP_NAME.to_string());
    let app_version = config
        .as_ref()
        .map(|c| c.get_or("app.version", APP_VERSION))
        .unwrap_or_else(|| APP_VERSION.to_string());

    if config.as_ref().and_then(|c| c.get_bool("output.color")) == Some(false) {
        colored::control::set_override(false);
    }

    let cache_missing = builder.db().is_none()
        && config.as_ref().and_then(|c| c.get_bool("cache.enabled")) == Some(true);
    if cache_missing {
        eprintln!(
            "{} cache could not be opened; continuing without it",
            "Warning:".yellow().bold()
        );
        eprintln!("   Set CMDKIT_CACHE or delete the cache file to start fresh");
    }

    let mut tree = CommandTree::new(app_name.clone(), app_version.clone())
        .about("Command Builder Kit demo")
        .with_output(builder.output());

    // Only log runs when a log file is configured
    if let Some(log_file) = config.as_ref().and_then(|c| c.get("logging.log_file")) {
        let level = env
            .log_level()
            .or_else(|| config.as_ref().and_then(|c| c.get("logging.log_level")));
        match Logger::new(Some(&expand_path(&log_file)), level.as_deref()) {
            Ok(logger) => {
                if let Err(e) = logger.log_run_start(&app_name, &app_version) {
                    tracing::warn!("failed to write run log: {:#}", e);
                }
                if cache_missing {
                    if let Err(e) = logger.log_custom(
                        "Cache unavailable",
                        "The cache file could not be opened; commands run without it.",
                        Some("WARN"),
                    ) {
                        tracing::warn!("failed to write run log: {:#}", e);
                    }
                }
                tree = tree.with_logger(logger);
            }
            Err(e) => tracing::warn!("run log disabled: {:#}", e),
        }
    }

    let registered =
        commands::register_builtins(builder.as_ref(), &mut tree, &app_name, &app_version);
    if let Err(e) = registered {
        display_error_with_suggestions(&e, "Failed to register commands", Some(&app_name));
        std::process::exit(exit_code(&e));
    }

    if let Err(e) = tree.run() {
        display_error_with_suggestions(&e, "Command failed", Some(&app_name));
        std::process::exit(exit_code(&e));
    }
}
