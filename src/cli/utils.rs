//! Shared utility functions for CLI binaries

use colored::*;

use crate::cli::error::CliError;

/// Display a user-friendly error message with suggestions
pub fn display_error_with_suggestions<E: std::fmt::Display>(
    error: &E,
    context: &str,
    app_name: Option<&str>,
) {
    eprintln!("{}", render_error_with_suggestions(error, context, app_name));
}

/// The text [`display_error_with_suggestions`] prints
pub fn render_error_with_suggestions<E: std::fmt::Display>(
    error: &E,
    context: &str,
    app_name: Option<&str>,
) -> String {
    let app = app_name.unwrap_or("cmdkit");
    let mut lines = vec![
        format!("{} {}", "Error:".red().bold(), context),
        format!("   {}", error.to_string().red()),
    ];

    let error_str = error.to_string().to_lowercase();
    let suggestions: Vec<String> = if error_str.contains("configuration") {
        vec![
            format!("Run '{} config' to inspect the active settings", app),
            "Set CMDKIT_CONFIG to point at a different config file".to_string(),
        ]
    } else if error_str.contains("cache") {
        vec![
            format!("Run '{} cache clear' to reset the cache", app),
            "Set CMDKIT_CACHE to use a different cache file".to_string(),
        ]
    } else if error_str.contains("unknown command") || error_str.contains("no command given") {
        vec![format!("Run '{} --help' to list available commands", app)]
    } else if error_str.contains("permission denied") {
        vec![
            "Check file permissions".to_string(),
            format!("Ensure the {} config directory is writable", app),
        ]
    } else {
        Vec::new()
    };

    if !suggestions.is_empty() {
        lines.push(format!("{}", "Suggestions:".blue()));
        lines.extend(suggestions.iter().map(|s| format!("   • {}", s)));
    }

    lines.join("\n")
}

/// Process exit status for a failed command
pub fn exit_code(error: &CliError) -> i32 {
    match error {
        CliError::ArgumentError(_) | CliError::InvalidInput(_) | CliError::UnknownCommand(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_match_error_kind() {
        colored::control::set_override(false);

        let text = render_error_with_suggestions(
            &CliError::ConfigError("bad toml".to_string()),
            "loading settings",
            Some("pizza"),
        );
        assert!(text.contains("Error: loading settings"));
        assert!(text.contains("pizza config"));

        let plain = render_error_with_suggestions(&"boom", "running", None);
        assert!(!plain.contains("Suggestions"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&CliError::invalid_input("x")), 2);
        assert_eq!(exit_code(&CliError::execution("x")), 1);
    }
}
