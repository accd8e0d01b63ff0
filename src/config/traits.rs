//! The configuration capability consumed by command builders.

use std::path::Path;

/// Read-only access to application settings.
///
/// Builders hand out `Arc<dyn Config>` handles, so command code never
/// depends on how settings are stored. Keys use dot notation
/// (`section.field`).
///
/// # Example
///
/// ```rust,ignore
/// use cmdkit::config::Config;
///
/// fn greeting(config: &dyn Config) -> String {
///     config.get_or("values.greeting", "hello")
/// }
/// ```
pub trait Config: Send + Sync {
    /// Look up a setting as a string
    fn get(&self, key: &str) -> Option<String>;

    /// All keys this configuration can answer, sorted
    fn keys(&self) -> Vec<String>;

    /// Backing file, if the configuration was loaded from (or saves to) disk
    fn file(&self) -> Option<&Path>;

    /// Look up a setting, falling back to `default` when unset
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Look up a boolean setting
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| match v.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Some(true),
            "false" | "no" | "0" | "off" => Some(false),
            _ => None,
        })
    }

    /// Look up an unsigned numeric setting
    fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapConfig(BTreeMap<String, String>);

    impl Config for MapConfig {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn keys(&self) -> Vec<String> {
            self.0.keys().cloned().collect()
        }

        fn file(&self) -> Option<&Path> {
            None
        }
    }

    fn config(pairs: &[(&str, &str)]) -> MapConfig {
        MapConfig(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_provided_accessors() {
        let cfg = config(&[("a.flag", "yes"), ("a.count", " 42 "), ("a.bad", "maybe")]);

        assert_eq!(cfg.get_bool("a.flag"), Some(true));
        assert_eq!(cfg.get_bool("a.bad"), None);
        assert_eq!(cfg.get_u64("a.count"), Some(42));
        assert_eq!(cfg.get_u64("a.flag"), None);
        assert_eq!(cfg.get_or("missing", "fallback"), "fallback");
        assert_eq!(cfg.get_or("a.flag", "fallback"), "yes");
    }
}
