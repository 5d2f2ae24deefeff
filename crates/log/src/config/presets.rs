//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Filter directive variable, checked before `RUST_LOG`
pub const LEVEL_ENV: &str = "FULFIL_LOG";

/// Output format variable
pub const FORMAT_ENV: &str = "FULFIL_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // Unknown formats fall back to compact
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration (everything, no colours or timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_prefers_own_variable() {
        let config = Config::from_lookup(lookup(&[(LEVEL_ENV, "trace"), ("RUST_LOG", "warn")]));
        assert_eq!(config.level, "trace");
    }

    #[test]
    fn test_from_lookup_falls_back_to_rust_log() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn test_from_lookup_format() {
        let config = Config::from_lookup(lookup(&[(FORMAT_ENV, "json")]));
        assert_eq!(config.format, Format::Json);

        let config = Config::from_lookup(lookup(&[(FORMAT_ENV, "xml")]));
        assert_eq!(config.format, Format::Compact);
    }

    #[test]
    fn test_empty_lookup_is_default() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Config::development().format, Format::Pretty);
        assert!(Config::development().display.colors);
        assert_eq!(Config::production().format, Format::Json);
        assert!(Config::production().display.flatten);
        assert!(!Config::test().display.time);
    }
}
