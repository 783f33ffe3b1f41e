use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,urlrel_core=debug";

/// Logging section (`[logging]` in the TOML).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"warn,urlrel_core=trace"`.
    pub filter: String,
    /// Emit ANSI colors on stderr.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            ansi: false,
        }
    }
}

/// Configuration supplied by the embedding application as TOML text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        toml::from_str(data).context("parse urlrel config")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize urlrel config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Config::default();
        assert_eq!(cfg.logging.filter, "info,urlrel_core=debug");
        assert!(!cfg.logging.ansi);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Config {
            logging: LoggingConfig {
                filter: "trace".to_string(),
                ansi: true,
            },
        };
        let toml = cfg.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn config_toml_partial_logging() {
        let toml = r#"
            [logging]
            filter = "warn,urlrel_core=trace"
        "#;
        let cfg = Config::from_toml_str(toml).unwrap();
        assert_eq!(cfg.logging.filter, "warn,urlrel_core=trace");
        assert!(!cfg.logging.ansi);
    }

    #[test]
    fn config_toml_invalid_type() {
        let toml = r#"
            [logging]
            ansi = "yes"
        "#;
        let err = Config::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("parse urlrel config"));
    }
}
