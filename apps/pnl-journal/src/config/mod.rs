//! Configuration module for the trade journal.
//!
//! Provides configuration loading, validation, and environment variable
//! interpolation for the ledger, statistics engine, session, and logging.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pnl_journal::config::{Config, load_config};
//!
//! // Load from default path (pnl-journal.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/journal.yaml"))?;
//!
//! println!("confirm clear: {}", config.session.confirm_clear);
//! ```

mod instruments;
mod observability;
mod session;
mod statistics;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use instruments::InstrumentsConfig;
pub use observability::{LogFormat, LoggingConfig, ObservabilityConfig, SpanEvents};
pub use session::SessionConfig;
pub use statistics::StatisticsConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "pnl-journal.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Instrument tick values.
    #[serde(default)]
    pub instruments: InstrumentsConfig,
    /// Statistics engine configuration.
    #[serde(default)]
    pub statistics: StatisticsConfig,
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to `pnl-journal.yaml`.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map(|m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config
        .instruments
        .tick_table()
        .map_err(|e| ConfigError::ValidationError(format!("instruments: {e}")))?;

    if config.statistics.period_risk_free_rate < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "statistics.period_risk_free_rate must not be negative".to_string(),
        ));
    }

    if config.observability.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "observability.logging.level must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::statistics::BreakEvenPolicy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.instruments.tick_values.len(), 4);
        assert_eq!(config.instruments.tick_values.get("ES"), Some(&dec!(12.5)));
        assert_eq!(config.statistics.period_risk_free_rate, Decimal::ZERO);
        assert_eq!(
            config.statistics.classification.partition,
            BreakEvenPolicy::Separate
        );
        assert_eq!(
            config.statistics.classification.streaks,
            BreakEvenPolicy::AsLoss
        );
        assert!(config.session.confirm_clear);
        assert_eq!(config.observability.logging.level, "info");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let config = match load_config_from_string("{}") {
            Ok(c) => c,
            Err(e) => panic!("should load empty config: {e}"),
        };
        assert_eq!(config.instruments.tick_values.get("NQ"), Some(&dec!(5)));
        assert!(config.session.confirm_clear);
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
instruments:
  tick_values:
    CL: "10"
    MES: "1.25"
statistics:
  period_risk_free_rate: "0.5"
  classification:
    partition: as_loss
    streaks: separate
session:
  confirm_clear: false
observability:
  logging:
    level: debug
    format: json
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };
        assert_eq!(config.instruments.tick_values.len(), 2);
        assert_eq!(config.instruments.tick_values.get("MES"), Some(&dec!(1.25)));
        assert_eq!(config.statistics.period_risk_free_rate, dec!(0.5));
        assert_eq!(
            config.statistics.classification.partition,
            BreakEvenPolicy::AsLoss
        );
        assert_eq!(
            config.statistics.classification.streaks,
            BreakEvenPolicy::Separate
        );
        assert!(!config.session.confirm_clear);
        assert_eq!(config.observability.logging.format, LogFormat::Json);
        assert_eq!(config.observability.logging.span_events, SpanEvents::Close);
    }

    #[test]
    fn test_validation_non_positive_tick_value() {
        let yaml = r#"
instruments:
  tick_values:
    NQ: "0"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero tick value");
        };
        assert!(err.to_string().contains("instruments"));
    }

    #[test]
    fn test_validation_empty_instruments() {
        let yaml = r"
instruments:
  tick_values: {}
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty instruments");
        };
        assert!(err.to_string().contains("at least one instrument"));
    }

    #[test]
    fn test_validation_negative_risk_free_rate() {
        let yaml = r#"
statistics:
  period_risk_free_rate: "-1"
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for negative risk-free rate");
        };
        assert!(err.to_string().contains("period_risk_free_rate"));
    }

    #[test]
    fn test_validation_invalid_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for invalid log format");
        };
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_empty_log_level() {
        let yaml = r#"
observability:
  logging:
    level: "${PNL_JOURNAL_TEST_UNSET_LEVEL}"
    span_events: full
"#;
        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty log level");
        };
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "level: ${PNL_JOURNAL_TEST_NONEXISTENT_VAR:-warn}";
        assert_eq!(interpolate_env_vars(input), "level: warn");
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "level: ${PNL_JOURNAL_TEST_UNLIKELY_TO_EXIST}";
        assert_eq!(interpolate_env_vars(input), "level: ");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_uses_existing() {
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);
        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_load_config_from_file() {
        let Ok(mut file) = tempfile::NamedTempFile::new() else {
            panic!("temp file should be created");
        };
        let Ok(()) = writeln!(file, "session:\n  confirm_clear: false") else {
            panic!("temp file should be writable");
        };
        let Some(path) = file.path().to_str() else {
            panic!("temp path should be utf-8");
        };

        let config = match load_config(Some(path)) {
            Ok(c) => c,
            Err(e) => panic!("should load config file: {e}"),
        };
        assert!(!config.session.confirm_clear);
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/pnl-journal.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
