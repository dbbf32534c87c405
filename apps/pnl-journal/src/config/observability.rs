//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ObservabilityConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Multi-line, human-oriented.
    Pretty,
    /// Single-line text.
    #[default]
    Compact,
}

/// Span lifecycle events emitted for the journal's handler spans
/// (`on_add_trade`, `statistics`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanEvents {
    /// Events inside spans only.
    None,
    /// One event when a span closes, with its busy/idle timing.
    #[default]
    Close,
    /// New, enter, exit and close events.
    Full,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive level for `pnl_journal` (ignored when `RUST_LOG` is set).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
    /// Span events to log.
    #[serde(default)]
    pub span_events: SpanEvents,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            span_events: SpanEvents::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
