//! Tracing subscriber initialization.
//!
//! `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::{LogFormat, LoggingConfig, SpanEvents};

/// Build the env filter: `RUST_LOG` when set, otherwise `pnl_journal=<level>`.
#[must_use]
pub fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pnl_journal={}", config.level)))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for output.
///
/// Calling this more than once is a no-op.
pub fn init_tracing(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config))
        .with_span_events(fmt_span(config.span_events))
        .with_writer(std::io::stderr);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

fn fmt_span(events: SpanEvents) -> FmtSpan {
    match events {
        SpanEvents::None => FmtSpan::NONE,
        SpanEvents::Close => FmtSpan::CLOSE,
        SpanEvents::Full => FmtSpan::FULL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_span_mapping() {
        assert_eq!(fmt_span(SpanEvents::None), FmtSpan::NONE);
        assert_eq!(fmt_span(SpanEvents::Close), FmtSpan::CLOSE);
        assert_eq!(fmt_span(SpanEvents::Full), FmtSpan::FULL);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = LoggingConfig::default();
        init_tracing(&config);
        init_tracing(&config);
    }

    #[test]
    fn test_build_env_filter_uses_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        let filter = build_env_filter(&config);
        if std::env::var("RUST_LOG").is_err() {
            assert!(filter.to_string().contains("pnl_journal=debug"));
        }
    }
}
