//! PnL Journal Binary
//!
//! Replays a JSON array of add-trade requests through a journal session and
//! prints the ledger (CSV) followed by the statistics report (JSON).
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pnl-journal -- trades.json
//! cat trades.json | cargo run --bin pnl-journal
//! ```
//!
//! # Environment Variables
//!
//! - `PNL_JOURNAL_CONFIG`: Config file path (default: pnl-journal.yaml, optional)
//! - `RUST_LOG`: Log filter (overrides the configured level)

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use pnl_journal::config::{Config, DEFAULT_CONFIG_PATH, load_config};
use pnl_journal::observability::{init_tracing, log_statistics_summary};
use pnl_journal::{AddTradeRequest, JournalSession};

fn main() -> Result<()> {
    let config = parse_config()?;
    init_tracing(&config.observability.logging);

    tracing::info!("Starting PnL Journal");

    let requests = read_requests(std::env::args().nth(1).as_deref())?;
    let mut session = JournalSession::from_config(&config).context("invalid instrument table")?;

    let mut rejected = 0usize;
    for request in &requests {
        if session.on_add_trade(request).is_err() {
            rejected += 1;
        }
    }

    tracing::info!(
        submitted = requests.len(),
        accepted = session.snapshot().len(),
        rejected,
        "Replay complete"
    );

    let report = session.statistics();
    log_statistics_summary(&report);

    print!("{}", session.ledger().to_csv());
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    );

    Ok(())
}

/// Load configuration from `PNL_JOURNAL_CONFIG`, the default path, or defaults.
fn parse_config() -> Result<Config> {
    if let Ok(path) = std::env::var("PNL_JOURNAL_CONFIG") {
        return load_config(Some(&path)).with_context(|| format!("loading config from {path}"));
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_config(None).context("loading default config");
    }

    Ok(Config::default())
}

/// Read add-trade requests from a file path, or stdin when no path is given.
fn read_requests(path: Option<&str>) -> Result<Vec<AddTradeRequest>> {
    let contents = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading trades from {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading trades from stdin")?;
            buf
        }
    };

    serde_json::from_str(&contents).context("parsing add-trade requests")
}
