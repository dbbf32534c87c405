//! Structured journal events.
//!
//! # Log Levels
//!
//! - **INFO**: Accepted trades, clear transitions, statistics summaries
//! - **WARN**: Rejected add-trade requests

use tracing::{info, warn};

use crate::ledger::{LedgerError, TradeRecord};
use crate::session::ClearState;
use crate::statistics::StatisticsReport;

/// Log an accepted trade.
pub fn log_trade_accepted(record: &TradeRecord) {
    info!(
        sequence = record.sequence,
        symbol = %record.symbol,
        ticks = record.ticks,
        contracts = record.contracts,
        commission = %record.commission,
        pnl = %record.pnl,
        cumulative_pnl = %record.cumulative_pnl,
        "Trade added"
    );
}

/// Log a rejected add-trade request.
pub fn log_trade_rejected(symbol: &str, error: &LedgerError) {
    warn!(symbol = %symbol, error = %error, "Trade rejected");
}

/// Log a clear-confirmation state change.
pub fn log_clear_transition(from: ClearState, to: ClearState, removed: usize) {
    info!(from = ?from, to = ?to, removed, "Clear state changed");
}

/// Log a one-line statistics summary.
pub fn log_statistics_summary(report: &StatisticsReport) {
    info!(
        total_trades = report.total_trades,
        total_pnl = %report.total_pnl,
        win_rate_pct = %report.win_rate,
        profit_factor = ?report.profit_factor,
        expectancy = ?report.expectancy,
        sharpe_ratio = ?report.sharpe_ratio,
        max_drawdown_pct = %report.max_drawdown_pct,
        max_consecutive_wins = report.max_consecutive_wins,
        max_consecutive_losses = report.max_consecutive_losses,
        "Statistics summary"
    );
}
