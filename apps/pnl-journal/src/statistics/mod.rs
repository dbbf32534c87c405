//! Trade statistics engine.
//!
//! Pure functions that turn an ordered ledger snapshot into derived metrics:
//! - Total P&L, gross profit/loss, commission
//! - Win/loss/break-even partition and win rate
//! - Consecutive win/loss streaks
//! - Profit factor, expectancy, risk/reward
//! - Sharpe- and Sortino-style ratios over per-trade P&L
//! - Maximum drawdown of cumulative P&L
//!
//! Degenerate inputs never fail: every metric has a fallback of zero,
//! `None` ("not applicable"), or an explicit infinite sentinel.

mod breakdown;
mod classification;
mod constants;
mod curves;
mod engine;
mod format;
mod math;
mod report;

pub use breakdown::{SymbolStats, symbol_breakdown};
pub use classification::{
    BreakEvenPolicy, ClassificationRule, Partition, ProfitFactor, TradeOutcome,
};
pub use curves::{DrawdownPoint, EquityPoint, drawdown_curve, equity_curve};
pub use engine::{
    average_pnl, consecutive_streaks, consecutive_streaks_with, extrema, gross_loss,
    gross_profit, max_drawdown, max_drawdown_amount, partition, partition_with,
    profit_factor, risk_reward_ratio, sharpe_like_ratio, sortino_like_ratio, total_commission,
    total_pnl, trade_expectancy, win_rate,
};
pub use format::{format_amount, format_pct, format_ratio};
pub use report::{MetricValue, StatisticsReport};
