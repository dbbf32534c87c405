//! Statistics report handed to the presentation layer.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::breakdown::{SymbolStats, symbol_breakdown};
use super::classification::{Partition, ProfitFactor};
use super::engine::{
    average_pnl, consecutive_streaks_with, extrema, max_drawdown, max_drawdown_amount,
    sharpe_like_ratio, sortino_like_ratio, total_commission, total_pnl,
};
use super::format::{format_amount, format_pct, format_ratio};
use crate::config::StatisticsConfig;
use crate::ledger::TradeRecord;

/// Every metric computed for one ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsReport {
    // Trade counts
    /// Total number of trades.
    pub total_trades: u64,
    /// Number of winning trades.
    pub winning_trades: u64,
    /// Number of losing trades.
    pub losing_trades: u64,
    /// Number of break-even trades.
    pub break_even_trades: u64,

    // P&L
    /// Net P&L across all trades.
    pub total_pnl: Decimal,
    /// Gross profit.
    pub gross_profit: Decimal,
    /// Gross loss (positive value).
    pub gross_loss: Decimal,
    /// Total commission paid.
    pub total_commission: Decimal,
    /// Win rate (0-100).
    pub win_rate: Decimal,
    /// Mean P&L per trade.
    pub average_pnl: Option<Decimal>,
    /// Mean winning trade.
    pub average_win: Option<Decimal>,
    /// Mean losing trade (negative value).
    pub average_loss: Option<Decimal>,
    /// Largest single-trade P&L.
    pub max_pnl: Option<Decimal>,
    /// Smallest single-trade P&L.
    pub min_pnl: Option<Decimal>,

    // Ratios
    /// Profit factor (gross profit / gross loss).
    pub profit_factor: ProfitFactor,
    /// Expectancy per trade.
    pub expectancy: Option<Decimal>,
    /// |avg win / avg loss|.
    pub risk_reward_ratio: Option<Decimal>,
    /// Per-trade Sharpe-style ratio.
    pub sharpe_ratio: Option<Decimal>,
    /// Per-trade Sortino-style ratio.
    pub sortino_ratio: Option<Decimal>,

    // Drawdown and streaks
    /// Maximum drawdown (0-100, relative to the highest peak).
    pub max_drawdown_pct: Decimal,
    /// Maximum drawdown in currency units.
    pub max_drawdown_amount: Decimal,
    /// Maximum consecutive wins.
    pub max_consecutive_wins: u64,
    /// Maximum consecutive losses.
    pub max_consecutive_losses: u64,

    /// Per-symbol figures.
    pub by_symbol: BTreeMap<String, SymbolStats>,
}

impl StatisticsReport {
    /// Compute the full report for a snapshot.
    #[must_use]
    pub fn from_records(records: &[TradeRecord], config: &StatisticsConfig) -> Self {
        let partition = Partition::new(records, config.classification.partition);
        let (max_wins, max_losses) =
            consecutive_streaks_with(records, config.classification.streaks);
        let extrema = extrema(records);
        let risk_free = config.period_risk_free_rate;

        Self {
            total_trades: records.len() as u64,
            winning_trades: partition.winning.len() as u64,
            losing_trades: partition.losing.len() as u64,
            break_even_trades: partition.break_even.len() as u64,
            total_pnl: total_pnl(records),
            gross_profit: partition.gross_profit(),
            gross_loss: partition.gross_loss(),
            total_commission: total_commission(records),
            win_rate: partition.win_rate(),
            average_pnl: average_pnl(records),
            average_win: partition.average_win(),
            average_loss: partition.average_loss(),
            max_pnl: extrema.map(|(max, _)| max),
            min_pnl: extrema.map(|(_, min)| min),
            profit_factor: partition.profit_factor(),
            expectancy: partition.expectancy(),
            risk_reward_ratio: partition.risk_reward_ratio(),
            sharpe_ratio: sharpe_like_ratio(records, risk_free),
            sortino_ratio: sortino_like_ratio(records, risk_free),
            max_drawdown_pct: max_drawdown(records),
            max_drawdown_amount: max_drawdown_amount(records),
            max_consecutive_wins: max_wins,
            max_consecutive_losses: max_losses,
            by_symbol: symbol_breakdown(records),
        }
    }

    /// Flat metric-name to value mapping for tables and metric widgets.
    #[must_use]
    pub fn metrics(&self) -> BTreeMap<&'static str, MetricValue> {
        use MetricValue::{Amount, Count, Percent};

        let mut metrics = BTreeMap::from([
            ("total_trades", Count(self.total_trades)),
            ("winning_trades", Count(self.winning_trades)),
            ("losing_trades", Count(self.losing_trades)),
            ("break_even_trades", Count(self.break_even_trades)),
            ("total_pnl", Amount(self.total_pnl)),
            ("gross_profit", Amount(self.gross_profit)),
            ("gross_loss", Amount(self.gross_loss)),
            ("total_commission", Amount(self.total_commission)),
            ("win_rate", Percent(self.win_rate)),
            ("max_drawdown_pct", Percent(self.max_drawdown_pct)),
            ("max_drawdown_amount", Amount(self.max_drawdown_amount)),
            ("max_consecutive_wins", Count(self.max_consecutive_wins)),
            ("max_consecutive_losses", Count(self.max_consecutive_losses)),
        ]);

        metrics.insert("average_pnl", MetricValue::amount(self.average_pnl));
        metrics.insert("average_win", MetricValue::amount(self.average_win));
        metrics.insert("average_loss", MetricValue::amount(self.average_loss));
        metrics.insert("max_pnl", MetricValue::amount(self.max_pnl));
        metrics.insert("min_pnl", MetricValue::amount(self.min_pnl));
        metrics.insert("expectancy", MetricValue::amount(self.expectancy));
        metrics.insert("risk_reward_ratio", MetricValue::ratio(self.risk_reward_ratio));
        metrics.insert("sharpe_ratio", MetricValue::ratio(self.sharpe_ratio));
        metrics.insert("sortino_ratio", MetricValue::ratio(self.sortino_ratio));
        metrics.insert("profit_factor", self.profit_factor.into());

        metrics
    }
}

/// A single displayable metric value, including degenerate-case sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// Currency amount.
    Amount(Decimal),
    /// Percentage on a 0-100 scale.
    Percent(Decimal),
    /// Dimensionless ratio.
    Ratio(Decimal),
    /// Count of trades.
    Count(u64),
    /// Metric does not apply to this snapshot.
    NotApplicable,
    /// Unbounded ratio (zero denominator).
    Infinite,
}

impl MetricValue {
    fn amount(value: Option<Decimal>) -> Self {
        value.map_or(Self::NotApplicable, Self::Amount)
    }

    fn ratio(value: Option<Decimal>) -> Self {
        value.map_or(Self::NotApplicable, Self::Ratio)
    }
}

impl From<ProfitFactor> for MetricValue {
    fn from(pf: ProfitFactor) -> Self {
        match pf {
            ProfitFactor::Finite(v) => Self::Ratio(v),
            ProfitFactor::Infinite => Self::Infinite,
            ProfitFactor::Undefined => Self::NotApplicable,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(v) => f.write_str(&format_amount(*v)),
            Self::Percent(v) => f.write_str(&format_pct(*v)),
            Self::Ratio(v) => f.write_str(&format_ratio(Some(*v))),
            Self::Count(n) => write!(f, "{n}"),
            Self::NotApplicable => f.write_str("N/A"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}
