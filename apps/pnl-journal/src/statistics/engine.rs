//! Pure statistics over a ledger snapshot.
//!
//! Every function takes the ordered records by reference, never mutates them,
//! and returns a defined fallback for empty input instead of failing.

use std::borrow::Borrow;

use rust_decimal::Decimal;

use super::classification::{BreakEvenPolicy, Partition, ProfitFactor, TradeOutcome};
use super::constants::HUNDRED;
use super::math::{downside_deviation, mean, saturating_sum, std_dev};
use crate::ledger::TradeRecord;

/// Sum of `pnl`; 0 for an empty snapshot.
#[must_use]
pub fn total_pnl(records: &[TradeRecord]) -> Decimal {
    saturating_sum(records.iter().map(|r| r.pnl))
}

/// Win/loss/break-even partition with break-even trades kept separate.
#[must_use]
pub fn partition(records: &[TradeRecord]) -> Partition<'_> {
    Partition::new(records, BreakEvenPolicy::Separate)
}

/// Win/loss/break-even partition under an explicit break-even policy.
#[must_use]
pub fn partition_with(records: &[TradeRecord], policy: BreakEvenPolicy) -> Partition<'_> {
    Partition::new(records, policy)
}

/// Percentage of trades with `pnl > 0`; 0 for an empty snapshot.
#[must_use]
pub fn win_rate(records: &[TradeRecord]) -> Decimal {
    if records.is_empty() {
        return Decimal::ZERO;
    }
    let winners = records.iter().filter(|r| r.is_winner()).count();
    Decimal::from(winners as u64) / Decimal::from(records.len() as u64) * HUNDRED
}

/// Mean `pnl` over any subset of records; `None` when the subset is empty.
///
/// Accepts both a snapshot (`&[TradeRecord]`) and a partition bucket
/// (`&[&TradeRecord]`).
#[must_use]
pub fn average_pnl<R: Borrow<TradeRecord>>(subset: &[R]) -> Option<Decimal> {
    let values: Vec<Decimal> = subset.iter().map(|r| r.borrow().pnl).collect();
    mean(&values)
}

/// Largest and smallest single-trade `pnl`; `None` for an empty snapshot.
#[must_use]
pub fn extrema(records: &[TradeRecord]) -> Option<(Decimal, Decimal)> {
    let first = records.first()?.pnl;
    Some(records.iter().fold((first, first), |(max, min), r| {
        (max.max(r.pnl), min.min(r.pnl))
    }))
}

/// Sum of commissions paid.
#[must_use]
pub fn total_commission(records: &[TradeRecord]) -> Decimal {
    saturating_sum(records.iter().map(|r| r.commission))
}

/// Longest win run and longest not-win run, folding break-even into losses.
#[must_use]
pub fn consecutive_streaks(records: &[TradeRecord]) -> (u64, u64) {
    consecutive_streaks_with(records, BreakEvenPolicy::AsLoss)
}

/// Longest win run and longest loss run under an explicit break-even policy.
///
/// With [`BreakEvenPolicy::Separate`] a break-even trade ends the current run
/// without starting a new one.
#[must_use]
pub fn consecutive_streaks_with(records: &[TradeRecord], policy: BreakEvenPolicy) -> (u64, u64) {
    let mut max_wins = 0u64;
    let mut max_losses = 0u64;
    let mut current_wins = 0u64;
    let mut current_losses = 0u64;

    for record in records {
        match policy.classify(record) {
            TradeOutcome::Win => {
                current_wins += 1;
                current_losses = 0;
                max_wins = max_wins.max(current_wins);
            }
            TradeOutcome::Loss => {
                current_losses += 1;
                current_wins = 0;
                max_losses = max_losses.max(current_losses);
            }
            TradeOutcome::BreakEven => {
                current_wins = 0;
                current_losses = 0;
            }
        }
    }

    (max_wins, max_losses)
}

/// Gross profit / |gross loss|, with sentinels for a zero denominator.
#[must_use]
pub fn profit_factor(records: &[TradeRecord]) -> ProfitFactor {
    partition(records).profit_factor()
}

/// Probability-weighted mean P&L per trade; `None` for an empty snapshot.
#[must_use]
pub fn trade_expectancy(records: &[TradeRecord]) -> Option<Decimal> {
    partition(records).expectancy()
}

/// `(mean(pnl) - risk_free) / stddev(pnl)` over per-trade P&L.
///
/// `None` with fewer than 2 trades, zero dispersion, or a dispersion too large
/// to represent.
#[must_use]
pub fn sharpe_like_ratio(
    records: &[TradeRecord],
    period_risk_free_rate: Decimal,
) -> Option<Decimal> {
    if records.len() < 2 {
        return None;
    }

    let values: Vec<Decimal> = records.iter().map(|r| r.pnl).collect();
    let avg = mean(&values)?;
    let std = std_dev(&values)?;

    if std == Decimal::ZERO {
        return None;
    }

    avg.checked_sub(period_risk_free_rate)?.checked_div(std)
}

/// `(mean(pnl) - risk_free) / downside_deviation(pnl)`.
///
/// `None` with fewer than 2 trades or no trade below the risk-free rate.
#[must_use]
pub fn sortino_like_ratio(
    records: &[TradeRecord],
    period_risk_free_rate: Decimal,
) -> Option<Decimal> {
    if records.len() < 2 {
        return None;
    }

    let values: Vec<Decimal> = records.iter().map(|r| r.pnl).collect();
    let avg = mean(&values)?;
    let downside = downside_deviation(&values, period_risk_free_rate)?;

    if downside == Decimal::ZERO {
        return None;
    }

    avg.checked_sub(period_risk_free_rate)?.checked_div(downside)
}

/// Largest peak-to-trough decline of cumulative P&L as a percentage of the
/// highest peak.
///
/// The running peak starts at the first cumulative value. Returns 0 for an
/// empty snapshot or when the highest peak is not positive, and saturates at
/// `Decimal::MAX` when the ratio exceeds the representable range.
#[must_use]
pub fn max_drawdown(records: &[TradeRecord]) -> Decimal {
    let Some((max_drawdown, highest_peak)) = drawdown_extent(records) else {
        return Decimal::ZERO;
    };
    if highest_peak <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    max_drawdown
        .checked_div(highest_peak)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .unwrap_or(Decimal::MAX)
}

/// Largest peak-to-trough decline of cumulative P&L in currency units.
#[must_use]
pub fn max_drawdown_amount(records: &[TradeRecord]) -> Decimal {
    drawdown_extent(records).map_or(Decimal::ZERO, |(dd, _)| dd)
}

fn drawdown_extent(records: &[TradeRecord]) -> Option<(Decimal, Decimal)> {
    let mut peak = records.first()?.cumulative_pnl;
    let mut max_drawdown = Decimal::ZERO;

    for record in records {
        peak = peak.max(record.cumulative_pnl);
        max_drawdown = max_drawdown.max(peak.saturating_sub(record.cumulative_pnl));
    }

    Some((max_drawdown, peak))
}

/// `|average win / average loss|`; `None` if either side is empty.
#[must_use]
pub fn risk_reward_ratio(records: &[TradeRecord]) -> Option<Decimal> {
    partition(records).risk_reward_ratio()
}

/// Sum of winning P&L.
#[must_use]
pub fn gross_profit(records: &[TradeRecord]) -> Decimal {
    partition(records).gross_profit()
}

/// Absolute sum of losing P&L.
#[must_use]
pub fn gross_loss(records: &[TradeRecord]) -> Decimal {
    partition(records).gross_loss()
}
