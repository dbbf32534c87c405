//! Win/loss classification of trades.
//!
//! Break-even trades (`pnl == 0`) are handled by an explicit
//! [`BreakEvenPolicy`] rather than a hard-coded rule. Defaults:
//!
//! - partition: break-even trades form their own bucket
//! - streaks: break-even trades count as "not a win"

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::HUNDRED;
use super::math::{mean, saturating_sum};
use crate::ledger::TradeRecord;

/// Result class of a single trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeOutcome {
    /// `pnl > 0`.
    Win,
    /// `pnl < 0`, or break-even under [`BreakEvenPolicy::AsLoss`].
    Loss,
    /// `pnl == 0` under [`BreakEvenPolicy::Separate`].
    BreakEven,
}

/// How break-even trades are classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEvenPolicy {
    /// Break-even trades are their own class.
    #[default]
    Separate,
    /// Break-even trades are counted as losses.
    AsLoss,
}

impl BreakEvenPolicy {
    /// Classify a single trade.
    #[must_use]
    pub fn classify(self, record: &TradeRecord) -> TradeOutcome {
        if record.is_winner() {
            TradeOutcome::Win
        } else if record.is_loser() {
            TradeOutcome::Loss
        } else {
            match self {
                Self::Separate => TradeOutcome::BreakEven,
                Self::AsLoss => TradeOutcome::Loss,
            }
        }
    }
}

/// Break-even handling for each statistic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// Policy for the win/loss/break-even partition and every metric derived from it.
    #[serde(default)]
    pub partition: BreakEvenPolicy,
    /// Policy for consecutive win/loss streaks.
    #[serde(default = "default_streak_policy")]
    pub streaks: BreakEvenPolicy,
}

impl Default for ClassificationRule {
    fn default() -> Self {
        Self {
            partition: BreakEvenPolicy::Separate,
            streaks: default_streak_policy(),
        }
    }
}

const fn default_streak_policy() -> BreakEvenPolicy {
    BreakEvenPolicy::AsLoss
}

/// Exhaustive, disjoint split of a snapshot by trade outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Trades with `pnl > 0`.
    pub winning: Vec<&'a TradeRecord>,
    /// Trades classified as losses.
    pub losing: Vec<&'a TradeRecord>,
    /// Break-even trades (always empty under `AsLoss`).
    pub break_even: Vec<&'a TradeRecord>,
}

impl<'a> Partition<'a> {
    /// Split `records` according to `policy`, preserving ledger order in each bucket.
    #[must_use]
    pub fn new(records: &'a [TradeRecord], policy: BreakEvenPolicy) -> Self {
        let mut partition = Self::default();
        for record in records {
            match policy.classify(record) {
                TradeOutcome::Win => partition.winning.push(record),
                TradeOutcome::Loss => partition.losing.push(record),
                TradeOutcome::BreakEven => partition.break_even.push(record),
            }
        }
        partition
    }

    /// Total number of trades across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.winning.len() + self.losing.len() + self.break_even.len()
    }

    /// Sum of winning P&L.
    #[must_use]
    pub fn gross_profit(&self) -> Decimal {
        saturating_sum(self.winning.iter().map(|r| r.pnl))
    }

    /// Absolute sum of losing P&L.
    #[must_use]
    pub fn gross_loss(&self) -> Decimal {
        saturating_sum(self.losing.iter().map(|r| r.pnl)).abs()
    }

    /// Winning trades as a percentage of all trades; 0 when empty.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        let total = self.total();
        if total == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.winning.len() as u64) / Decimal::from(total as u64) * HUNDRED
    }

    /// Mean winning P&L.
    #[must_use]
    pub fn average_win(&self) -> Option<Decimal> {
        mean(&pnls(&self.winning))
    }

    /// Mean losing P&L (negative or zero).
    #[must_use]
    pub fn average_loss(&self) -> Option<Decimal> {
        mean(&pnls(&self.losing))
    }

    /// Gross profit over gross loss.
    ///
    /// A finite ratio beyond the `Decimal` range saturates at `Decimal::MAX`.
    #[must_use]
    pub fn profit_factor(&self) -> ProfitFactor {
        let gross_profit = self.gross_profit();
        let gross_loss = self.gross_loss();

        if gross_loss > Decimal::ZERO {
            ProfitFactor::Finite(gross_profit.checked_div(gross_loss).unwrap_or(Decimal::MAX))
        } else if gross_profit > Decimal::ZERO {
            ProfitFactor::Infinite
        } else {
            ProfitFactor::Undefined
        }
    }

    /// Probability-weighted mean P&L per trade.
    ///
    /// `win_rate * avg_win + loss_rate * avg_loss` reduces to
    /// `(gross_profit - gross_loss) / total`, so an empty side contributes 0
    /// and break-even trades only dilute the weights. `None` for an empty
    /// snapshot.
    #[must_use]
    pub fn expectancy(&self) -> Option<Decimal> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        let net = self.gross_profit().saturating_sub(self.gross_loss());
        net.checked_div(Decimal::from(total as u64))
    }

    /// `|average win / average loss|`; `None` if either side is empty, the
    /// average loss is zero, or the ratio is not representable.
    #[must_use]
    pub fn risk_reward_ratio(&self) -> Option<Decimal> {
        let avg_win = self.average_win()?;
        let avg_loss = self.average_loss()?;
        if avg_loss == Decimal::ZERO {
            return None;
        }
        Some(avg_win.checked_div(avg_loss)?.abs())
    }
}

/// Profit factor with explicit sentinels for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ProfitFactor {
    /// Gross profit / gross loss.
    Finite(Decimal),
    /// Winners exist but gross loss is zero.
    Infinite,
    /// Neither winners nor losses (empty or all break-even).
    Undefined,
}

impl ProfitFactor {
    /// Finite value, if any.
    #[must_use]
    pub const fn value(self) -> Option<Decimal> {
        match self {
            Self::Finite(v) => Some(v),
            Self::Infinite | Self::Undefined => None,
        }
    }

    /// Returns true for the infinite sentinel.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

fn pnls(records: &[&TradeRecord]) -> Vec<Decimal> {
    records.iter().map(|r| r.pnl).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TradeLedger;
    use rust_decimal_macros::dec;

    fn ledger_with(ticks: &[i64]) -> TradeLedger {
        let mut ledger = TradeLedger::default();
        for &t in ticks {
            let Ok(_) = ledger.append("NQ", t, 1, Decimal::ZERO) else {
                panic!("trade should be accepted");
            };
        }
        ledger
    }

    fn break_even_ledger() -> TradeLedger {
        // 1 tick on NQ = $5 gross, $5 commission => pnl 0
        let mut ledger = ledger_with(&[4, -2]);
        let Ok(_) = ledger.append("NQ", 1, 1, dec!(5)) else {
            panic!("break-even trade should be accepted");
        };
        ledger
    }

    #[test]
    fn test_classify_break_even_policies() {
        let ledger = break_even_ledger();
        let flat = &ledger.snapshot()[2];
        assert!(flat.is_break_even());
        assert_eq!(BreakEvenPolicy::Separate.classify(flat), TradeOutcome::BreakEven);
        assert_eq!(BreakEvenPolicy::AsLoss.classify(flat), TradeOutcome::Loss);
    }

    #[test]
    fn test_partition_separate() {
        let ledger = break_even_ledger();
        let p = Partition::new(ledger.snapshot(), BreakEvenPolicy::Separate);
        assert_eq!(p.winning.len(), 1);
        assert_eq!(p.losing.len(), 1);
        assert_eq!(p.break_even.len(), 1);
        assert_eq!(p.total(), 3);
        assert_eq!(p.gross_profit(), dec!(20));
        assert_eq!(p.gross_loss(), dec!(10));
    }

    #[test]
    fn test_partition_as_loss() {
        let ledger = break_even_ledger();
        let p = Partition::new(ledger.snapshot(), BreakEvenPolicy::AsLoss);
        assert_eq!(p.losing.len(), 2);
        assert!(p.break_even.is_empty());
        assert_eq!(p.average_loss(), Some(dec!(-5)));
        assert_eq!(p.risk_reward_ratio(), Some(dec!(4)));
    }

    #[test]
    fn test_profit_factor_sentinels() {
        let empty = Partition::new(&[], BreakEvenPolicy::Separate);
        assert_eq!(empty.profit_factor(), ProfitFactor::Undefined);

        let winners = ledger_with(&[2, 3]);
        let p = Partition::new(winners.snapshot(), BreakEvenPolicy::Separate);
        assert!(p.profit_factor().is_infinite());
        assert_eq!(p.profit_factor().value(), None);

        let losers = ledger_with(&[-2]);
        let p = Partition::new(losers.snapshot(), BreakEvenPolicy::Separate);
        assert_eq!(p.profit_factor(), ProfitFactor::Finite(Decimal::ZERO));
    }

    #[test]
    fn test_expectancy_one_sided() {
        let winners = ledger_with(&[2, 4]);
        let p = Partition::new(winners.snapshot(), BreakEvenPolicy::Separate);
        assert_eq!(p.expectancy(), Some(dec!(15)));
        assert_eq!(p.risk_reward_ratio(), None);

        let empty = Partition::new(&[], BreakEvenPolicy::Separate);
        assert_eq!(empty.expectancy(), None);
        assert_eq!(empty.win_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_profit_factor_serde() {
        let Ok(json) = serde_json::to_string(&ProfitFactor::Infinite) else {
            panic!("serialize");
        };
        assert_eq!(json, r#"{"kind":"infinite"}"#);

        let Ok(back) = serde_json::from_str::<ProfitFactor>(r#"{"kind":"finite","value":"1.5"}"#)
        else {
            panic!("deserialize");
        };
        assert_eq!(back, ProfitFactor::Finite(dec!(1.5)));
    }
}
