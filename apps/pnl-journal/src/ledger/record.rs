//! Trade record type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A logged trade with its derived P&L fields.
///
/// Records are created only by [`TradeLedger::append`](super::TradeLedger::append)
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// 1-based position in the ledger.
    pub sequence: u64,
    /// Instrument symbol.
    pub symbol: String,
    /// Signed tick movement (positive = profit).
    pub ticks: i64,
    /// Number of contracts.
    pub contracts: u32,
    /// Commission charged per contract.
    pub commission_per_contract: Decimal,
    /// Tick value applied at entry.
    pub tick_value: Decimal,
    /// P&L before commission.
    pub gross_pnl: Decimal,
    /// Total commission (`commission_per_contract * contracts`).
    pub commission: Decimal,
    /// Net P&L (`gross_pnl - commission`).
    pub pnl: Decimal,
    /// Running total of `pnl` up to and including this record.
    pub cumulative_pnl: Decimal,
}

impl TradeRecord {
    /// Check if this trade was profitable.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.pnl > Decimal::ZERO
    }

    /// Check if this trade lost money.
    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.pnl < Decimal::ZERO
    }

    /// Check if this trade netted exactly zero.
    #[must_use]
    pub fn is_break_even(&self) -> bool {
        self.pnl == Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(pnl: Decimal) -> TradeRecord {
        TradeRecord {
            sequence: 1,
            symbol: "NQ".to_string(),
            ticks: 1,
            contracts: 1,
            commission_per_contract: Decimal::ZERO,
            tick_value: dec!(5),
            gross_pnl: pnl,
            commission: Decimal::ZERO,
            pnl,
            cumulative_pnl: pnl,
        }
    }

    #[test]
    fn test_outcome_predicates() {
        let winner = record(dec!(50));
        assert!(winner.is_winner());
        assert!(!winner.is_loser());

        let loser = record(dec!(-105));
        assert!(loser.is_loser());
        assert!(!loser.is_break_even());

        let flat = record(Decimal::ZERO);
        assert!(flat.is_break_even());
        assert!(!flat.is_winner());
        assert!(!flat.is_loser());
    }
}
