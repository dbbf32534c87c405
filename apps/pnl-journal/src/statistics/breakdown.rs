//! Per-instrument breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::HUNDRED;
use crate::ledger::TradeRecord;

/// Aggregate figures for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolStats {
    /// Number of trades.
    pub trades: u64,
    /// Trades with `pnl > 0`.
    pub winning_trades: u64,
    /// Total contracts traded.
    pub contracts: u64,
    /// Net P&L.
    pub total_pnl: Decimal,
    /// Commission paid.
    pub total_commission: Decimal,
}

impl SymbolStats {
    /// Win rate on a 0-100 scale.
    #[must_use]
    pub fn win_rate(&self) -> Decimal {
        if self.trades == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.winning_trades) / Decimal::from(self.trades) * HUNDRED
    }
}

/// Group the snapshot by symbol, sorted by symbol.
#[must_use]
pub fn symbol_breakdown(records: &[TradeRecord]) -> BTreeMap<String, SymbolStats> {
    let mut breakdown: BTreeMap<String, SymbolStats> = BTreeMap::new();
    for record in records {
        let stats = breakdown.entry(record.symbol.clone()).or_default();
        stats.trades += 1;
        stats.contracts += u64::from(record.contracts);
        stats.total_pnl = stats.total_pnl.saturating_add(record.pnl);
        stats.total_commission = stats.total_commission.saturating_add(record.commission);
        if record.is_winner() {
            stats.winning_trades += 1;
        }
    }
    breakdown
}
