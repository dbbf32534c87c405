//! Equity and drawdown series for charting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::TradeRecord;

/// Equity curve point for tracking cumulative P&L.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Ledger sequence number.
    pub sequence: u64,
    /// Cumulative P&L after this trade.
    pub cumulative_pnl: Decimal,
}

/// Drawdown tracking point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownPoint {
    /// Ledger sequence number.
    pub sequence: u64,
    /// Cumulative P&L after this trade.
    pub cumulative_pnl: Decimal,
    /// Highest cumulative P&L so far.
    pub peak: Decimal,
    /// `peak - cumulative_pnl` (never negative, saturating at `Decimal::MAX`).
    pub drawdown: Decimal,
}

/// Cumulative P&L series in ledger order.
#[must_use]
pub fn equity_curve(records: &[TradeRecord]) -> Vec<EquityPoint> {
    records
        .iter()
        .map(|r| EquityPoint {
            sequence: r.sequence,
            cumulative_pnl: r.cumulative_pnl,
        })
        .collect()
}

/// Running peak and drawdown at every point of the cumulative P&L series.
#[must_use]
pub fn drawdown_curve(records: &[TradeRecord]) -> Vec<DrawdownPoint> {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut peak = first.cumulative_pnl;
    records
        .iter()
        .map(|r| {
            peak = peak.max(r.cumulative_pnl);
            DrawdownPoint {
                sequence: r.sequence,
                cumulative_pnl: r.cumulative_pnl,
                peak,
                drawdown: peak.saturating_sub(r.cumulative_pnl),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TradeLedger;
    use rust_decimal_macros::dec;

    #[test]
    fn test_curves() {
        let mut ledger = TradeLedger::default();
        for ticks in [20, -10, 30, -10] {
            let _ = ledger.append("NQ", ticks, 1, Decimal::ZERO);
        }

        let equity = equity_curve(ledger.snapshot());
        let values: Vec<Decimal> = equity.iter().map(|p| p.cumulative_pnl).collect();
        assert_eq!(values, vec![dec!(100), dec!(50), dec!(200), dec!(150)]);

        let drawdowns = drawdown_curve(ledger.snapshot());
        assert_eq!(drawdowns.len(), 4);
        assert_eq!(drawdowns[1].peak, dec!(100));
        assert_eq!(drawdowns[1].drawdown, dec!(50));
        assert_eq!(drawdowns[2].drawdown, Decimal::ZERO);
        assert_eq!(drawdowns[3].peak, dec!(200));
        assert_eq!(drawdowns[3].sequence, 4);
    }

    #[test]
    fn test_empty_curves() {
        assert!(equity_curve(&[]).is_empty());
        assert!(drawdown_curve(&[]).is_empty());
    }
}
