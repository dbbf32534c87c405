//! Append-only trade ledger.

use std::fmt::Write;

use rust_decimal::Decimal;
use tracing::debug;

use super::errors::LedgerError;
use super::record::TradeRecord;
use super::tick_values::TickValueTable;

/// Ordered, append-only sequence of trade records.
///
/// Insertion order is chronological order. The only mutations are
/// [`append`](Self::append) and [`clear`](Self::clear).
#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    tick_values: TickValueTable,
    records: Vec<TradeRecord>,
}

impl TradeLedger {
    /// Create an empty ledger priced with the given tick table.
    #[must_use]
    pub const fn new(tick_values: TickValueTable) -> Self {
        Self {
            tick_values,
            records: Vec::new(),
        }
    }

    /// Validate and append a trade, returning the stored record.
    ///
    /// `pnl = ticks * tick_value * contracts - commission_per_contract * contracts`
    /// and `cumulative_pnl` extends the previous record's running total.
    ///
    /// # Errors
    ///
    /// - `UnknownSymbol` if `symbol` is not in the tick table.
    /// - `InvalidInput` if `ticks == 0`, `contracts < 1`, the commission is negative,
    ///   or the trade value or running total falls outside the `Decimal` range.
    ///
    /// The ledger is unchanged on error.
    pub fn append(
        &mut self,
        symbol: &str,
        ticks: i64,
        contracts: i64,
        commission_per_contract: Decimal,
    ) -> Result<TradeRecord, LedgerError> {
        let tick_value = self.tick_values.tick_value(symbol)?;

        if ticks == 0 {
            return Err(LedgerError::invalid("ticks", "ticks must be nonzero"));
        }
        if contracts < 1 {
            return Err(LedgerError::invalid(
                "contracts",
                format!("contracts must be at least 1, got {contracts}"),
            ));
        }
        let contracts = u32::try_from(contracts).map_err(|_| {
            LedgerError::invalid("contracts", format!("contracts out of range: {contracts}"))
        })?;
        if commission_per_contract < Decimal::ZERO {
            return Err(LedgerError::invalid(
                "commission_per_contract",
                format!("commission must not be negative, got {commission_per_contract}"),
            ));
        }

        let qty = Decimal::from(contracts);
        let out_of_range = || LedgerError::invalid("ticks", "trade value out of range");

        let gross_pnl = Decimal::from(ticks)
            .checked_mul(tick_value)
            .and_then(|v| v.checked_mul(qty))
            .ok_or_else(out_of_range)?;
        let commission = commission_per_contract.checked_mul(qty).ok_or_else(|| {
            LedgerError::invalid("commission_per_contract", "commission out of range")
        })?;
        let pnl = gross_pnl.checked_sub(commission).ok_or_else(out_of_range)?;
        let cumulative_pnl = self
            .last()
            .map_or(Decimal::ZERO, |r| r.cumulative_pnl)
            .checked_add(pnl)
            .ok_or_else(out_of_range)?;

        let record = TradeRecord {
            sequence: self.records.len() as u64 + 1,
            symbol: symbol.to_string(),
            ticks,
            contracts,
            commission_per_contract,
            tick_value,
            gross_pnl,
            commission,
            pnl,
            cumulative_pnl,
        };

        debug!(
            sequence = record.sequence,
            symbol = %record.symbol,
            pnl = %record.pnl,
            cumulative_pnl = %record.cumulative_pnl,
            "Trade appended"
        );

        self.records.push(record.clone());
        Ok(record)
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        debug!(removed = self.records.len(), "Ledger cleared");
        self.records.clear();
    }

    /// Read-only view of all records in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&TradeRecord> {
        self.records.last()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tick table used to price new trades.
    #[must_use]
    pub const fn tick_values(&self) -> &TickValueTable {
        &self.tick_values
    }

    /// Export the snapshot to CSV format.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(
            "sequence,symbol,ticks,contracts,commission_per_contract,tick_value,gross_pnl,commission,pnl,cumulative_pnl\n",
        );

        for record in &self.records {
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{},{},{},{},{}",
                record.sequence,
                record.symbol,
                record.ticks,
                record.contracts,
                record.commission_per_contract,
                record.tick_value,
                record.gross_pnl,
                record.commission,
                record.pnl,
                record.cumulative_pnl,
            );
        }

        csv
    }
}
