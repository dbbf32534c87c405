//! Trade ledger.
//!
//! An append-only, ordered sequence of trade records. Each record carries its
//! own realized P&L and the running cumulative total at insertion time, so
//! `cumulative_pnl` of record *i* always equals the sum of `pnl` over records
//! `0..=i`.

mod errors;
mod record;
mod tick_values;
mod trade_ledger;

pub use errors::LedgerError;
pub use record::TradeRecord;
pub use tick_values::TickValueTable;
pub use trade_ledger::TradeLedger;
