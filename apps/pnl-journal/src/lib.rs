// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! PnL Journal - Rust Core Library
//!
//! Trade ledger and statistics engine for journaling hypothetical futures
//! trades.
//!
//! # Layers
//!
//! - **ledger**: append-only `TradeLedger` of `TradeRecord`s priced from a
//!   `TickValueTable`; each record carries its P&L and running cumulative P&L
//! - **statistics**: pure functions over a ledger snapshot (win rate, profit
//!   factor, streaks, expectancy, Sharpe/Sortino-style ratios, drawdown) and
//!   the `StatisticsReport` handed to presentation layers
//! - **session**: `JournalSession` with explicit add/clear handlers and the
//!   clear-confirmation flow
//! - **config** / **observability**: YAML configuration and tracing setup
//!
//! # Example
//!
//! ```
//! use pnl_journal::{AddTradeRequest, JournalSession};
//! use rust_decimal::Decimal;
//!
//! let mut session = JournalSession::default();
//! let record = session
//!     .on_add_trade(&AddTradeRequest::new("NQ", 10, 1, Decimal::ZERO))
//!     .unwrap();
//! assert_eq!(record.pnl, Decimal::from(50));
//!
//! let report = session.statistics();
//! assert_eq!(report.win_rate, Decimal::ONE_HUNDRED);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Configuration loading and validation.
pub mod config;

/// Append-only trade ledger.
pub mod ledger;

/// Tracing setup and structured events.
pub mod observability;

/// Session handlers and input DTOs.
pub mod session;

/// Statistics engine.
pub mod statistics;

pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use ledger::{LedgerError, TickValueTable, TradeLedger, TradeRecord};
pub use session::{AddTradeRequest, ClearState, JournalSession};
pub use statistics::{
    BreakEvenPolicy, ClassificationRule, MetricValue, ProfitFactor, StatisticsReport,
};
