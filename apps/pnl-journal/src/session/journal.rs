//! Journal session: one ledger, its clear flow, and the statistics read path.

use tracing::instrument;

use crate::config::{Config, SessionConfig, StatisticsConfig};
use crate::ledger::{LedgerError, TickValueTable, TradeLedger, TradeRecord};
use crate::observability::{log_clear_transition, log_trade_accepted, log_trade_rejected};
use crate::statistics::StatisticsReport;

use super::clear::ClearState;
use super::request::AddTradeRequest;

/// A single user's journal.
///
/// Each session owns an independent ledger; nothing is shared between sessions.
/// Handlers mutate the ledger, and [`statistics`](Self::statistics) recomputes
/// the report on demand from the current snapshot.
#[derive(Debug, Clone, Default)]
pub struct JournalSession {
    ledger: TradeLedger,
    clear_state: ClearState,
    session: SessionConfig,
    statistics: StatisticsConfig,
}

impl JournalSession {
    /// Create a session with an empty ledger.
    #[must_use]
    pub const fn new(
        tick_values: TickValueTable,
        session: SessionConfig,
        statistics: StatisticsConfig,
    ) -> Self {
        Self {
            ledger: TradeLedger::new(tick_values),
            clear_state: ClearState::Idle,
            session,
            statistics,
        }
    }

    /// Create a session from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured tick table is invalid.
    pub fn from_config(config: &Config) -> Result<Self, LedgerError> {
        Ok(Self::new(
            config.instruments.tick_table()?,
            config.session.clone(),
            config.statistics.clone(),
        ))
    }

    /// Handle an "add trade" request.
    ///
    /// # Errors
    ///
    /// Returns the ledger's validation error; the ledger is unchanged.
    #[instrument(skip(self, request), fields(symbol = %request.symbol, ticks = request.ticks))]
    pub fn on_add_trade(&mut self, request: &AddTradeRequest) -> Result<TradeRecord, LedgerError> {
        match self.ledger.append(
            &request.symbol,
            request.ticks,
            request.contracts,
            request.commission_per_contract,
        ) {
            Ok(record) => {
                log_trade_accepted(&record);
                Ok(record)
            }
            Err(e) => {
                log_trade_rejected(&request.symbol, &e);
                Err(e)
            }
        }
    }

    /// Handle a "clear ledger" request.
    ///
    /// Clears immediately when confirmation is disabled; otherwise moves to
    /// [`ClearState::ConfirmPending`]. Returns the resulting state.
    pub fn on_clear(&mut self) -> ClearState {
        if self.session.confirm_clear {
            self.transition(ClearState::ConfirmPending, 0);
        } else {
            self.clear_now();
        }
        self.clear_state
    }

    /// Confirm a pending clear. Returns false if nothing was pending.
    pub fn confirm_clear(&mut self) -> bool {
        if !self.clear_state.is_pending() {
            return false;
        }
        self.clear_now();
        true
    }

    /// Cancel a pending clear. Returns false if nothing was pending.
    pub fn cancel_clear(&mut self) -> bool {
        if !self.clear_state.is_pending() {
            return false;
        }
        self.transition(ClearState::Cancelled, 0);
        true
    }

    /// Current clear-confirmation state.
    #[must_use]
    pub const fn clear_state(&self) -> ClearState {
        self.clear_state
    }

    /// Read-only ledger snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &[TradeRecord] {
        self.ledger.snapshot()
    }

    /// Underlying ledger.
    #[must_use]
    pub const fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    /// Recompute the statistics report for the current snapshot.
    #[must_use]
    #[instrument(skip(self), fields(trades = self.ledger.len()))]
    pub fn statistics(&self) -> StatisticsReport {
        StatisticsReport::from_records(self.ledger.snapshot(), &self.statistics)
    }

    fn clear_now(&mut self) {
        let removed = self.ledger.len();
        self.ledger.clear();
        self.transition(ClearState::Cleared, removed);
    }

    fn transition(&mut self, to: ClearState, removed: usize) {
        log_clear_transition(self.clear_state, to, removed);
        self.clear_state = to;
    }
}
