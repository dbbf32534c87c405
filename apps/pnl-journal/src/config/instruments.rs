//! Instrument (tick value) configuration.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{LedgerError, TickValueTable};

/// Tradable instruments and their tick values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentsConfig {
    /// Dollar value of one tick, keyed by symbol.
    #[serde(default = "default_tick_values")]
    pub tick_values: BTreeMap<String, Decimal>,
}

impl Default for InstrumentsConfig {
    fn default() -> Self {
        Self {
            tick_values: default_tick_values(),
        }
    }
}

impl InstrumentsConfig {
    /// Build the validated tick table.
    pub fn tick_table(&self) -> Result<TickValueTable, LedgerError> {
        TickValueTable::new(self.tick_values.clone())
    }
}

fn default_tick_values() -> BTreeMap<String, Decimal> {
    TickValueTable::default().into()
}
