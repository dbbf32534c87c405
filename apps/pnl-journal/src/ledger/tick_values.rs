//! Tick value table for supported futures instruments.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::errors::LedgerError;

/// Immutable mapping from instrument symbol to the dollar value of one tick.
///
/// Symbols are matched exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Decimal>", into = "BTreeMap<String, Decimal>")]
pub struct TickValueTable {
    values: BTreeMap<String, Decimal>,
}

impl TickValueTable {
    /// Build a table from `(symbol, tick_value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the table is empty, a symbol is blank,
    /// or a tick value is not strictly positive.
    pub fn new<I, S>(entries: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        let mut values = BTreeMap::new();
        for (symbol, tick_value) in entries {
            let symbol = symbol.into();
            if symbol.trim().is_empty() {
                return Err(LedgerError::invalid("symbol", "symbol must not be empty"));
            }
            if tick_value <= Decimal::ZERO {
                return Err(LedgerError::invalid(
                    "tick_value",
                    format!("tick value for {symbol} must be positive, got {tick_value}"),
                ));
            }
            values.insert(symbol, tick_value);
        }

        if values.is_empty() {
            return Err(LedgerError::invalid(
                "tick_values",
                "at least one instrument is required",
            ));
        }

        Ok(Self { values })
    }

    /// Tick value for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownSymbol` if the symbol is not in the table.
    pub fn tick_value(&self, symbol: &str) -> Result<Decimal, LedgerError> {
        self.values
            .get(symbol)
            .copied()
            .ok_or_else(|| LedgerError::UnknownSymbol(symbol.to_string()))
    }

    /// Returns true if the symbol is tradable.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.values.contains_key(symbol)
    }

    /// Supported symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a validated table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for TickValueTable {
    fn default() -> Self {
        Self {
            values: BTreeMap::from([
                ("ES".to_string(), dec!(12.5)),
                ("GC".to_string(), dec!(10)),
                ("NQ".to_string(), dec!(5)),
                ("YM".to_string(), dec!(5)),
            ]),
        }
    }
}

impl TryFrom<BTreeMap<String, Decimal>> for TickValueTable {
    type Error = LedgerError;

    fn try_from(values: BTreeMap<String, Decimal>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<TickValueTable> for BTreeMap<String, Decimal> {
    fn from(table: TickValueTable) -> Self {
        table.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = TickValueTable::default();
        assert_eq!(table.len(), 4);
        assert_eq!(table.tick_value("NQ"), Ok(dec!(5)));
        assert_eq!(table.tick_value("ES"), Ok(dec!(12.5)));
        assert_eq!(table.tick_value("YM"), Ok(dec!(5)));
        assert_eq!(table.tick_value("GC"), Ok(dec!(10)));
        assert_eq!(
            table.symbols().collect::<Vec<_>>(),
            vec!["ES", "GC", "NQ", "YM"]
        );
    }

    #[test]
    fn test_unknown_symbol() {
        let table = TickValueTable::default();
        assert_eq!(
            table.tick_value("nq"),
            Err(LedgerError::UnknownSymbol("nq".to_string()))
        );
        assert!(!table.contains("CL"));
    }

    #[test]
    fn test_rejects_non_positive_tick_value() {
        let Err(err) = TickValueTable::new([("CL", Decimal::ZERO)]) else {
            panic!("zero tick value should be rejected");
        };
        assert!(err.to_string().contains("must be positive"));

        assert!(TickValueTable::new([("CL", dec!(-10))]).is_err());
    }

    #[test]
    fn test_rejects_empty_table_and_blank_symbol() {
        let empty: [(&str, Decimal); 0] = [];
        assert!(TickValueTable::new(empty).is_err());
        assert!(TickValueTable::new([("  ", dec!(10))]).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let Ok(table) = serde_json::from_str::<TickValueTable>(r#"{"CL": "10"}"#) else {
            panic!("valid table should deserialize");
        };
        assert_eq!(table.tick_value("CL"), Ok(dec!(10)));

        assert!(serde_json::from_str::<TickValueTable>(r#"{"CL": "0"}"#).is_err());
    }
}
