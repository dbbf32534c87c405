//! Input boundary DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// "Add trade" request as submitted by a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTradeRequest {
    /// Instrument symbol.
    pub symbol: String,
    /// Signed tick movement.
    pub ticks: i64,
    /// Contract count.
    pub contracts: i64,
    /// Commission per contract.
    #[serde(default)]
    pub commission_per_contract: Decimal,
}

impl AddTradeRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        ticks: i64,
        contracts: i64,
        commission_per_contract: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            ticks,
            contracts,
            commission_per_contract,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{"symbol":"ES","ticks":-4,"contracts":2,"commission_per_contract":"2.50"}"#;
        let Ok(request) = serde_json::from_str::<AddTradeRequest>(json) else {
            panic!("request should deserialize");
        };
        assert_eq!(request, AddTradeRequest::new("ES", -4, 2, dec!(2.50)));
    }

    #[test]
    fn test_commission_defaults_to_zero() {
        let json = r#"{"symbol":"NQ","ticks":10,"contracts":1}"#;
        let Ok(request) = serde_json::from_str::<AddTradeRequest>(json) else {
            panic!("request should deserialize");
        };
        assert_eq!(request.commission_per_contract, Decimal::ZERO);
    }
}
