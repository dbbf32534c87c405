//! Statistics engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statistics::ClassificationRule;

/// Parameters for the statistics report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Risk-free return per trade, in currency units, subtracted from mean
    /// P&L in the Sharpe/Sortino-style ratios.
    #[serde(default)]
    pub period_risk_free_rate: Decimal,
    /// Break-even classification policy.
    #[serde(default)]
    pub classification: ClassificationRule,
}
