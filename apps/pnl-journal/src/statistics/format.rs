//! Formatting utilities for statistics display.

use rust_decimal::Decimal;

/// Decimal places shown for every displayed metric.
const DISPLAY_DP: u32 = 2;

/// Round to display precision. `Decimal`'s `{:.2}` truncates on its own.
fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp(DISPLAY_DP)
}

/// Format a currency amount with 2 decimal places.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    format!("${:.2}", round_for_display(value))
}

/// Format a percentage (already on a 0-100 scale).
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", round_for_display(value))
}

/// Format an optional ratio, `N/A` when not applicable.
#[must_use]
pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", round_for_display(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_amount(Decimal::new(-5500, 2)), "$-55.00");
        assert_eq!(format_amount(Decimal::new(50, 0)), "$50.00");
        assert_eq!(format_pct(Decimal::new(50, 0)), "50.00%");
        assert_eq!(format_ratio(Some(Decimal::new(235, 2))), "2.35");
        assert_eq!(format_ratio(None), "N/A");
    }

    #[test]
    fn test_format_rounds() {
        assert_eq!(format_amount(dec!(0.476190)), "$0.48");
        assert_eq!(format_amount(dec!(123.456)), "$123.46");
        assert_eq!(format_amount(dec!(-27.499)), "$-27.50");
        assert_eq!(format_pct(dec!(33.3333)), "33.33%");
        assert_eq!(format_pct(dec!(66.6667)), "66.67%");
        assert_eq!(format_ratio(Some(dec!(0.476190))), "0.48");
    }
}
