//! Statistical math utilities over decimal samples.

use rust_decimal::Decimal;

use super::constants::{MAX_SQRT_ITERATIONS, TOLERANCE, TWO};

/// Arithmetic mean, `None` for an empty slice or if the sum overflows.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = checked_sum(values.iter().copied())?;
    sum.checked_div(Decimal::from(values.len() as u64))
}

/// Sum that saturates at the `Decimal` bounds instead of panicking.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

fn checked_square(value: Decimal) -> Option<Decimal> {
    value.checked_mul(value)
}

/// Sample standard deviation (n - 1).
///
/// `None` for fewer than 2 values or when the squared deviations overflow.
pub fn std_dev(values: &[Decimal]) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let squares = values
        .iter()
        .map(|v| v.checked_sub(avg).and_then(checked_square))
        .collect::<Option<Vec<_>>>()?;
    let variance =
        checked_sum(squares)?.checked_div(Decimal::from((values.len() - 1) as u64))?;

    sqrt_decimal(variance)
}

/// Downside deviation relative to `threshold`.
///
/// Only values below the threshold contribute, but the divisor is the
/// full sample size. `None` when the squared deviations overflow.
pub fn downside_deviation(values: &[Decimal], threshold: Decimal) -> Option<Decimal> {
    if values.len() < 2 {
        return None;
    }

    let squares = values
        .iter()
        .filter(|v| **v < threshold)
        .map(|v| v.checked_sub(threshold).and_then(checked_square))
        .collect::<Option<Vec<_>>>()?;
    let variance_sum = checked_sum(squares)?;

    if variance_sum == Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let variance = variance_sum.checked_div(Decimal::from(values.len() as u64))?;
    sqrt_decimal(variance)
}

/// Approximate square root using Newton's method.
pub fn sqrt_decimal(value: Decimal) -> Option<Decimal> {
    if value < Decimal::ZERO {
        return None;
    }
    if value == Decimal::ZERO {
        return Some(Decimal::ZERO);
    }

    let mut guess = if value > Decimal::ONE {
        value / TWO
    } else {
        Decimal::ONE
    };

    for _ in 0..MAX_SQRT_ITERATIONS {
        let next = (guess + value / guess) / TWO;
        if (next - guess).abs() < TOLERANCE {
            return Some(next);
        }
        guess = next;
    }

    Some(guess)
}
