//! Numeric guards shared by every calculator entry point.
//!
//! Raw form input is parsed by the caller; these helpers only reject values
//! that are negative or cannot be represented, never coerce them to zero.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Ensure a decimal amount is `>= 0`
pub fn ensure_non_negative(field: &str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        tracing::warn!(field, %value, "Rejected negative amount");
        return Err(AppError::invalid_input(format!(
            "{} cannot be negative, got: {}",
            field, value
        )));
    }
    Ok(value)
}

/// Convert a float from the caller's boundary into a decimal.
///
/// NaN and infinities are rejected, as are negative values.
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        tracing::warn!(field, value, "Rejected non-finite amount");
        return Err(AppError::invalid_input(format!(
            "{} must be a finite number, got: {}",
            field, value
        )));
    }

    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        AppError::invalid_input(format!("{} is out of range, got: {}", field, value))
    })?;

    ensure_non_negative(field, decimal)
}

fn out_of_range(field: &str) -> AppError {
    tracing::warn!(field, "Arithmetic overflow");
    AppError::invalid_input(format!("{} is out of range", field))
}

/// `a × b`, or `InvalidInput` when the product does not fit in a decimal
pub fn checked_mul(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| out_of_range(field))
}

pub fn checked_add(field: &str, a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| out_of_range(field))
}

/// Sum of `values`, failing instead of panicking on overflow
pub fn checked_sum<I>(field: &str, values: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_add(field, acc, value))
}

/// `amount × rate / 100`
pub fn percent_of(field: &str, amount: Decimal, rate_percent: Decimal) -> Result<Decimal> {
    checked_mul(field, amount, rate_percent)?
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or_else(|| out_of_range(field))
}
