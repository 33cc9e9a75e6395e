//! Money calculation utilities using rust_decimal for precision
//!
//! All arithmetic is done in `Decimal`, then converted back to `f64` for
//! storage and serialization, rounded to 2 decimal places (half away from zero).

use rust_decimal::prelude::*;

/// Rounding precision for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Upper bound for any single amount handled by the ledger
pub const MAX_AMOUNT: f64 = 100_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a Decimal to 2 decimal places
#[inline]
pub fn round_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an f64 amount to 2 decimal places
#[inline]
pub fn round_money(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Sum a sequence of amounts without accumulating float drift
pub fn sum_money(amounts: impl IntoIterator<Item = f64>) -> f64 {
    to_f64(amounts.into_iter().map(to_decimal).sum())
}

/// Whether a value is usable as an amount: finite and within bounds
#[inline]
pub fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_AMOUNT
}
