//! Decimal rounding for reported figures
//!
//! Binary floats cannot hold most two-decimal amounts exactly, so rounding goes
//! through `rust_decimal`: the float is converted with all of its bits retained,
//! rounded half-to-even, and converted back. Midpoints are only treated as ties
//! when the float really sits on them (2.675 is stored below the midpoint and
//! rounds to 2.67).

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` decimal places
///
/// Non-finite values and magnitudes outside the decimal range are returned unchanged.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_string()
            .parse()
            .unwrap_or(value),
        None => value,
    }
}
