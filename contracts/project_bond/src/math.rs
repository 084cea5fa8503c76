//! Overflow-safe fixed-point arithmetic for bonding and vesting calculations.
//!
//! All monetary and time quantities are `u64`; intermediate products go
//! through `u128` so percentage scaling never wraps. Out-of-range results
//! panic with the stable overflow message instead of wrapping.

use crate::errors::ERR_OVERFLOW;

/// Fixed-point unit for percentages and rates: `1_000_000_000` = 100%.
pub const ACCURACY: u64 = 1_000_000_000;

/// Checked `u64` addition.
#[inline]
#[must_use]
pub fn add_u64(a: u64, b: u64) -> u64 {
    a.checked_add(b).unwrap_or_else(|| panic!("{ERR_OVERFLOW}"))
}

/// Checked `u64` multiplication.
#[inline]
#[must_use]
pub fn mul_u64(a: u64, b: u64) -> u64 {
    a.checked_mul(b).unwrap_or_else(|| panic!("{ERR_OVERFLOW}"))
}

/// `amount * rate / ACCURACY`, computed through `u128`.
///
/// For `rate ≤ ACCURACY` this is the `rate` share of `amount` and cannot
/// overflow; larger rates are still handled (the quotient is range-checked).
#[inline]
#[must_use]
pub fn pct(amount: u64, rate: u64) -> u64 {
    let wide = (amount as u128) * (rate as u128) / (ACCURACY as u128);
    u64::try_from(wide).unwrap_or_else(|_| panic!("{ERR_OVERFLOW}"))
}

/// Tokens owed for an LP deposit at `price`, inflated by `discount`:
/// `lp_amount * (ACCURACY + discount) / price / ACCURACY`.
///
/// `price` is validated positive at project initialization.
#[inline]
#[must_use]
pub fn tokens_owed(lp_amount: u64, price: u64, discount: u64) -> u64 {
    let premium = (ACCURACY as u128) + (discount as u128);
    let wide = (lp_amount as u128) * premium / (price as u128) / (ACCURACY as u128);
    u64::try_from(wide).unwrap_or_else(|_| panic!("{ERR_OVERFLOW}"))
}
