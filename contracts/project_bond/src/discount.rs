//! Discount selection for bond pricing.
//!
//! A project's discount policy bounds how far above the base exchange rate a
//! bond is rewarded, parameterized by a selection mode. Utilization-based
//! modes move the rate as the offering fills (`bonded_amount / token_amount`),
//! so early bonders can be favored or penalized by configuration.

use crate::types::ProjectConfig;

/// Always returns `min_discount`.
pub const MODE_FLAT: u64 = 0;
/// Discount grows from `min_discount` toward `max_discount` as the offering fills.
pub const MODE_GROWING: u64 = 1;
/// Discount shrinks from `max_discount` toward `min_discount` as the offering fills.
pub const MODE_SHRINKING: u64 = 2;

/// Select the discount rate for the next bond against `config`.
///
/// The result is clamped to `[min_discount, max_discount]` in every mode;
/// unknown modes fall back to flat.
#[must_use]
pub fn discount_rate(config: &ProjectConfig) -> u64 {
    // min ≤ max and token_amount > 0 are validated at initialization.
    let span = config.max_discount - config.min_discount;
    let progress =
        ((span as u128) * (config.bonded_amount as u128) / (config.token_amount as u128)) as u64;

    let rate = match config.discount_mode {
        MODE_GROWING => config.min_discount + progress,
        MODE_SHRINKING => config.max_discount - progress,
        _ => config.min_discount,
    };
    rate.clamp(config.min_discount, config.max_discount)
}
