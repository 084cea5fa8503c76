//! Policy validation for project initialization.
//!
//! All bounds are checked up front so that a project can only ever exist with
//! coherent terms. Violations reject the initialization with an
//! `invalid policy:` message naming the violated bound.

use crate::errors::*;
use crate::math::ACCURACY;
use crate::types::{DiscountPolicy, VestingPolicy};

/// Validate the economic terms of a new project.
///
/// # Panics
/// * [`ERR_POLICY_AMOUNT`] if `amount == 0`
/// * [`ERR_POLICY_PRICE`] if `price == 0`
/// * [`ERR_POLICY_DISCOUNT_BOUNDS`] unless `min ≤ max ≤ 100%`
/// * [`ERR_POLICY_UNLOCK_SPLIT`] unless `instant + initial ≤ 100%`
/// * [`ERR_POLICY_RELEASE_INTERVAL`] if `release_interval == 0`
/// * [`ERR_POLICY_VESTING_PERIOD`] if `vesting_period < lock_period`
pub fn validate_project_terms(
    amount: u64,
    price: u64,
    discount: &DiscountPolicy,
    vesting: &VestingPolicy,
) {
    if amount == 0 {
        panic!("{ERR_POLICY_AMOUNT}");
    }
    if price == 0 {
        panic!("{ERR_POLICY_PRICE}");
    }
    if discount.min_discount > discount.max_discount || discount.max_discount > ACCURACY {
        panic!("{ERR_POLICY_DISCOUNT_BOUNDS}");
    }
    let combined_unlock = vesting.instant_unlock.checked_add(vesting.initial_unlock);
    match combined_unlock {
        Some(total) if total <= ACCURACY => {}
        _ => panic!("{ERR_POLICY_UNLOCK_SPLIT}"),
    }
    if vesting.release_interval == 0 {
        panic!("{ERR_POLICY_RELEASE_INTERVAL}");
    }
    if vesting.vesting_period < vesting.lock_period {
        panic!("{ERR_POLICY_VESTING_PERIOD}");
    }
}
