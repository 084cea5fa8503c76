//! Unit tests for the fixed-point, discount, and vesting math.

#![cfg(test)]

use crate::math::{self, ACCURACY};
use crate::test_helpers::percent;
use crate::types::{ProjectConfig, VestingPosition};
use crate::{discount, vesting};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

fn config_with(
    e: &Env,
    mode: u64,
    min_discount: u64,
    max_discount: u64,
    bonded_amount: u64,
    token_amount: u64,
) -> ProjectConfig {
    let addr = Address::generate(e);
    ProjectConfig {
        owner: addr.clone(),
        project_token: addr.clone(),
        lp_token: addr.clone(),
        lp_vault: addr,
        token_amount,
        price: 1,
        min_discount,
        max_discount,
        discount_mode: mode,
        release_interval: 60,
        release_rate: percent(1),
        instant_unlock: percent(10),
        initial_unlock: percent(10),
        lock_period: 600,
        vesting_period: 86_400,
        bonded_amount,
        vested_amount: 0,
    }
}

fn position(total_amount: u64, withdrawn_amount: u64, start_time: u64) -> VestingPosition {
    VestingPosition {
        total_amount,
        withdrawn_amount,
        start_time,
    }
}

// ═══════════════════════════════════════════════════════════════════
// 1. Fixed-point helpers
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_pct_basic_shares() {
    assert_eq!(math::pct(1_000, percent(10)), 100);
    assert_eq!(math::pct(1_000, percent(100)), 1_000);
    assert_eq!(math::pct(1_000, 0), 0);
}

#[test]
fn test_pct_floors_fractional_results() {
    // 0.05% of 1000 is 0.5, floored to 0.
    assert_eq!(math::pct(1_000, ACCURACY / 2_000), 0);
}

#[test]
fn test_tokens_owed_with_discount() {
    // 100 LP at price 2 with 10% discount: 100 / 2 * 1.10 = 55.
    assert_eq!(math::tokens_owed(100, 2, percent(10)), 55);
}

#[test]
fn test_tokens_owed_without_discount() {
    assert_eq!(math::tokens_owed(100, 2, 0), 50);
    assert_eq!(math::tokens_owed(100, 4, 0), 25);
}

#[test]
fn test_tokens_owed_floors_integer_division() {
    // 99 / 2 * 1.0 = 49.5, floored.
    assert_eq!(math::tokens_owed(99, 2, 0), 49);
}

#[test]
#[should_panic(expected = "arithmetic overflow")]
fn test_add_u64_overflow_panics() {
    math::add_u64(u64::MAX, 1);
}

#[test]
#[should_panic(expected = "arithmetic overflow")]
fn test_tokens_owed_overflow_panics() {
    math::tokens_owed(u64::MAX, 1, percent(10));
}

// ═══════════════════════════════════════════════════════════════════
// 2. Discount selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_discount_flat_mode_returns_min() {
    let e = Env::default();
    let config = config_with(&e, 0, percent(10), percent(20), 500_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(10));
}

#[test]
fn test_discount_growing_mode_interpolates() {
    let e = Env::default();
    // Empty offering: minimum.
    let config = config_with(&e, 1, percent(10), percent(20), 0, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(10));
    // Half full: midpoint.
    let config = config_with(&e, 1, percent(10), percent(20), 500_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(15));
    // Full: maximum.
    let config = config_with(&e, 1, percent(10), percent(20), 1_000_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(20));
}

#[test]
fn test_discount_shrinking_mode_interpolates() {
    let e = Env::default();
    let config = config_with(&e, 2, percent(10), percent(20), 0, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(20));
    let config = config_with(&e, 2, percent(10), percent(20), 500_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(15));
    let config = config_with(&e, 2, percent(10), percent(20), 1_000_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(10));
}

#[test]
fn test_discount_unknown_mode_is_flat() {
    let e = Env::default();
    let config = config_with(&e, 9, percent(10), percent(20), 900_000, 1_000_000);
    assert_eq!(discount::discount_rate(&config), percent(10));
}

#[test]
fn test_discount_always_within_bounds() {
    let e = Env::default();
    for mode in 0_u64..4 {
        for bonded in [0_u64, 1, 250_000, 999_999, 1_000_000] {
            let config = config_with(&e, mode, percent(5), percent(25), bonded, 1_000_000);
            let rate = discount::discount_rate(&config);
            assert!(rate >= percent(5));
            assert!(rate <= percent(25));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 3. Vesting release curve
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_unlocked_instant_only_during_lock() {
    let e = Env::default();
    let config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    let pos = position(1_000_000, 0, 1_000);

    assert_eq!(vesting::unlocked_amount(&config, &pos, 1_000), 100_000);
    assert_eq!(vesting::unlocked_amount(&config, &pos, 1_000 + 599), 100_000);
}

#[test]
fn test_unlocked_initial_tranche_at_lock_boundary() {
    let e = Env::default();
    let config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    let pos = position(1_000_000, 0, 1_000);

    // Inclusive boundary: the initial tranche is unlocked at exactly
    // start + lock_period.
    assert_eq!(vesting::unlocked_amount(&config, &pos, 1_000 + 600), 200_000);
}

#[test]
fn test_unlocked_linear_growth_per_interval() {
    let e = Env::default();
    // release_rate is 1% per interval in config_with.
    let config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    let pos = position(1_000_000, 0, 1_000);

    assert_eq!(
        vesting::unlocked_amount(&config, &pos, 1_000 + 600 + 60),
        210_000
    );
    assert_eq!(
        vesting::unlocked_amount(&config, &pos, 1_000 + 600 + 179),
        220_000
    );
}

#[test]
fn test_unlocked_caps_at_total_before_vesting_end() {
    let e = Env::default();
    // 1% per minute releases the remaining 80% after 80 intervals, well
    // before the 86_400s vesting period ends.
    let config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    let pos = position(1_000_000, 0, 1_000);

    assert_eq!(
        vesting::unlocked_amount(&config, &pos, 1_000 + 600 + 200 * 60),
        1_000_000
    );
}

#[test]
fn test_unlocked_full_total_after_vesting_period() {
    let e = Env::default();
    let mut config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    // A rate too small to ever finish linearly still releases everything
    // once the vesting period elapses.
    config.release_rate = 1;
    let pos = position(1_000_000, 0, 1_000);

    assert_eq!(
        vesting::unlocked_amount(&config, &pos, 1_000 + 600 + 86_400),
        1_000_000
    );
}

#[test]
fn test_unlocked_is_monotonic_in_time() {
    let e = Env::default();
    let config = config_with(&e, 0, 0, 0, 0, 1_000_000);
    let pos = position(1_000_000, 0, 1_000);

    let mut last = 0_u64;
    for t in (0_u64..100_000).step_by(977) {
        let unlocked = vesting::unlocked_amount(&config, &pos, 1_000 + t);
        assert!(unlocked >= last);
        assert!(unlocked <= pos.total_amount);
        last = unlocked;
    }
}
