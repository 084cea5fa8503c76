//! Unlocked-fraction computation for vesting positions.
//!
//! A position's total unlocks in three tranches:
//!
//! 1. `instant_unlock` — releasable immediately at bond time, not time-gated.
//! 2. `initial_unlock` — unlocked the moment the lock period expires.
//! 3. The remainder — released linearly at `release_rate` per full
//!    `release_interval` elapsed since the lock expired, capped at the total
//!    once `vesting_period` has passed.

use crate::math;
use crate::types::{ProjectConfig, VestingPosition};

/// Cumulative unlocked amount of `position` at ledger time `now`.
///
/// Monotonically non-decreasing in `now` and never exceeds
/// `position.total_amount`. The lock-expiry boundary is inclusive: at
/// `now - start_time == lock_period` the initial tranche is already unlocked.
#[must_use]
pub fn unlocked_amount(config: &ProjectConfig, position: &VestingPosition, now: u64) -> u64 {
    let elapsed = now.saturating_sub(position.start_time);
    let instant = math::pct(position.total_amount, config.instant_unlock);

    if elapsed < config.lock_period {
        return instant;
    }

    let since_lock = elapsed - config.lock_period;
    if since_lock >= config.vesting_period {
        return position.total_amount;
    }

    let initial = math::pct(position.total_amount, config.initial_unlock);
    let per_interval = math::pct(position.total_amount, config.release_rate);
    let intervals = since_lock / config.release_interval;
    let linear = math::mul_u64(intervals, per_interval);

    let unlocked = math::add_u64(math::add_u64(instant, initial), linear);
    unlocked.min(position.total_amount)
}
