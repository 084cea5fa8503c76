use soroban_sdk::{contracttype, Address};

// ─── Policies ──────────────────────────────────────────────────────────────

/// Bounds and selection rule for the discount applied per bond.
///
/// Discounts are fixed-point with `ACCURACY` = 100% (see [`crate::math`]).
#[contracttype]
#[derive(Clone, Debug)]
pub struct DiscountPolicy {
    /// Minimum discount.
    pub min_discount: u64,
    /// Maximum discount.
    pub max_discount: u64,
    /// 0 = flat `min_discount`; 1 = grows min → max with utilization;
    /// 2 = shrinks max → min with utilization.
    pub mode: u64,
}

/// Rule governing how a bonded claim unlocks over time.
///
/// All rates are fixed-point with `ACCURACY` = 100%; all periods are in the
/// ledger clock's time unit (seconds).
#[contracttype]
#[derive(Clone, Debug)]
pub struct VestingPolicy {
    /// Interval between linear releases. Every interval, `release_rate` of
    /// the position's total unlocks.
    pub release_interval: u64,
    /// Share of the total released per elapsed interval.
    pub release_rate: u64,
    /// Share unlocked instantly at bond time, before the lock period ends.
    pub instant_unlock: u64,
    /// Share unlocked the moment the lock period expires.
    pub initial_unlock: u64,
    /// Period before linear release starts; its expiry unlocks `initial_unlock`.
    pub lock_period: u64,
    /// Period after the lock in which the remainder releases linearly;
    /// once elapsed the position is 100% unlocked.
    pub vesting_period: u64,
}

// ─── Persisted records ─────────────────────────────────────────────────────

/// Owner-created terms and running totals for one bonding project.
///
/// Field order follows the persisted wire layout: identities first, then
/// economics, discount policy, vesting policy, and running totals.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    /// Identity allowed to mutate configuration.
    pub owner: Address,
    /// Token being sold.
    pub project_token: Address,
    /// Liquidity unit accepted as payment.
    pub lp_token: Address,
    /// Account that receives accepted LP deposits.
    pub lp_vault: Address,
    /// Total supply offered.
    pub token_amount: u64,
    /// Base price: LP units per project-token unit.
    pub price: u64,
    pub min_discount: u64,
    pub max_discount: u64,
    pub discount_mode: u64,
    pub release_interval: u64,
    pub release_rate: u64,
    pub instant_unlock: u64,
    pub initial_unlock: u64,
    pub lock_period: u64,
    pub vesting_period: u64,
    /// Running total of project tokens promised across all bonds.
    /// Monotonically non-decreasing; never exceeds `token_amount`.
    pub bonded_amount: u64,
    /// Running total of project tokens released to bonders.
    /// Monotonically non-decreasing; never exceeds `bonded_amount`.
    pub vested_amount: u64,
}

/// Per-authority bond counter for one project. The count doubles as the
/// index of the next vesting position; it only ever increases.
#[contracttype]
#[derive(Clone, Debug)]
pub struct BonderLedger {
    pub total_bonds: u64,
}

/// One record per bond event: the claim it opened and how much of it has
/// been released so far. Never deleted — a fully withdrawn position remains
/// as an auditable record with `withdrawn_amount == total_amount`.
#[contracttype]
#[derive(Clone, Debug)]
pub struct VestingPosition {
    /// Project tokens owed to the bonder, post-discount. Immutable.
    pub total_amount: u64,
    /// Cumulative tokens already released. `0 ≤ withdrawn ≤ total`.
    pub withdrawn_amount: u64,
    /// Ledger timestamp at bond creation. Immutable.
    pub start_time: u64,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// All contract storage keys.
///
/// `ProjectCount` lives in instance storage; everything else is persistent,
/// keyed by project id plus, where applicable, the bonding authority and
/// bond index.
#[contracttype]
pub enum DataKey {
    /// Global auto-increment counter for project ids (Instance).
    ProjectCount,
    /// Project terms and running totals, by project id (Persistent).
    Project(u64),
    /// Per-authority bond counter (Persistent).
    BonderLedger(u64, Address),
    /// Vesting position, by (project, authority, bond index) (Persistent).
    Vesting(u64, Address, u64),
}
