//! Typed helpers over the two Soroban storage tiers used by the engine.
//!
//! Instance storage holds only the global project-id counter. Every
//! per-project record — config, bonder ledgers, vesting positions — lives in
//! persistent storage keyed by [`DataKey`], with TTLs extended on access so
//! long-lived positions stay resident.

use soroban_sdk::{Address, Env};

use crate::errors::{ERR_POSITION_NOT_FOUND, ERR_PROJECT_NOT_FOUND};
use crate::types::{BonderLedger, DataKey, ProjectConfig, VestingPosition};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─── Project ids ───────────────────────────────────────────────────────────

/// Increment the global project counter and return the new id.
/// Ids are sequential starting from 1.
pub fn next_project_id(e: &Env) -> u64 {
    bump_instance(e);
    let count: u64 = e
        .storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0);
    let id = count + 1;
    e.storage().instance().set(&DataKey::ProjectCount, &id);
    id
}

// ─── ProjectConfig ─────────────────────────────────────────────────────────

/// Load a project's config. Panics with [`ERR_PROJECT_NOT_FOUND`] if absent.
pub fn load_project(e: &Env, project_id: u64) -> ProjectConfig {
    let key = DataKey::Project(project_id);
    let config: ProjectConfig = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("{ERR_PROJECT_NOT_FOUND}"));
    bump_persistent(e, &key);
    config
}

pub fn save_project(e: &Env, project_id: u64, config: &ProjectConfig) {
    let key = DataKey::Project(project_id);
    e.storage().persistent().set(&key, config);
    bump_persistent(e, &key);
}

// ─── BonderLedger ──────────────────────────────────────────────────────────

/// Load the per-authority bond counter, defaulting to zero for a first bond.
pub fn load_bonder_ledger(e: &Env, project_id: u64, authority: &Address) -> BonderLedger {
    let key = DataKey::BonderLedger(project_id, authority.clone());
    e.storage()
        .persistent()
        .get(&key)
        .unwrap_or(BonderLedger { total_bonds: 0 })
}

pub fn save_bonder_ledger(e: &Env, project_id: u64, authority: &Address, ledger: &BonderLedger) {
    let key = DataKey::BonderLedger(project_id, authority.clone());
    e.storage().persistent().set(&key, ledger);
    bump_persistent(e, &key);
}

// ─── VestingPosition ───────────────────────────────────────────────────────

/// Load a vesting position by (project, authority, bond index).
/// Panics with [`ERR_POSITION_NOT_FOUND`] if absent — which also covers a
/// caller asking for someone else's bond index, since the authority is part
/// of the key.
pub fn load_position(
    e: &Env,
    project_id: u64,
    authority: &Address,
    bond_id: u64,
) -> VestingPosition {
    let key = DataKey::Vesting(project_id, authority.clone(), bond_id);
    let position: VestingPosition = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic!("{ERR_POSITION_NOT_FOUND}"));
    bump_persistent(e, &key);
    position
}

pub fn save_position(
    e: &Env,
    project_id: u64,
    authority: &Address,
    bond_id: u64,
    position: &VestingPosition,
) {
    let key = DataKey::Vesting(project_id, authority.clone(), bond_id);
    e.storage().persistent().set(&key, position);
    bump_persistent(e, &key);
}
