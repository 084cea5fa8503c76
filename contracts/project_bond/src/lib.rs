//! Project Bond Contract
//!
//! A bonding-and-vesting engine: a project owner deposits a fixed supply of
//! project tokens and sets terms; bonders deposit LP tokens and receive a
//! discounted, time-locked claim on the supply that unlocks over a vesting
//! schedule.
//!
//! ## Key design decisions
//!
//! - **Sequential project ids**: projects are addressed by a `u64` id issued
//!   from an instance-storage counter; every other record is keyed by
//!   `(project, authority[, bond index])`.
//! - **Contract-held vault**: the offered supply is pulled into the contract
//!   at initialization and paid out from it on withdrawals.
//! - **Checks-Effects-Interactions**: storage is updated *before* outgoing
//!   token transfers.
//! - **Integer-only money math**: all amounts are `u64`, percentages are
//!   fixed-point with `ACCURACY` = 100%, and every computation is checked —
//!   overflow rejects the operation instead of wrapping.
//! - **Auth-gated mutations**: `require_auth()` on the bonder for
//!   bond/withdraw and on the owner for config changes.

#![no_std]

mod discount;
mod errors;
mod events;
mod math;
mod storage;
mod types;
mod validation;
mod vesting;

use errors::*;
use types::{BonderLedger, DiscountPolicy, ProjectConfig, VestingPolicy, VestingPosition};

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env};


#[cfg(test)]
mod test_math;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_owner(caller: &Address, config: &ProjectConfig) {
    caller.require_auth();
    if config.owner != *caller {
        panic!("{}", ERR_UNAUTHORIZED);
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ProjectBond;

#[contractimpl]
impl ProjectBond {
    // ── Project setup ──────────────────────────────────────────────────────

    /// Open a new bonding project and fund its vault.
    ///
    /// Pulls `amount` project tokens from `initializer` into the contract
    /// (the caller must have approved the contract to spend them), stores the
    /// project terms with zeroed running totals, and returns the new
    /// sequential project id. The caller becomes the project owner.
    ///
    /// Panics with an `invalid policy:` message if any bound is violated:
    /// `amount` and `price` must be positive, discounts must satisfy
    /// `min ≤ max ≤ 100%`, `instant_unlock + initial_unlock ≤ 100%`,
    /// `release_interval > 0`, and `vesting_period ≥ lock_period`.
    pub fn init_new_project(
        e: Env,
        initializer: Address,
        project_token: Address,
        lp_token: Address,
        lp_vault: Address,
        amount: u64,
        price: u64,
        discount_policy: DiscountPolicy,
        vesting_policy: VestingPolicy,
    ) -> u64 {
        initializer.require_auth();
        validation::validate_project_terms(amount, price, &discount_policy, &vesting_policy);

        // Fund the vault first (caller must have approved).
        let contract = e.current_contract_address();
        TokenClient::new(&e, &project_token).transfer_from(
            &contract,
            &initializer,
            &contract,
            &(amount as i128),
        );

        let project_id = storage::next_project_id(&e);
        let config = ProjectConfig {
            owner: initializer.clone(),
            project_token,
            lp_token,
            lp_vault,
            token_amount: amount,
            price,
            min_discount: discount_policy.min_discount,
            max_discount: discount_policy.max_discount,
            discount_mode: discount_policy.mode,
            release_interval: vesting_policy.release_interval,
            release_rate: vesting_policy.release_rate,
            instant_unlock: vesting_policy.instant_unlock,
            initial_unlock: vesting_policy.initial_unlock,
            lock_period: vesting_policy.lock_period,
            vesting_period: vesting_policy.vesting_period,
            bonded_amount: 0,
            vested_amount: 0,
        };
        storage::save_project(&e, project_id, &config);

        events::emit_project_initialized(&e, project_id, &initializer, amount, price);
        project_id
    }

    // ── Bond lifecycle ─────────────────────────────────────────────────────

    /// Deposit `lp_amount` LP tokens against a project and open a vesting
    /// position on the discounted token amount.
    ///
    /// The discount is selected from the project's policy (clamped to its
    /// bounds), the owed amount is `lp_amount * (1 + discount) / price` in
    /// fixed-point integer math, and the whole operation is a single
    /// transaction: LP transfer, ledger increment, position creation, and the
    /// project's `bonded_amount` update all land together or not at all.
    ///
    /// Returns the new bond index within the caller's ledger.
    ///
    /// Panics:
    /// - `"project not found"` for an unknown project id.
    /// - `"deposit amount must be positive"` for a zero deposit.
    /// - `"insufficient remaining supply"` if the owed amount would push
    ///   `bonded_amount` past the offered supply.
    /// - `"arithmetic overflow"` if the owed amount exceeds `u64` range.
    pub fn bond(e: Env, bonder: Address, project_bond_id: u64, lp_amount: u64) -> u64 {
        bonder.require_auth();
        if lp_amount == 0 {
            panic!("{}", ERR_ZERO_DEPOSIT);
        }

        let mut config = storage::load_project(&e, project_bond_id);
        let rate = discount::discount_rate(&config);
        let tokens_owed = math::tokens_owed(lp_amount, config.price, rate);

        let new_bonded = math::add_u64(config.bonded_amount, tokens_owed);
        if new_bonded > config.token_amount {
            panic!("{}", ERR_INSUFFICIENT_SUPPLY);
        }

        // Pull the deposit into the project's LP-receiving account
        // (caller must have approved).
        let contract = e.current_contract_address();
        TokenClient::new(&e, &config.lp_token).transfer_from(
            &contract,
            &bonder,
            &config.lp_vault,
            &(lp_amount as i128),
        );

        let mut ledger = storage::load_bonder_ledger(&e, project_bond_id, &bonder);
        ledger.total_bonds = math::add_u64(ledger.total_bonds, 1);
        let bond_id = ledger.total_bonds;
        storage::save_bonder_ledger(&e, project_bond_id, &bonder, &ledger);

        let position = VestingPosition {
            total_amount: tokens_owed,
            withdrawn_amount: 0,
            start_time: e.ledger().timestamp(),
        };
        storage::save_position(&e, project_bond_id, &bonder, bond_id, &position);

        config.bonded_amount = new_bonded;
        storage::save_project(&e, project_bond_id, &config);

        events::emit_bond_created(&e, project_bond_id, &bonder, bond_id, lp_amount, tokens_owed);
        bond_id
    }

    // ── Vesting withdrawal ─────────────────────────────────────────────────

    /// Release the newly unlocked portion of a vesting position to its
    /// bonding authority.
    ///
    /// The unlocked amount is recomputed from the ledger clock each call;
    /// only the delta over what was already withdrawn is transferred, so a
    /// repeat call without a clock advance rejects with
    /// `"nothing to withdraw"` rather than double-paying.
    ///
    /// Returns the amount released.
    ///
    /// Panics:
    /// - `"project not found"` for an unknown project id.
    /// - `"vesting position not found"` if the position does not exist or
    ///   belongs to a different authority.
    /// - `"nothing to withdraw"` if no new tokens have unlocked.
    pub fn withdraw_vesting(e: Env, bonder: Address, project_bond_id: u64, bond_id: u64) -> u64 {
        bonder.require_auth();

        let mut config = storage::load_project(&e, project_bond_id);
        let mut position = storage::load_position(&e, project_bond_id, &bonder, bond_id);

        let now = e.ledger().timestamp();
        let unlocked = vesting::unlocked_amount(&config, &position, now);
        let releasable = unlocked
            .min(position.total_amount)
            .saturating_sub(position.withdrawn_amount);
        if releasable == 0 {
            panic!("{}", ERR_NOTHING_TO_WITHDRAW);
        }

        // CEI: record the release before the outgoing transfer.
        position.withdrawn_amount = math::add_u64(position.withdrawn_amount, releasable);
        config.vested_amount = math::add_u64(config.vested_amount, releasable);
        storage::save_position(&e, project_bond_id, &bonder, bond_id, &position);
        storage::save_project(&e, project_bond_id, &config);

        let contract = e.current_contract_address();
        TokenClient::new(&e, &config.project_token).transfer(
            &contract,
            &bonder,
            &(releasable as i128),
        );

        events::emit_vesting_withdrawn(
            &e,
            project_bond_id,
            &bonder,
            bond_id,
            releasable,
            position.withdrawn_amount,
        );
        releasable
    }

    // ── Owner operations ───────────────────────────────────────────────────

    /// Transfer administrative control of a project to `new_authority`.
    /// Only the current owner may call this; no other field is touched.
    pub fn update_authority(e: Env, caller: Address, project_bond_id: u64, new_authority: Address) {
        let mut config = storage::load_project(&e, project_bond_id);
        require_owner(&caller, &config);

        let old_owner = config.owner.clone();
        config.owner = new_authority.clone();
        storage::save_project(&e, project_bond_id, &config);

        events::emit_authority_updated(&e, project_bond_id, &old_owner, &new_authority);
    }

    /// Update the project's base price. Owner only; the new price must be
    /// positive. Open positions are unaffected — the price applies to
    /// subsequent bonds.
    pub fn update_price(e: Env, caller: Address, project_bond_id: u64, new_price: u64) {
        let mut config = storage::load_project(&e, project_bond_id);
        require_owner(&caller, &config);
        if new_price == 0 {
            panic!("{}", ERR_POLICY_PRICE);
        }

        let old_price = config.price;
        config.price = new_price;
        storage::save_project(&e, project_bond_id, &config);

        events::emit_price_updated(&e, project_bond_id, old_price, new_price);
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns the project's config and running totals.
    /// Panics if the project does not exist.
    pub fn get_project(e: Env, project_bond_id: u64) -> ProjectConfig {
        storage::load_project(&e, project_bond_id)
    }

    /// Returns how many bonds `authority` has created against a project.
    pub fn get_total_bonds(e: Env, project_bond_id: u64, authority: Address) -> u64 {
        let ledger: BonderLedger = storage::load_bonder_ledger(&e, project_bond_id, &authority);
        ledger.total_bonds
    }

    /// Returns a vesting position. Panics if it does not exist.
    pub fn get_position(
        e: Env,
        project_bond_id: u64,
        authority: Address,
        bond_id: u64,
    ) -> VestingPosition {
        storage::load_position(&e, project_bond_id, &authority, bond_id)
    }

    /// Returns the amount a withdrawal would release right now, without
    /// mutating anything. Zero when nothing new has unlocked.
    pub fn claimable_amount(
        e: Env,
        project_bond_id: u64,
        authority: Address,
        bond_id: u64,
    ) -> u64 {
        let config = storage::load_project(&e, project_bond_id);
        let position = storage::load_position(&e, project_bond_id, &authority, bond_id);
        let unlocked = vesting::unlocked_amount(&config, &position, e.ledger().timestamp());
        unlocked
            .min(position.total_amount)
            .saturating_sub(position.withdrawn_amount)
    }

    /// Returns the token supply still available to bond against.
    pub fn remaining_supply(e: Env, project_bond_id: u64) -> u64 {
        let config = storage::load_project(&e, project_bond_id);
        config.token_amount - config.bonded_amount
    }
}
