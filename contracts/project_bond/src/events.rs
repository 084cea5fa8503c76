use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a new project is initialized.
///
/// # Topics
/// * `Symbol` - "project_initialized"
/// * `u64` - The new project id
///
/// # Data
/// * `Address` - The project owner
/// * `u64` - Total token supply offered
/// * `u64` - Base price
pub fn emit_project_initialized(e: &Env, project_id: u64, owner: &Address, amount: u64, price: u64) {
    let topics = (Symbol::new(e, "project_initialized"), project_id);
    let data = (owner.clone(), amount, price);
    e.events().publish(topics, data);
}

/// Emitted when a bond is created against a project.
///
/// # Topics
/// * `Symbol` - "bond_created"
/// * `u64` - The project id
/// * `Address` - The bonding authority
///
/// # Data
/// * `u64` - The bond index within the authority's ledger
/// * `u64` - The LP amount deposited
/// * `u64` - The discounted token amount owed
pub fn emit_bond_created(
    e: &Env,
    project_id: u64,
    bonder: &Address,
    bond_id: u64,
    lp_amount: u64,
    tokens_owed: u64,
) {
    let topics = (Symbol::new(e, "bond_created"), project_id, bonder.clone());
    let data = (bond_id, lp_amount, tokens_owed);
    e.events().publish(topics, data);
}

/// Emitted when newly unlocked tokens are withdrawn from a position.
///
/// # Topics
/// * `Symbol` - "vesting_withdrawn"
/// * `u64` - The project id
/// * `Address` - The bonding authority
///
/// # Data
/// * `u64` - The bond index
/// * `u64` - The amount released in this withdrawal
/// * `u64` - The position's cumulative withdrawn amount
pub fn emit_vesting_withdrawn(
    e: &Env,
    project_id: u64,
    bonder: &Address,
    bond_id: u64,
    released: u64,
    withdrawn_total: u64,
) {
    let topics = (Symbol::new(e, "vesting_withdrawn"), project_id, bonder.clone());
    let data = (bond_id, released, withdrawn_total);
    e.events().publish(topics, data);
}

/// Emitted when project ownership is transferred.
///
/// # Topics
/// * `Symbol` - "authority_updated"
/// * `u64` - The project id
///
/// # Data
/// * `Address` - The previous owner
/// * `Address` - The new owner
pub fn emit_authority_updated(e: &Env, project_id: u64, old_owner: &Address, new_owner: &Address) {
    let topics = (Symbol::new(e, "authority_updated"), project_id);
    let data = (old_owner.clone(), new_owner.clone());
    e.events().publish(topics, data);
}

/// Emitted when the project's base price is updated.
///
/// # Topics
/// * `Symbol` - "price_updated"
/// * `u64` - The project id
///
/// # Data
/// * `u64` - The previous price
/// * `u64` - The new price
pub fn emit_price_updated(e: &Env, project_id: u64, old_price: u64, new_price: u64) {
    let topics = (Symbol::new(e, "price_updated"), project_id);
    let data = (old_price, new_price);
    e.events().publish(topics, data);
}
