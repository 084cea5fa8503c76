/// All panic messages used by the project_bond contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.
///
/// Every `invalid policy:` message is an `InvalidPolicy` rejection at project
/// initialization; the remaining constants map one-to-one onto the operation
/// failure kinds reported to callers.
pub const ERR_POLICY_AMOUNT: &str = "invalid policy: token amount must be positive";
pub const ERR_POLICY_PRICE: &str = "invalid policy: price must be positive";
pub const ERR_POLICY_DISCOUNT_BOUNDS: &str = "invalid policy: discount bounds out of range";
pub const ERR_POLICY_UNLOCK_SPLIT: &str = "invalid policy: instant plus initial unlock exceeds 100%";
pub const ERR_POLICY_RELEASE_INTERVAL: &str = "invalid policy: release interval must be positive";
pub const ERR_POLICY_VESTING_PERIOD: &str = "invalid policy: vesting period shorter than lock period";
pub const ERR_ZERO_DEPOSIT: &str = "deposit amount must be positive";
pub const ERR_PROJECT_NOT_FOUND: &str = "project not found";
pub const ERR_POSITION_NOT_FOUND: &str = "vesting position not found";
pub const ERR_INSUFFICIENT_SUPPLY: &str = "insufficient remaining supply";
pub const ERR_OVERFLOW: &str = "arithmetic overflow";
pub const ERR_NOTHING_TO_WITHDRAW: &str = "nothing to withdraw";
pub const ERR_UNAUTHORIZED: &str = "unauthorized";
