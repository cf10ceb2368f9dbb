//! Typed helpers over the two storage tiers used by the credit token.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type      | Description                      |
//! |-----------------|-----------|----------------------------------|
//! | `IssuanceOwner` | `Address` | Sole holder of issuance rights   |
//! | `TotalIssued`   | `i128`    | Sum of all credits ever issued   |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key            | Type   | Description                  |
//! |----------------|--------|------------------------------|
//! | `Balance(addr)`| `i128` | Credit balance per holder    |

use soroban_sdk::{contracttype, Address, Env};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Sole holder of issuance rights (Instance).
    IssuanceOwner,
    /// Running sum of issued credits (Instance).
    TotalIssued,
    /// Credit balance keyed by holder (Persistent).
    Balance(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn has_issuance_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::IssuanceOwner)
}

pub fn set_issuance_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::IssuanceOwner, owner);
    bump_instance(env);
}

/// Panics if the token has not been initialized.
pub fn get_issuance_owner(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::IssuanceOwner)
        .expect("issuance owner not set")
}

pub fn get_total_issued(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalIssued)
        .unwrap_or(0)
}

pub fn set_total_issued(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalIssued, &total);
    bump_instance(env);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let balance: Option<i128> = env.storage().persistent().get(&key);
    match balance {
        Some(b) => {
            bump_persistent(env, &key);
            b
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}
