//! # Storage
//!
//! Typed helpers over the instance storage used by the coordinator.
//!
//! The campaign is a singleton per deployment, so both entries live in the
//! instance tier and share the contract's lifetime:
//!
//! | Key      | Type             | Description                          |
//! |----------|------------------|--------------------------------------|
//! | `Config` | `CampaignConfig` | Immutable campaign configuration     |
//! | `State`  | `CampaignState`  | Mutable totals and lifecycle flags   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day
//! remaining.
//!
//! ## Why split Config and State?
//!
//! Contributions are the high-frequency write path. Rewriting the immutable
//! addresses and window bounds on every contribution is wasted ledger I/O;
//! `CampaignState` is three small fields. The public API stays clean via the
//! reconstructed [`Campaign`] return type.

use soroban_sdk::{contracttype, Env};

use crate::types::{CampaignConfig, CampaignState};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable campaign configuration (Instance).
    Config,
    /// Mutable campaign state (Instance).
    State,
}

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Whether `init` has already run.
pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn save_config(env: &Env, config: &CampaignConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Panics if the coordinator has not been initialized.
pub fn load_config(env: &Env) -> CampaignConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("campaign not initialized")
}

pub fn save_state(env: &Env, state: &CampaignState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Panics if the coordinator has not been initialized.
pub fn load_state(env: &Env) -> CampaignState {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("campaign not initialized")
}
