//! Cross-contract interface to the companion credit asset.
//!
//! The coordinator only depends on this issuance surface, not on any
//! concrete token implementation. `contracts/credit_token` implements it;
//! any contract exposing the same entry points works.

use soroban_sdk::{contractclient, Address, Env};

/// Issuance contract the coordinator expects from its credit asset.
#[contractclient(name = "CreditAssetClient")]
pub trait CreditAsset {
    /// Mint `amount` credits to `to`. Runs under the issuance owner's
    /// authority.
    fn issue(env: Env, to: Address, amount: i128);

    /// Current holder of issuance rights.
    fn issuance_owner(env: Env) -> Address;

    /// Hand issuance rights to `new_owner`. Runs under the current owner's
    /// authority.
    fn transfer_issuance(env: Env, new_owner: Address);
}
