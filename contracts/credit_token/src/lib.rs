//! # Credit Token Contract
//!
//! Mintable companion asset for the presale coordinator. Credits are issued
//! to contribution beneficiaries while the presale runs; there is no holder
//! transfer surface here — unlocking credits for circulation is a
//! post-finalization concern handled outside this contract.
//!
//! | Concern          | Entry Point(s)                         |
//! |------------------|----------------------------------------|
//! | Bootstrap        | [`CreditToken::init`]                  |
//! | Issuance         | [`CreditToken::issue`]                 |
//! | Issuance rights  | `issuance_owner`, `transfer_issuance`  |
//! | Queries          | `balance`, `total_issued`              |
//!
//! Issuance rights belong to a single address (normally the coordinator
//! contract). Every `issue` and `transfer_issuance` call runs under that
//! address's authority, so a coordinator that has handed its rights away can
//! no longer mint.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, symbol_short, Address, Env,
};

mod storage;


use storage::{
    get_balance, get_issuance_owner, get_total_issued, has_issuance_owner, set_balance,
    set_issuance_owner, set_total_issued,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    InvalidAmount = 2,
    BalanceOverflow = 3,
}

#[contract]
pub struct CreditToken;

#[contractimpl]
impl CreditToken {
    /// Set the initial issuance owner.
    ///
    /// Must be called exactly once after deployment; a second call fails
    /// with `Error::AlreadyInitialized`.
    pub fn init(env: Env, issuance_owner: Address) {
        if has_issuance_owner(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_issuance_owner(&env, &issuance_owner);
    }

    /// Mint `amount` credits to `to`.
    ///
    /// Runs under the issuance owner's authority; `amount` must be positive.
    pub fn issue(env: Env, to: Address, amount: i128) {
        let owner = get_issuance_owner(&env);
        owner.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let balance = match get_balance(&env, &to).checked_add(amount) {
            Some(b) => b,
            None => panic_with_error!(&env, Error::BalanceOverflow),
        };
        let total = match get_total_issued(&env).checked_add(amount) {
            Some(t) => t,
            None => panic_with_error!(&env, Error::BalanceOverflow),
        };

        set_balance(&env, &to, balance);
        set_total_issued(&env, total);

        env.events()
            .publish((symbol_short!("issued"), to), amount);
    }

    /// Current holder of issuance rights.
    pub fn issuance_owner(env: Env) -> Address {
        get_issuance_owner(&env)
    }

    /// Hand issuance rights to `new_owner`.
    ///
    /// Runs under the current owner's authority. Rights move immediately;
    /// there is no way back through this contract.
    pub fn transfer_issuance(env: Env, new_owner: Address) {
        let owner = get_issuance_owner(&env);
        owner.require_auth();

        set_issuance_owner(&env, &new_owner);

        env.events()
            .publish((symbol_short!("own_xfer"),), (owner, new_owner));
    }

    /// Credit balance of `id`.
    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    /// Sum of all credits issued so far.
    pub fn total_issued(env: Env) -> i128 {
        get_total_issued(&env)
    }
}
