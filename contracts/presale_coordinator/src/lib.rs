//! # Presale Coordinator Contract
//!
//! This is the root crate of the **presale coordinator**: a time- and
//! cap-bounded fundraising campaign that converts contributions into credits
//! of a companion asset. It exposes the single Soroban contract
//! [`PresaleCoordinator`] whose entry points cover the full campaign
//! lifecycle:
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | [`PresaleCoordinator::init`]                     |
//! | Contribution | [`PresaleCoordinator::contribute`]               |
//! | Control      | `close_presale`, `change_asset_owner`, `finalize`|
//! | Queries      | `has_ended`, `status`, `total_raised`, `get_campaign` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event publication to
//! [`events`], and the credit asset is reached only through the client in
//! [`credit_asset`]. This file contains the lifecycle state machine and the
//! accept/reject decision for each contribution — nothing else.
//!
//! A contribution commits three effects as one unit: credits are issued to
//! the beneficiary, the value moves to the funds recipient, and the running
//! total grows. The host rolls the whole invocation back on any trap, so a
//! partially applied contribution is never observable.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env,
};

mod credit_asset;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_lifecycle;

use credit_asset::CreditAssetClient;
use events::ContributionAccepted;
use storage::{has_config, load_config, load_state, save_config, save_state};
pub use credit_asset::CreditAsset;
pub use types::{Campaign, CampaignConfig, CampaignState, CampaignStatus};

/// One whole unit of the payment token (7 decimals).
pub const UNIT: i128 = 10_000_000;

/// Smallest accepted single contribution (0.3 units).
pub const MIN_CONTRIBUTION: i128 = 3 * UNIT / 10;

/// Largest accepted single contribution.
pub const MAX_CONTRIBUTION: i128 = 1_000 * UNIT;

/// Aggregate threshold at which the campaign ends early. Reaching it exactly
/// ends the campaign; one unit below does not.
pub const SOFT_CAP: i128 = 5_500 * UNIT;

/// Absolute aggregate ceiling. A contribution that would push the total past
/// it is rejected outright.
pub const HARD_CAP: i128 = 5_550 * UNIT;

/// Credits issued per smallest unit of contributed value. Fixed conversion
/// parameter; confirm before deployment.
pub const CREDIT_RATE: i128 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized   = 1,
    /// Window bounds are inverted or start in the past.
    InvalidWindow        = 2,
    /// Contribution submitted outside `[start_ledger, end_ledger)`.
    OutsideWindow        = 3,
    /// The coordinator no longer holds the credit asset's issuance rights.
    IssuanceUnauthorized = 4,
    /// The controller closed the presale; no further contributions.
    ManuallyClosed       = 5,
    /// Amount below the minimum or above the per-contribution maximum.
    AmountOutOfBounds    = 6,
    /// Accepting the amount would breach the hard cap.
    CapExceeded          = 7,
    /// Caller is not the controller.
    NotAuthorized        = 8,
    /// Finalize called while the campaign is still running.
    NotEnded             = 9,
    AlreadyFinalized     = 10,
    AlreadyClosed        = 11,
    /// Arithmetic on the running total or credit amount would overflow.
    AmountOverflow       = 12,
}

/// True iff the campaign is over: window elapsed, soft cap reached, or
/// manually closed. Pure over the persisted fields and the ledger clock;
/// once true it stays true, because the clock only advances, the total only
/// grows, and the close flag is never cleared.
fn campaign_ended(env: &Env, config: &CampaignConfig, state: &CampaignState) -> bool {
    state.manually_closed
        || state.total_raised >= SOFT_CAP
        || env.ledger().sequence() >= config.end_ledger
}

/// Panics with `NotAuthorized` unless `caller` is the configured controller.
fn require_controller(env: &Env, config: &CampaignConfig, caller: &Address) {
    if caller != &config.controller {
        panic_with_error!(env, Error::NotAuthorized);
    }
}

#[contract]
pub struct PresaleCoordinator;

#[contractimpl]
impl PresaleCoordinator {
    /// Initialize the campaign.
    ///
    /// Must be called exactly once after deployment; a second call fails
    /// with `Error::AlreadyInitialized`.
    ///
    /// - `start_ledger` / `end_ledger` bound the contribution window
    ///   (`start < end`, `start` at or after the current ledger sequence).
    /// - `funds_recipient` receives every forwarded contribution.
    /// - `controller` is the sole identity allowed to close, finalize, and
    ///   move issuance rights.
    /// - `payment_token` is the token contributions are paid in.
    /// - `credit_asset` must already name this coordinator as its issuance
    ///   owner; deployment tooling deploys the credit token against the
    ///   coordinator's address before calling `init`.
    pub fn init(
        env: Env,
        start_ledger: u32,
        end_ledger: u32,
        funds_recipient: Address,
        controller: Address,
        payment_token: Address,
        credit_asset: Address,
    ) {
        if has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        if start_ledger >= end_ledger || start_ledger < env.ledger().sequence() {
            panic_with_error!(&env, Error::InvalidWindow);
        }

        // The coordinator must hold exclusive issuance rights from the start,
        // or it could never honor a single contribution.
        let issuer = CreditAssetClient::new(&env, &credit_asset).issuance_owner();
        if issuer != env.current_contract_address() {
            panic_with_error!(&env, Error::IssuanceUnauthorized);
        }

        save_config(
            &env,
            &CampaignConfig {
                start_ledger,
                end_ledger,
                funds_recipient,
                controller,
                payment_token,
                credit_asset,
            },
        );
        save_state(
            &env,
            &CampaignState {
                total_raised: 0,
                manually_closed: false,
                finalized: false,
            },
        );
    }

    /// Accept a contribution of `amount` on behalf of `beneficiary`.
    ///
    /// `contributor` pays and must authorize the call; `beneficiary`
    /// receives the issued credits and may be the contributor itself or a
    /// third party.
    ///
    /// Preconditions are checked in a fixed order, each with its own error:
    /// window, issuance rights, manual close, per-contribution bounds, hard
    /// cap. On success the credits are issued, the value is forwarded to the
    /// funds recipient, and the running total grows — all three or none.
    pub fn contribute(env: Env, contributor: Address, beneficiary: Address, amount: i128) {
        contributor.require_auth();

        let config = load_config(&env);
        let mut state = load_state(&env);

        let sequence = env.ledger().sequence();
        if sequence < config.start_ledger || sequence >= config.end_ledger {
            panic_with_error!(&env, Error::OutsideWindow);
        }

        let credit = CreditAssetClient::new(&env, &config.credit_asset);
        if credit.issuance_owner() != env.current_contract_address() {
            panic_with_error!(&env, Error::IssuanceUnauthorized);
        }

        if state.manually_closed {
            panic_with_error!(&env, Error::ManuallyClosed);
        }

        if !(MIN_CONTRIBUTION..=MAX_CONTRIBUTION).contains(&amount) {
            panic_with_error!(&env, Error::AmountOutOfBounds);
        }

        let new_total = match state.total_raised.checked_add(amount) {
            Some(total) => total,
            None => panic_with_error!(&env, Error::AmountOverflow),
        };
        if new_total > HARD_CAP {
            panic_with_error!(&env, Error::CapExceeded);
        }

        let credits = match amount.checked_mul(CREDIT_RATE) {
            Some(credits) => credits,
            None => panic_with_error!(&env, Error::AmountOverflow),
        };

        credit.issue(&beneficiary, &credits);

        token::Client::new(&env, &config.payment_token).transfer(
            &contributor,
            &config.funds_recipient,
            &amount,
        );

        state.total_raised = new_total;
        save_state(&env, &state);

        events::contribution_accepted(
            &env,
            ContributionAccepted {
                contributor,
                beneficiary,
                amount,
                credits,
                total_raised: new_total,
            },
        );
    }

    /// True iff the campaign is over: the window elapsed, the soft cap was
    /// reached, or the controller closed it. Monotonic: once true it stays
    /// true for the campaign's lifetime.
    pub fn has_ended(env: Env) -> bool {
        let config = load_config(&env);
        let state = load_state(&env);
        campaign_ended(&env, &config, &state)
    }

    /// Derived lifecycle status. Never stored; recomputed per query.
    pub fn status(env: Env) -> CampaignStatus {
        let config = load_config(&env);
        let state = load_state(&env);

        if state.finalized {
            CampaignStatus::Finalized
        } else if campaign_ended(&env, &config, &state) {
            CampaignStatus::Ended
        } else if env.ledger().sequence() < config.start_ledger {
            CampaignStatus::Pending
        } else {
            CampaignStatus::Active
        }
    }

    /// Sum of all accepted contribution amounts.
    pub fn total_raised(env: Env) -> i128 {
        load_state(&env).total_raised
    }

    /// Full campaign record, reconstructed from config and state.
    pub fn get_campaign(env: Env) -> Campaign {
        let config = load_config(&env);
        let state = load_state(&env);
        let status = Self::status(env.clone());

        Campaign {
            start_ledger: config.start_ledger,
            end_ledger: config.end_ledger,
            funds_recipient: config.funds_recipient,
            controller: config.controller,
            payment_token: config.payment_token,
            credit_asset: config.credit_asset,
            total_raised: state.total_raised,
            manually_closed: state.manually_closed,
            finalized: state.finalized,
            status,
        }
    }

    /// Close the presale ahead of its window.
    ///
    /// `caller` must authorize and be the controller. Immediate and
    /// irreversible; a repeat call fails with `Error::AlreadyClosed` and
    /// changes nothing.
    pub fn close_presale(env: Env, caller: Address) {
        caller.require_auth();

        let config = load_config(&env);
        require_controller(&env, &config, &caller);

        let mut state = load_state(&env);
        if state.manually_closed {
            panic_with_error!(&env, Error::AlreadyClosed);
        }

        state.manually_closed = true;
        save_state(&env, &state);

        events::presale_closed(&env, &caller);
    }

    /// Transfer the credit asset's issuance rights to `new_owner`.
    ///
    /// `caller` must authorize and be the controller. Once the rights are
    /// gone the coordinator can no longer honor credit issuance, so every
    /// subsequent contribution fails with `Error::IssuanceUnauthorized`.
    pub fn change_asset_owner(env: Env, caller: Address, new_owner: Address) {
        caller.require_auth();

        let config = load_config(&env);
        require_controller(&env, &config, &caller);

        CreditAssetClient::new(&env, &config.credit_asset).transfer_issuance(&new_owner);

        events::asset_owner_changed(&env, &new_owner);
    }

    /// Mark the campaign finalized and publish the `finalized` event.
    ///
    /// `caller` must authorize and be the controller; the campaign must have
    /// ended and must not already be finalized. Downstream finalization
    /// actions on the collaborators happen outside this contract.
    pub fn finalize(env: Env, caller: Address) {
        caller.require_auth();

        let config = load_config(&env);
        require_controller(&env, &config, &caller);

        let mut state = load_state(&env);
        if state.finalized {
            panic_with_error!(&env, Error::AlreadyFinalized);
        }
        if !campaign_ended(&env, &config, &state) {
            panic_with_error!(&env, Error::NotEnded);
        }

        state.finalized = true;
        save_state(&env, &state);

        events::finalized(&env);
    }
}
