//! # Types
//!
//! Shared data structures of the presale coordinator.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! The singleton campaign is stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once at initialization; never mutated.
//! - [`CampaignState`] — written on every accepted contribution and on the
//!   privileged close/finalize calls.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for
//! convenience.
//!
//! ### Status as a derived Finite-State Machine
//!
//! [`CampaignStatus`] is never stored. It is recomputed per query from the
//! ledger sequence, the running total, and the two persisted flags:
//!
//! ```text
//! Pending ──► Active ──► Ended ──► Finalized
//!     └──────────────────►┘
//! ```
//!
//! `Pending` and `Active` exist only in the clock; `Ended` folds in the soft
//! cap and the manual-close flag; `Finalized` is the one terminal state.
//! Transitions are one-directional, no state is ever re-entered.

use soroban_sdk::{contracttype, Address};

/// Derived lifecycle status of the campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// The contribution window has not opened yet.
    Pending,
    /// Accepting contributions.
    Active,
    /// Window elapsed, soft cap reached, or manually closed.
    Ended,
    /// Controller performed the one-time finalization.
    Finalized,
}

/// Immutable campaign configuration, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// First ledger sequence (inclusive) at which contributions are accepted.
    pub start_ledger: u32,
    /// Ledger sequence (exclusive) at which the window closes.
    pub end_ledger: u32,
    /// Address that receives every forwarded contribution.
    pub funds_recipient: Address,
    /// Sole identity allowed to close, finalize, and move issuance rights.
    pub controller: Address,
    /// Token contributions are paid in.
    pub payment_token: Address,
    /// Companion credit asset the coordinator issues against.
    pub credit_asset: Address,
}

/// Mutable campaign state, updated by accepted contributions and the
/// privileged close/finalize calls. Kept small so frequent writes are cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Sum of all accepted contribution amounts. Never decreases.
    pub total_raised: i128,
    /// Set once by the controller via `close_presale`; never cleared.
    pub manually_closed: bool,
    /// Set once by a successful `finalize`; never cleared.
    pub finalized: bool,
}

/// Full campaign record, reconstructed from the split
/// `CampaignConfig` + `CampaignState` entries plus the derived status.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub start_ledger: u32,
    pub end_ledger: u32,
    pub funds_recipient: Address,
    pub controller: Address,
    pub payment_token: Address,
    pub credit_asset: Address,
    pub total_raised: i128,
    pub manually_closed: bool,
    pub finalized: bool,
    /// Current lifecycle status, derived at query time.
    pub status: CampaignStatus,
}
