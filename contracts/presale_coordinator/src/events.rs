//! Contract events published for off-chain consumers.
//!
//! These are mirrored by `backend/indexer/src/events.rs` — keep the topic
//! symbols and payload shapes in sync when changing either side.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Payload of the `contrib` event, published once per accepted contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAccepted {
    /// Caller that paid the contribution.
    pub contributor: Address,
    /// Identity credited with the issued credits.
    pub beneficiary: Address,
    /// Contributed value, in the payment token's smallest unit.
    pub amount: i128,
    /// Credits issued for this contribution.
    pub credits: i128,
    /// Running total after this contribution.
    pub total_raised: i128,
}

/// Topic: `("contrib", beneficiary)`, data: [`ContributionAccepted`].
pub fn contribution_accepted(env: &Env, event: ContributionAccepted) {
    env.events().publish(
        (symbol_short!("contrib"), event.beneficiary.clone()),
        event,
    );
}

/// Topic: `("closed",)`, data: the controller that closed the presale.
pub fn presale_closed(env: &Env, controller: &Address) {
    env.events()
        .publish((symbol_short!("closed"),), controller.clone());
}

/// Topic: `("owner_chg",)`, data: the new issuance owner.
pub fn asset_owner_changed(env: &Env, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("owner_chg"),), new_owner.clone());
}

/// Topic: `("finalized",)`, no payload. Published exactly once.
pub fn finalized(env: &Env) {
    env.events().publish((symbol_short!("finalized"),), ());
}
