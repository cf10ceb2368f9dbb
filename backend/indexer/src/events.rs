//! Canonical event types emitted by the presale coordinator contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/presale_coordinator/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the coordinator contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A contribution was accepted and credits issued (`contrib` topic).
    ContributionAccepted,
    /// The controller closed the presale ahead of its window (`closed` topic).
    PresaleClosed,
    /// Credit asset issuance rights were moved away (`owner_chg` topic).
    AssetOwnerChanged,
    /// The campaign was finalized (`finalized` topic, no payload).
    Finalized,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "contrib" => Self::ContributionAccepted,
            "closed" => Self::PresaleClosed,
            "owner_chg" => Self::AssetOwnerChanged,
            "finalized" => Self::Finalized,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContributionAccepted => "contribution_accepted",
            Self::PresaleClosed => "presale_closed",
            Self::AssetOwnerChanged => "asset_owner_changed",
            Self::Finalized => "finalized",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded presale event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresaleEvent {
    pub event_type: String,
    pub contributor: Option<String>,
    pub beneficiary: Option<String>,
    pub amount: Option<String>,
    pub credits: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub contributor: Option<String>,
    pub beneficiary: Option<String>,
    pub amount: Option<String>,
    pub credits: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
