#![allow(dead_code)]

extern crate std;

use crate::types::{Campaign, CampaignStatus};
use crate::{HARD_CAP, SOFT_CAP};

/// INV-1: the running total never exceeds the hard cap.
pub fn assert_total_within_cap(campaign: &Campaign) {
    assert!(
        campaign.total_raised <= HARD_CAP,
        "INV-1 violated: total_raised {} exceeds hard cap {}",
        campaign.total_raised,
        HARD_CAP
    );
}

/// INV-2: the running total is never negative.
pub fn assert_total_non_negative(campaign: &Campaign) {
    assert!(
        campaign.total_raised >= 0,
        "INV-2 violated: total_raised is negative ({})",
        campaign.total_raised
    );
}

/// INV-3: contribution invariant — after accepting `amount`, the total grows
/// by exactly `amount`.
pub fn assert_contribution_invariant(total_before: i128, total_after: i128, amount: i128) {
    assert_eq!(
        total_after,
        total_before + amount,
        "INV-3 violated: contribution invariant broken: {} + {} != {}",
        total_before,
        amount,
        total_after
    );
}

/// INV-4: the total never decreases.
pub fn assert_total_monotonic(total_before: i128, total_after: i128) {
    assert!(
        total_after >= total_before,
        "INV-4 violated: total_raised decreased from {} to {}",
        total_before,
        total_after
    );
}

/// INV-5: a finalized campaign must have ended first, and a total at or above
/// the soft cap must report an ended (or finalized) status.
pub fn assert_flags_consistent(campaign: &Campaign) {
    if campaign.finalized {
        assert!(
            matches!(campaign.status, CampaignStatus::Finalized),
            "INV-5 violated: finalized flag set but status is {:?}",
            campaign.status
        );
    }
    if campaign.total_raised >= SOFT_CAP || campaign.manually_closed {
        assert!(
            matches!(
                campaign.status,
                CampaignStatus::Ended | CampaignStatus::Finalized
            ),
            "INV-5 violated: campaign past soft cap or closed but status is {:?}",
            campaign.status
        );
    }
}

/// INV-6: status transition validity. Only forward transitions are allowed:
///   Pending ->  Active | Ended
///   Active  ->  Ended
///   Ended   ->  Finalized
///   Finalized -> (none)
/// Staying in the same state is always valid.
pub fn assert_valid_status_transition(from: &CampaignStatus, to: &CampaignStatus) {
    let valid = from == to
        || matches!(
            (from, to),
            (CampaignStatus::Pending, CampaignStatus::Active)
                | (CampaignStatus::Pending, CampaignStatus::Ended)
                | (CampaignStatus::Active, CampaignStatus::Ended)
                | (CampaignStatus::Ended, CampaignStatus::Finalized)
        );

    assert!(
        valid,
        "INV-6 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-7: has_ended is monotonic — once reported true, a later observation
/// must not report false.
pub fn assert_ended_monotonic(ended_before: bool, ended_after: bool) {
    assert!(
        !ended_before || ended_after,
        "INV-7 violated: has_ended went from true back to false"
    );
}

/// Run all stateless campaign invariants.
pub fn assert_all_campaign_invariants(campaign: &Campaign) {
    assert_total_within_cap(campaign);
    assert_total_non_negative(campaign);
    assert_flags_consistent(campaign);
}
