extern crate std;

use crate::invariants::{
    assert_all_campaign_invariants, assert_contribution_invariant, assert_ended_monotonic,
    assert_total_monotonic, assert_valid_status_transition,
};
use crate::test::{advance_to, setup, units};
use crate::CampaignStatus;

#[test]
fn test_pending_before_start() {
    let t = setup();
    assert_eq!(t.coordinator.status(), CampaignStatus::Pending);
    assert!(!t.coordinator.has_ended());
}

#[test]
fn test_active_within_window() {
    let t = setup();
    advance_to(&t.env, t.start);
    assert_eq!(t.coordinator.status(), CampaignStatus::Active);
    assert!(!t.coordinator.has_ended());
}

#[test]
fn test_ended_after_end_marker() {
    let t = setup();
    advance_to(&t.env, t.start + 1);
    assert!(!t.coordinator.has_ended());

    advance_to(&t.env, t.end);
    assert!(t.coordinator.has_ended());
    assert_eq!(t.coordinator.status(), CampaignStatus::Ended);
}

#[test]
fn test_not_ended_under_soft_cap() {
    let t = setup();
    advance_to(&t.env, t.start);

    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(60));
    assert!(!t.coordinator.has_ended());
}

#[test]
fn test_not_ended_just_under_soft_cap() {
    let t = setup();
    advance_to(&t.env, t.start);

    for _ in 0..5 {
        t.coordinator
            .contribute(&t.contributor, &t.beneficiary, &units(1_000));
    }
    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(499));

    assert_eq!(t.coordinator.total_raised(), units(5_499));
    assert!(!t.coordinator.has_ended());
}

#[test]
fn test_ended_at_exact_soft_cap() {
    let t = setup();
    advance_to(&t.env, t.start);

    for _ in 0..5 {
        t.coordinator
            .contribute(&t.contributor, &t.beneficiary, &units(1_000));
    }
    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(500));

    assert_eq!(t.coordinator.total_raised(), units(5_500));
    assert!(t.coordinator.has_ended());
    assert_eq!(t.coordinator.status(), CampaignStatus::Ended);
}

#[test]
fn test_ended_when_manually_closed() {
    let t = setup();
    advance_to(&t.env, t.start + 1);
    assert!(!t.coordinator.has_ended());

    t.coordinator.close_presale(&t.controller);
    assert!(t.coordinator.has_ended());
    assert_eq!(t.coordinator.status(), CampaignStatus::Ended);
}

#[test]
fn test_ended_stays_true_as_clock_advances() {
    let t = setup();
    advance_to(&t.env, t.start + 1);

    t.coordinator.close_presale(&t.controller);

    let mut ended = t.coordinator.has_ended();
    assert!(ended);
    for sequence in [t.start + 2, t.end, t.end + 100] {
        advance_to(&t.env, sequence);
        let now_ended = t.coordinator.has_ended();
        assert_ended_monotonic(ended, now_ended);
        ended = now_ended;
    }
    assert!(ended);
}

#[test]
fn test_status_walks_forward_only() {
    let t = setup();

    let mut previous = t.coordinator.status();
    assert_eq!(previous, CampaignStatus::Pending);

    // Pending -> Active
    advance_to(&t.env, t.start);
    let status = t.coordinator.status();
    assert_valid_status_transition(&previous, &status);
    assert_eq!(status, CampaignStatus::Active);
    previous = status;

    // Active -> Active across contributions
    let mut total = t.coordinator.total_raised();
    for amount in [units(100), units(700)] {
        t.coordinator
            .contribute(&t.contributor, &t.beneficiary, &amount);
        let new_total = t.coordinator.total_raised();
        assert_contribution_invariant(total, new_total, amount);
        assert_total_monotonic(total, new_total);
        total = new_total;

        let status = t.coordinator.status();
        assert_valid_status_transition(&previous, &status);
        previous = status;

        assert_all_campaign_invariants(&t.coordinator.get_campaign());
    }

    // Active -> Ended
    advance_to(&t.env, t.end);
    let status = t.coordinator.status();
    assert_valid_status_transition(&previous, &status);
    assert_eq!(status, CampaignStatus::Ended);
    previous = status;

    // Ended -> Finalized
    t.coordinator.finalize(&t.controller);
    let status = t.coordinator.status();
    assert_valid_status_transition(&previous, &status);
    assert_eq!(status, CampaignStatus::Finalized);

    assert_all_campaign_invariants(&t.coordinator.get_campaign());
}

#[test]
fn test_pending_campaign_can_be_closed() {
    let t = setup();
    assert_eq!(t.coordinator.status(), CampaignStatus::Pending);

    // Manual close before the window opens jumps straight to Ended.
    t.coordinator.close_presale(&t.controller);
    assert_eq!(t.coordinator.status(), CampaignStatus::Ended);
    assert!(t.coordinator.has_ended());
}

#[test]
fn test_total_equals_sum_of_accepted_contributions() {
    let t = setup();
    advance_to(&t.env, t.start);

    let amounts = [units(1), units(17), units(300), units(42)];
    let mut expected = 0i128;
    for amount in amounts {
        t.coordinator
            .contribute(&t.contributor, &t.beneficiary, &amount);
        expected += amount;
    }

    // A rejected contribution contributes nothing to the sum.
    let _ = t
        .coordinator
        .try_contribute(&t.contributor, &t.beneficiary, &units(1_001));

    assert_eq!(t.coordinator.total_raised(), expected);
}
