extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal,
};

use crate::events::ContributionAccepted;
use crate::test::{advance_to, setup, units};
use crate::CREDIT_RATE;

#[test]
fn test_contribution_event() {
    let t = setup();
    advance_to(&t.env, t.start);

    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(60));

    let all_events = t.env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: ("contrib", beneficiary)
    assert_eq!(last_event.0, t.coordinator.address);
    let expected_topics = vec![
        &t.env,
        symbol_short!("contrib").into_val(&t.env),
        t.beneficiary.into_val(&t.env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ContributionAccepted struct
    let event_data: ContributionAccepted = last_event.2.try_into_val(&t.env).unwrap();
    assert_eq!(
        event_data,
        ContributionAccepted {
            contributor: t.contributor.clone(),
            beneficiary: t.beneficiary.clone(),
            amount: units(60),
            credits: units(60) * CREDIT_RATE,
            total_raised: units(60),
        }
    );
}

#[test]
fn test_contribution_event_carries_running_total() {
    let t = setup();
    advance_to(&t.env, t.start);

    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(40));
    t.coordinator
        .contribute(&t.contributor, &t.beneficiary, &units(25));

    let all_events = t.env.events().all();
    let last_event = all_events.last().expect("No events found");

    let event_data: ContributionAccepted = last_event.2.try_into_val(&t.env).unwrap();
    assert_eq!(event_data.amount, units(25));
    assert_eq!(event_data.total_raised, units(65));
}

#[test]
fn test_closed_event() {
    let t = setup();
    advance_to(&t.env, t.start + 1);

    t.coordinator.close_presale(&t.controller);

    let all_events = t.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, t.coordinator.address);
    let expected_topics = vec![&t.env, symbol_short!("closed").into_val(&t.env)];
    assert_eq!(last_event.1, expected_topics);

    let closer: Address = last_event.2.try_into_val(&t.env).unwrap();
    assert_eq!(closer, t.controller);
}

#[test]
fn test_asset_owner_changed_event() {
    let t = setup();

    let new_owner = Address::generate(&t.env);
    t.coordinator.change_asset_owner(&t.controller, &new_owner);

    let all_events = t.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, t.coordinator.address);
    let expected_topics = vec![&t.env, symbol_short!("owner_chg").into_val(&t.env)];
    assert_eq!(last_event.1, expected_topics);

    let owner: Address = last_event.2.try_into_val(&t.env).unwrap();
    assert_eq!(owner, new_owner);
}

#[test]
fn test_finalized_event_has_no_payload() {
    let t = setup();
    advance_to(&t.env, t.end + 1);

    t.coordinator.finalize(&t.controller);

    let all_events = t.env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, t.coordinator.address);
    let expected_topics = vec![&t.env, symbol_short!("finalized").into_val(&t.env)];
    assert_eq!(last_event.1, expected_topics);

    // Payload decodes as unit: the event carries nothing beyond its topic.
    let _: () = last_event.2.try_into_val(&t.env).unwrap();
}
