//! Integration tests for the unified store.
//!
//! These walk the product scenarios end-to-end through command dispatch:
//! the treasure find/score flow, the tier progression, and the booking
//! acceptance matrix.

use chrono::{Duration, Utc};

use trailquest_core::{
    BookingDraft, BookingStatus, Command, CoreError, Event, Tier, TravelStore,
};

fn future_date() -> chrono::NaiveDate {
    (Utc::now() + Duration::days(30)).date_naive()
}

fn valid_draft() -> BookingDraft {
    BookingDraft {
        service: "Pokhara Adventure Package".into(),
        travel_date: future_date(),
        party_size: 2,
        name: "Mike Johnson".into(),
        email: "mike@example.com".into(),
        phone: "9845678901".into(),
    }
}

#[test]
fn find_twice_then_reset_scenario() {
    // Seed catalog: prayer-wheel 100, temple-bell 150, mountain-view 300.
    let mut store = TravelStore::new();

    let events = store
        .dispatch(Command::MarkFound {
            item_id: "ancient-temple-bell".into(),
        })
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(store.hunt().total_score(), 150);
    assert_eq!(store.hunt().found_ids(), ["ancient-temple-bell"]);

    // Second find of the same item is a no-op.
    let events = store
        .dispatch(Command::MarkFound {
            item_id: "ancient-temple-bell".into(),
        })
        .unwrap();
    assert!(events.is_empty());
    assert_eq!(store.hunt().total_score(), 150);
    assert_eq!(store.hunt().found_count(), 1);

    let events = store
        .dispatch(Command::MarkFound {
            item_id: "mountain-view-point".into(),
        })
        .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(store.hunt().total_score(), 450);
    assert_eq!(
        store.hunt().found_ids(),
        ["ancient-temple-bell", "mountain-view-point"]
    );

    store.dispatch(Command::ResetHunt).unwrap();
    assert_eq!(store.hunt().total_score(), 0);
    assert!(store.hunt().found_ids().is_empty());
    for item in store.hunt().items() {
        assert!(!item.is_found);
        assert!(item.found_at.is_none());
    }
}

#[test]
fn tier_walk_through_dispatch() {
    let mut store = TravelStore::new();
    store
        .dispatch(Command::SignIn {
            name: "John Doe".into(),
            email: "john@example.com".into(),
        })
        .unwrap();
    assert_eq!(store.account().tier(), Some(Tier::Rookie));

    store.dispatch(Command::AddScore { delta: 500 }).unwrap();
    assert_eq!(store.account().tier(), Some(Tier::Explorer));

    store.dispatch(Command::AddScore { delta: 1_500 }).unwrap();
    assert_eq!(store.account().score(), Some(2_000));
    assert_eq!(store.account().tier(), Some(Tier::Adventurer));

    store.dispatch(Command::AddScore { delta: 8_000 }).unwrap();
    assert_eq!(store.account().score(), Some(10_000));
    assert_eq!(store.account().tier(), Some(Tier::Legend));
}

#[test]
fn full_hunt_reaches_explorer() {
    let mut store = TravelStore::new();
    store.sign_in("Emma Wilson", "emma@example.com");

    for id in [
        "ancient-temple-bell",
        "prayer-wheel-collection",
        "mountain-view-point",
    ] {
        store.dispatch(Command::MarkFound { item_id: id.into() }).unwrap();
    }

    assert_eq!(store.hunt().completion_pct(), 100.0);
    assert_eq!(store.hunt().total_score(), 550);
    assert_eq!(store.account().score(), Some(550));
    assert_eq!(store.account().tier(), Some(Tier::Explorer));
}

#[test]
fn reset_and_refind_doubles_account_score_only() {
    // The session counter resets, the account counter keeps accumulating:
    // the two are deliberately parallel.
    let mut store = TravelStore::new();
    store.sign_in("J", "j@example.com");

    store.discover("mountain-view-point");
    store.dispatch(Command::ResetHunt).unwrap();
    store.discover("mountain-view-point");

    assert_eq!(store.hunt().total_score(), 300);
    assert_eq!(store.account().score(), Some(600));
}

#[test]
fn booking_flow_through_dispatch() {
    let mut store = TravelStore::new();

    let events = store
        .dispatch(Command::SubmitBooking {
            draft: Some(valid_draft()),
        })
        .unwrap();
    let booking_id = match &events[0] {
        Event::BookingSubmitted { booking_id, .. } => booking_id.clone(),
        other => panic!("Expected BookingSubmitted, got {other:?}"),
    };
    assert_eq!(store.bookings().len(), 1);
    assert_eq!(
        store.bookings().booking(&booking_id).unwrap().status,
        BookingStatus::Pending
    );

    store
        .dispatch(Command::UpdateBookingStatus {
            booking_id: booking_id.clone(),
            status: BookingStatus::Confirmed,
        })
        .unwrap();
    assert_eq!(
        store.bookings().booking(&booking_id).unwrap().status,
        BookingStatus::Confirmed
    );
}

#[test]
fn staged_draft_submission() {
    let mut store = TravelStore::new();
    store
        .dispatch(Command::StageBooking {
            draft: valid_draft(),
        })
        .unwrap();
    assert!(store.bookings().current_draft().is_some());

    store.dispatch(Command::SubmitBooking { draft: None }).unwrap();
    assert!(store.bookings().current_draft().is_none());
    assert_eq!(store.bookings().len(), 1);
}

#[test]
fn rejected_booking_reports_each_field_and_mutates_nothing() {
    let mut store = TravelStore::new();
    let bad = BookingDraft {
        service: "Nowhere".into(),
        travel_date: (Utc::now() - Duration::days(1)).date_naive(),
        party_size: 21,
        name: "A".into(),
        email: "not-an-email".into(),
        phone: "12345".into(),
    };

    let err = store
        .dispatch(Command::SubmitBooking { draft: Some(bad) })
        .unwrap_err();
    match err {
        CoreError::Booking(trailquest_core::BookingError::Rejected(errors)) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(
                fields,
                ["service", "travel_date", "party_size", "name", "email", "phone"]
            );
        }
        other => panic!("Expected rejected booking, got {other:?}"),
    }
    assert!(store.bookings().is_empty());
}

#[test]
fn booking_boundary_values_accepted() {
    let mut store = TravelStore::new();

    let mut one = valid_draft();
    one.party_size = 1;
    one.name = "Al".into();
    one.phone = "1234567890".into();
    store
        .dispatch(Command::SubmitBooking { draft: Some(one) })
        .unwrap();

    let mut twenty = valid_draft();
    twenty.party_size = 20;
    store
        .dispatch(Command::SubmitBooking {
            draft: Some(twenty),
        })
        .unwrap();

    assert_eq!(store.bookings().len(), 2);
}
