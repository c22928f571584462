use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::fixtures::{
    earnings_summary, format_dollars, search_rides, search_users, AccountStatus, BookingMode,
    BookingRequest, EarningsTimeframe, RideAction, RideStatus, UserAction, ACTIVE_RIDES,
    COMPLETED_RIDES, MANAGED_DRIVERS, MANAGED_RIDERS, MANAGED_STAFF, RIDE_OPTIONS,
    SCHEDULED_RIDES, SERVICE_FEE,
};

#[test]
fn managed_ride_ids_are_unique() {
    let mut seen = HashSet::new();
    for ride in ACTIVE_RIDES.iter().chain(SCHEDULED_RIDES).chain(COMPLETED_RIDES) {
        assert!(seen.insert(ride.id), "duplicate ride id {}", ride.id);
    }
}

#[test]
fn managed_user_ids_are_unique() {
    let mut seen = HashSet::new();
    for user in MANAGED_RIDERS.iter().chain(MANAGED_DRIVERS).chain(MANAGED_STAFF) {
        assert!(seen.insert(user.id), "duplicate user id {}", user.id);
    }
}

#[test]
fn every_ride_row_offers_a_destructive_action() {
    for ride in ACTIVE_RIDES.iter().chain(SCHEDULED_RIDES).chain(COMPLETED_RIDES) {
        let menu = RideAction::menu(ride.status);
        assert!(!menu.is_empty());
        let finished = matches!(ride.status, RideStatus::Completed | RideStatus::Cancelled);
        assert_eq!(menu.contains(&RideAction::Delete), finished);
        assert_eq!(menu.contains(&RideAction::Cancel), !finished);
    }
}

#[test]
fn every_user_row_ends_with_delete() {
    for user in MANAGED_RIDERS.iter().chain(MANAGED_DRIVERS).chain(MANAGED_STAFF) {
        let menu = UserAction::menu(user.status, true);
        assert_eq!(menu.first(), Some(&UserAction::Edit));
        assert_eq!(menu.last(), Some(&UserAction::Delete));
        if user.status == AccountStatus::Pending {
            assert!(menu.contains(&UserAction::Approve));
        }
    }
}

#[test]
fn searches_ignore_case() {
    assert_eq!(
        search_users(MANAGED_DRIVERS, "DAVE").len(),
        search_users(MANAGED_DRIVERS, "dave").len()
    );
    assert_eq!(
        search_rides(COMPLETED_RIDES, "AIRPORT").len(),
        search_rides(COMPLETED_RIDES, "airport").len()
    );
}

#[test]
fn booking_flow_totals_fare_and_fee() {
    let option = &RIDE_OPTIONS[0];
    let mut request = BookingRequest {
        pickup: "MG Road".into(),
        destination: "Airport".into(),
        mode: BookingMode::Schedule,
        ..Default::default()
    };
    assert_eq!(
        request.validate(),
        Err("Please select date and time for scheduled ride")
    );
    request.scheduled_date = "2025-05-01".into();
    request.scheduled_time = "09:30".into();
    request.ride_option = Some(option.id.to_string());
    assert_eq!(request.validate(), Ok(()));
    assert_eq!(request.total(), Some(option.price + SERVICE_FEE));
}

#[test]
fn earnings_average_is_per_ride() {
    for timeframe in [EarningsTimeframe::Weekly, EarningsTimeframe::Monthly] {
        let summary = earnings_summary(timeframe);
        let expected = summary.total / f64::from(timeframe.rides_completed());
        assert_eq!(
            format_dollars(summary.per_ride_average),
            format_dollars(expected)
        );
    }
}
