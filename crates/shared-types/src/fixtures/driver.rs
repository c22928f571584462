use super::{ActionTone, RideStatus, SeriesPoint, StatTile};

/// An incoming request on the driver dashboard while online.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideRequest {
    pub id: &'static str,
    pub rider: &'static str,
    pub pickup: &'static str,
    pub destination: &'static str,
    pub distance: &'static str,
    pub fare: &'static str,
    pub eta: &'static str,
}

pub const PENDING_REQUESTS: &[RideRequest] = &[
    RideRequest {
        id: "request-1",
        rider: "Emma Wilson",
        pickup: "Downtown, Main St",
        destination: "Airport Terminal 2",
        distance: "12.5 miles",
        fare: "$28.50",
        eta: "15 min away",
    },
    RideRequest {
        id: "request-2",
        rider: "James Brown",
        pickup: "Central Park",
        destination: "Grand Central Station",
        distance: "3.2 miles",
        fare: "$12.75",
        eta: "5 min away",
    },
];

/// Today's summary tiles on the driver dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverShiftSummary {
    pub area: &'static str,
    pub earnings_today: f64,
    pub daily_goal: f64,
    pub online_time: &'static str,
}

impl DriverShiftSummary {
    /// Whole-percent progress toward the daily goal, capped at 100.
    pub fn goal_percent(&self) -> f64 {
        if self.daily_goal <= 0.0 {
            return 0.0;
        }
        (self.earnings_today * 100.0 / self.daily_goal).round().min(100.0)
    }
}

pub const SHIFT_SUMMARY: DriverShiftSummary = DriverShiftSummary {
    area: "Downtown Area",
    earnings_today: 85.25,
    daily_goal: 150.0,
    online_time: "4h 25m",
};

pub const DRIVER_DAY_STATS: &[StatTile] = &[
    StatTile { label: "Total Rides", value: "5" },
    StatTile { label: "Miles Driven", value: "37.2" },
    StatTile { label: "Rating", value: "4.9" },
    StatTile { label: "Hours Online", value: "3" },
];

/// A notice in the driver dashboard's notification list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverNotice {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const DRIVER_NOTICES: &[DriverNotice] = &[
    DriverNotice {
        title: "New promotion available",
        detail: "Complete 10 rides to earn a $25 bonus",
    },
    DriverNotice {
        title: "Weekly summary ready",
        detail: "Your earnings report for last week is available",
    },
];

/// Toast text after flipping availability. `now_online` is the new state.
pub fn availability_message(now_online: bool) -> &'static str {
    if now_online {
        "You are now online and accepting rides"
    } else {
        "You are now offline"
    }
}

/// Driver-side actions on a ride, each answered by a toast.
///
/// The dashboard's nearby requests and the manage-rides request tab word
/// their confirmations differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverAction {
    AcceptNearby,
    DeclineNearby,
    AcceptRequest,
    DeclineRequest,
    Start,
    Cancel,
}

impl DriverAction {
    pub fn message(&self) -> &'static str {
        match self {
            DriverAction::AcceptNearby => "Ride accepted! Navigate to the pickup location.",
            DriverAction::DeclineNearby => "Ride declined",
            DriverAction::AcceptRequest => "Ride request accepted!",
            DriverAction::DeclineRequest => "Ride request declined.",
            DriverAction::Start => "Ride started! Navigate to pickup location.",
            DriverAction::Cancel => "Ride cancelled.",
        }
    }

    pub fn tone(&self) -> ActionTone {
        match self {
            DriverAction::DeclineNearby | DriverAction::DeclineRequest => ActionTone::Info,
            DriverAction::Cancel => ActionTone::Error,
            _ => ActionTone::Success,
        }
    }
}

// ---------------------------------------------------------------------------
// Manage rides
// ---------------------------------------------------------------------------

/// A ride in one of the driver's manage-rides tabs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverRide {
    pub id: &'static str,
    pub rider_name: &'static str,
    pub rider_image: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub pickup: &'static str,
    pub dropoff: &'static str,
    pub distance: &'static str,
    pub amount: &'static str,
    pub status: RideStatus,
}

pub const UPCOMING_RIDES: &[DriverRide] = &[
    DriverRide {
        id: "req-001",
        rider_name: "John Smith",
        rider_image: "https://i.pravatar.cc/150?img=11",
        date: "2025-04-09",
        time: "08:30 AM",
        pickup: "123 Main St",
        dropoff: "456 Market St",
        distance: "3.5 miles",
        amount: "$12.50",
        status: RideStatus::Accepted,
    },
    DriverRide {
        id: "req-002",
        rider_name: "Emily Johnson",
        rider_image: "https://i.pravatar.cc/150?img=5",
        date: "2025-04-09",
        time: "10:15 AM",
        pickup: "789 Oak Ave",
        dropoff: "101 Pine St",
        distance: "5.2 miles",
        amount: "$18.75",
        status: RideStatus::Accepted,
    },
];

pub const REQUESTED_RIDES: &[DriverRide] = &[DriverRide {
    id: "req-003",
    rider_name: "Michael Brown",
    rider_image: "https://i.pravatar.cc/150?img=8",
    date: "2025-04-10",
    time: "09:00 AM",
    pickup: "222 Cedar St",
    dropoff: "333 Elm St",
    distance: "4.7 miles",
    amount: "$16.25",
    status: RideStatus::Pending,
}];

pub const DRIVER_HISTORY: &[DriverRide] = &[
    DriverRide {
        id: "ride-001",
        rider_name: "Sarah Wilson",
        rider_image: "https://i.pravatar.cc/150?img=20",
        date: "2025-04-07",
        time: "08:45 AM",
        pickup: "444 Maple Ave",
        dropoff: "555 Cherry St",
        distance: "6.3 miles",
        amount: "$22.80",
        status: RideStatus::Completed,
    },
    DriverRide {
        id: "ride-002",
        rider_name: "Robert Davis",
        rider_image: "https://i.pravatar.cc/150?img=12",
        date: "2025-04-06",
        time: "02:30 PM",
        pickup: "666 Walnut St",
        dropoff: "777 Chestnut St",
        distance: "2.8 miles",
        amount: "$10.50",
        status: RideStatus::Completed,
    },
    DriverRide {
        id: "ride-003",
        rider_name: "Jennifer Thompson",
        rider_image: "https://i.pravatar.cc/150?img=9",
        date: "2025-04-05",
        time: "11:15 AM",
        pickup: "888 Birch Ln",
        dropoff: "999 Ash St",
        distance: "3.9 miles",
        amount: "$14.25",
        status: RideStatus::Cancelled,
    },
];

// ---------------------------------------------------------------------------
// Earnings
// ---------------------------------------------------------------------------

pub const WEEKLY_EARNINGS: &[SeriesPoint] = &[
    SeriesPoint { name: "Mon", value: 45.50 },
    SeriesPoint { name: "Tue", value: 68.75 },
    SeriesPoint { name: "Wed", value: 52.20 },
    SeriesPoint { name: "Thu", value: 75.80 },
    SeriesPoint { name: "Fri", value: 120.50 },
    SeriesPoint { name: "Sat", value: 145.25 },
    SeriesPoint { name: "Sun", value: 98.30 },
];

pub const MONTHLY_EARNINGS: &[SeriesPoint] = &[
    SeriesPoint { name: "Week 1", value: 428.50 },
    SeriesPoint { name: "Week 2", value: 562.75 },
    SeriesPoint { name: "Week 3", value: 498.30 },
    SeriesPoint { name: "Week 4", value: 605.25 },
];

/// A completed payout to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payout {
    pub id: &'static str,
    pub date: &'static str,
    pub amount: &'static str,
    pub rides: u32,
    pub status: RideStatus,
}

pub const RECENT_PAYOUTS: &[Payout] = &[
    Payout {
        id: "payout-001",
        date: "2025-04-01",
        amount: "$525.80",
        rides: 18,
        status: RideStatus::Completed,
    },
    Payout {
        id: "payout-002",
        date: "2025-03-15",
        amount: "$612.45",
        rides: 22,
        status: RideStatus::Completed,
    },
    Payout {
        id: "payout-003",
        date: "2025-03-01",
        amount: "$498.30",
        rides: 16,
        status: RideStatus::Completed,
    },
];

/// Period shown on the earnings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EarningsTimeframe {
    #[default]
    Weekly,
    Monthly,
}

impl EarningsTimeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningsTimeframe::Weekly => "weekly",
            EarningsTimeframe::Monthly => "monthly",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "monthly" => EarningsTimeframe::Monthly,
            _ => EarningsTimeframe::Weekly,
        }
    }

    /// Caption under the total ("This week" / "This month").
    pub fn caption(&self) -> &'static str {
        match self {
            EarningsTimeframe::Weekly => "This week",
            EarningsTimeframe::Monthly => "This month",
        }
    }

    pub fn series(&self) -> &'static [SeriesPoint] {
        match self {
            EarningsTimeframe::Weekly => WEEKLY_EARNINGS,
            EarningsTimeframe::Monthly => MONTHLY_EARNINGS,
        }
    }

    /// Rides completed over the period.
    pub fn rides_completed(&self) -> u32 {
        match self {
            EarningsTimeframe::Weekly => 28,
            EarningsTimeframe::Monthly => 92,
        }
    }
}

/// Headline figures for the earnings page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsSummary {
    pub total: f64,
    pub per_ride_average: f64,
}

pub fn sum_series(series: &[SeriesPoint]) -> f64 {
    series.iter().map(|p| p.value).sum()
}

pub fn earnings_summary(timeframe: EarningsTimeframe) -> EarningsSummary {
    let total = sum_series(timeframe.series());
    EarningsSummary {
        total,
        per_ride_average: total / f64::from(timeframe.rides_completed()),
    }
}

/// Format a dollar amount with two decimals ("$606.30").
pub fn format_dollars(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_summary_totals_days() {
        let summary = earnings_summary(EarningsTimeframe::Weekly);
        assert_eq!(format_dollars(summary.total), "$606.30");
        assert_eq!(format_dollars(summary.per_ride_average), "$21.65");
    }

    #[test]
    fn monthly_summary_totals_weeks() {
        let summary = earnings_summary(EarningsTimeframe::Monthly);
        assert_eq!(format_dollars(summary.total), "$2094.80");
        assert_eq!(format_dollars(summary.per_ride_average), "$22.77");
    }

    #[test]
    fn timeframe_from_key_defaults_to_weekly() {
        assert_eq!(EarningsTimeframe::from_key("monthly"), EarningsTimeframe::Monthly);
        assert_eq!(EarningsTimeframe::from_key(""), EarningsTimeframe::Weekly);
    }

    #[test]
    fn shift_goal_progress_rounds_to_whole_percent() {
        assert_eq!(SHIFT_SUMMARY.goal_percent(), 57.0);
        assert_eq!(format_dollars(SHIFT_SUMMARY.earnings_today), "$85.25");
    }

    #[test]
    fn availability_message_reflects_new_state() {
        assert_eq!(availability_message(true), "You are now online and accepting rides");
        assert_eq!(availability_message(false), "You are now offline");
    }

    #[test]
    fn declines_are_informational_and_cancel_is_an_error() {
        assert_eq!(DriverAction::DeclineNearby.tone(), ActionTone::Info);
        assert_eq!(DriverAction::DeclineRequest.tone(), ActionTone::Info);
        assert_eq!(DriverAction::Cancel.tone(), ActionTone::Error);
        assert_eq!(DriverAction::Start.tone(), ActionTone::Success);
        assert_eq!(DriverAction::AcceptRequest.message(), "Ride request accepted!");
    }

    #[test]
    fn fixture_tabs_hold_expected_statuses() {
        assert!(UPCOMING_RIDES.iter().all(|r| r.status == RideStatus::Accepted));
        assert!(REQUESTED_RIDES.iter().all(|r| r.status == RideStatus::Pending));
        assert_eq!(
            DRIVER_HISTORY
                .iter()
                .filter(|r| r.status == RideStatus::Cancelled)
                .count(),
            1
        );
    }
}
