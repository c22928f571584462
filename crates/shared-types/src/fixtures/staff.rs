use super::{contains_ignore_case, AccountStatus, ActionTone, RideStatus, SeriesPoint, StatTile};

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Headline tile on the staff dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformStat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const PLATFORM_STATS: &[PlatformStat] = &[
    PlatformStat { title: "Total Users", value: "5,247", change: "+12%" },
    PlatformStat { title: "Total Rides", value: "18,392", change: "+8%" },
    PlatformStat { title: "Revenue", value: "$54,281", change: "+15%" },
    PlatformStat { title: "Avg. Rating", value: "4.8/5", change: "+0.2" },
];

/// A recent sign-up on the staff dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentSignup {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub joined: &'static str,
}

pub const RECENT_SIGNUPS: &[RecentSignup] = &[
    RecentSignup { id: "u1", name: "Michael Smith", kind: "Rider", status: "Active", joined: "Today" },
    RecentSignup {
        id: "u2",
        name: "Sarah Johnson",
        kind: "Driver",
        status: "Pending Approval",
        joined: "Yesterday",
    },
    RecentSignup {
        id: "u3",
        name: "Robert Williams",
        kind: "Rider",
        status: "Active",
        joined: "3 days ago",
    },
];

/// A ride currently in progress, summarised on the staff dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveRide {
    pub number: &'static str,
    pub driver: &'static str,
    pub rider: &'static str,
    pub area: &'static str,
    pub fare: &'static str,
}

pub const LIVE_RIDES: &[LiveRide] = &[
    LiveRide {
        number: "42851",
        driver: "John Driver",
        rider: "Alice Rider",
        area: "Downtown",
        fare: "$15.25",
    },
    LiveRide {
        number: "42850",
        driver: "Sarah Driver",
        rider: "Bob Rider",
        area: "Airport",
        fare: "$28.50",
    },
];

/// A driver application waiting for staff review.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingVerification {
    pub id: &'static str,
    pub name: &'static str,
    pub submitted: &'static str,
}

pub const VERIFICATION_QUEUE: &[PendingVerification] = &[
    PendingVerification { id: "v1", name: "Mark Johnson", submitted: "Submitted 2 days ago" },
    PendingVerification { id: "v2", name: "Lisa Thompson", submitted: "Submitted 3 days ago" },
];

/// One bar in the system health panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthMetric {
    pub label: &'static str,
    pub display: &'static str,
    pub percent: f64,
}

pub const SYSTEM_HEALTH: &[HealthMetric] = &[
    HealthMetric { label: "Server Uptime", display: "99.9%", percent: 99.9 },
    HealthMetric { label: "API Performance", display: "94%", percent: 94.0 },
    HealthMetric { label: "Database Load", display: "62%", percent: 62.0 },
    HealthMetric { label: "App Rating", display: "4.8/5", percent: 96.0 },
];

pub const ACTIVE_PARTICIPANTS: &[StatTile] = &[
    StatTile { label: "Active Drivers", value: "152" },
    StatTile { label: "Active Riders", value: "1.2k" },
];

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

/// A row in the staff user tables. `rides`, `rating` and `title` are only
/// populated for the tabs that show them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagedUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub joined: &'static str,
    pub rides: Option<u32>,
    pub rating: Option<f32>,
    pub title: Option<&'static str>,
    pub status: AccountStatus,
    pub image: &'static str,
}

impl ManagedUser {
    /// Search box match on name or email.
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.name, query) || contains_ignore_case(self.email, query)
    }
}

pub const MANAGED_RIDERS: &[ManagedUser] = &[
    ManagedUser {
        id: "r1",
        name: "John Rider",
        email: "rider@example.com",
        joined: "2025-01-15",
        rides: Some(12),
        rating: None,
        title: None,
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=1",
    },
    ManagedUser {
        id: "r2",
        name: "Jane Smith",
        email: "jane.smith@example.com",
        joined: "2025-02-22",
        rides: Some(8),
        rating: None,
        title: None,
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=5",
    },
    ManagedUser {
        id: "r3",
        name: "Robert Johnson",
        email: "robert.j@example.com",
        joined: "2025-03-10",
        rides: Some(5),
        rating: None,
        title: None,
        status: AccountStatus::Inactive,
        image: "https://i.pravatar.cc/150?img=8",
    },
];

pub const MANAGED_DRIVERS: &[ManagedUser] = &[
    ManagedUser {
        id: "d1",
        name: "Dave Driver",
        email: "driver@example.com",
        joined: "2025-01-10",
        rides: Some(45),
        rating: Some(4.8),
        title: None,
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=2",
    },
    ManagedUser {
        id: "d2",
        name: "Sarah Williams",
        email: "sarah.w@example.com",
        joined: "2025-02-05",
        rides: Some(36),
        rating: Some(4.6),
        title: None,
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=6",
    },
    ManagedUser {
        id: "d3",
        name: "Michael Davis",
        email: "michael.d@example.com",
        joined: "2025-03-01",
        rides: Some(20),
        rating: Some(4.9),
        title: None,
        status: AccountStatus::Pending,
        image: "https://i.pravatar.cc/150?img=9",
    },
];

pub const MANAGED_STAFF: &[ManagedUser] = &[
    ManagedUser {
        id: "s1",
        name: "Sarah Staff",
        email: "staff@example.com",
        joined: "2025-01-01",
        rides: None,
        rating: None,
        title: Some("Admin"),
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=3",
    },
    ManagedUser {
        id: "s2",
        name: "Alex Rodriguez",
        email: "alex.r@example.com",
        joined: "2025-01-05",
        rides: None,
        rating: None,
        title: Some("Support"),
        status: AccountStatus::Active,
        image: "https://i.pravatar.cc/150?img=7",
    },
];

pub fn search_users(users: &'static [ManagedUser], query: &str) -> Vec<&'static ManagedUser> {
    users.iter().filter(|u| u.matches(query)).collect()
}

pub const USER_ADDED_MESSAGE: &str = "New user added successfully!";

/// Staff actions on an account row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Edit,
    Suspend,
    Activate,
    Approve,
    Delete,
}

impl UserAction {
    /// Toast text, e.g. "Suspended driver with ID: d2". Activation has no
    /// notification.
    pub fn message(&self, kind: &str, id: &str) -> Option<String> {
        match self {
            UserAction::Edit => Some(format!("Editing {kind} with ID: {id}")),
            UserAction::Suspend => Some(format!("Suspended {kind} with ID: {id}")),
            UserAction::Approve => Some(format!("Approved {kind} with ID: {id}")),
            UserAction::Delete => Some(format!("Deleted {kind} with ID: {id}")),
            UserAction::Activate => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserAction::Edit => "Edit Details",
            UserAction::Suspend => "Suspend Account",
            UserAction::Activate => "Activate Account",
            UserAction::Approve => "Approve Driver",
            UserAction::Delete => "Delete Account",
        }
    }

    pub fn tone(&self) -> ActionTone {
        match self {
            UserAction::Edit | UserAction::Activate => ActionTone::Info,
            UserAction::Suspend => ActionTone::Warning,
            UserAction::Approve => ActionTone::Success,
            UserAction::Delete => ActionTone::Error,
        }
    }

    /// Actions offered for an account in the given state. Pending accounts
    /// can be approved when `approvable`, and are neither suspended nor
    /// activated.
    pub fn menu(status: AccountStatus, approvable: bool) -> Vec<UserAction> {
        let mut actions = vec![UserAction::Edit];
        match status {
            AccountStatus::Active => actions.push(UserAction::Suspend),
            AccountStatus::Pending if approvable => actions.push(UserAction::Approve),
            AccountStatus::Pending => {}
            AccountStatus::Inactive => actions.push(UserAction::Activate),
        }
        actions.push(UserAction::Delete);
        actions
    }
}

// ---------------------------------------------------------------------------
// Ride management
// ---------------------------------------------------------------------------

/// A ride as seen by operations staff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagedRide {
    pub id: &'static str,
    pub rider_name: &'static str,
    pub rider_image: &'static str,
    pub driver_name: &'static str,
    pub driver_image: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub pickup: &'static str,
    pub dropoff: &'static str,
    pub distance: &'static str,
    pub amount: &'static str,
    pub status: RideStatus,
    pub start_time: Option<&'static str>,
    pub rating: Option<u8>,
}

impl ManagedRide {
    /// Search box match on rider, driver, pickup or dropoff.
    pub fn matches(&self, query: &str) -> bool {
        contains_ignore_case(self.rider_name, query)
            || contains_ignore_case(self.driver_name, query)
            || contains_ignore_case(self.pickup, query)
            || contains_ignore_case(self.dropoff, query)
    }
}

pub const ACTIVE_RIDES: &[ManagedRide] = &[
    ManagedRide {
        id: "ride-001",
        rider_name: "John Smith",
        rider_image: "https://i.pravatar.cc/150?img=11",
        driver_name: "Dave Driver",
        driver_image: "https://i.pravatar.cc/150?img=2",
        date: "2025-04-08",
        time: "09:15 AM",
        pickup: "123 Main St",
        dropoff: "456 Market St",
        distance: "3.5 miles",
        amount: "$12.50",
        status: RideStatus::Active,
        start_time: Some("09:10 AM"),
        rating: None,
    },
    ManagedRide {
        id: "ride-002",
        rider_name: "Emily Johnson",
        rider_image: "https://i.pravatar.cc/150?img=5",
        driver_name: "Sarah Williams",
        driver_image: "https://i.pravatar.cc/150?img=6",
        date: "2025-04-08",
        time: "10:30 AM",
        pickup: "789 Pine St",
        dropoff: "246 Oak Ave",
        distance: "4.2 miles",
        amount: "$15.75",
        status: RideStatus::Active,
        start_time: Some("10:25 AM"),
        rating: None,
    },
];

pub const SCHEDULED_RIDES: &[ManagedRide] = &[
    ManagedRide {
        id: "ride-003",
        rider_name: "Michael Brown",
        rider_image: "https://i.pravatar.cc/150?img=8",
        driver_name: "Michael Davis",
        driver_image: "https://i.pravatar.cc/150?img=9",
        date: "2025-04-09",
        time: "08:30 AM",
        pickup: "222 Elm St",
        dropoff: "333 Cedar Ave",
        distance: "2.8 miles",
        amount: "$10.25",
        status: RideStatus::Scheduled,
        start_time: None,
        rating: None,
    },
    ManagedRide {
        id: "ride-004",
        rider_name: "Jennifer Lee",
        rider_image: "https://i.pravatar.cc/150?img=18",
        driver_name: "Dave Driver",
        driver_image: "https://i.pravatar.cc/150?img=2",
        date: "2025-04-09",
        time: "03:15 PM",
        pickup: "555 Maple Dr",
        dropoff: "777 Birch Rd",
        distance: "5.5 miles",
        amount: "$18.90",
        status: RideStatus::Scheduled,
        start_time: None,
        rating: None,
    },
];

pub const COMPLETED_RIDES: &[ManagedRide] = &[
    ManagedRide {
        id: "ride-005",
        rider_name: "Robert Davis",
        rider_image: "https://i.pravatar.cc/150?img=12",
        driver_name: "Sarah Williams",
        driver_image: "https://i.pravatar.cc/150?img=6",
        date: "2025-04-07",
        time: "02:30 PM",
        pickup: "444 Cherry Ln",
        dropoff: "888 Walnut St",
        distance: "3.2 miles",
        amount: "$11.75",
        status: RideStatus::Completed,
        start_time: None,
        rating: Some(5),
    },
    ManagedRide {
        id: "ride-006",
        rider_name: "Sarah Wilson",
        rider_image: "https://i.pravatar.cc/150?img=20",
        driver_name: "Michael Davis",
        driver_image: "https://i.pravatar.cc/150?img=9",
        date: "2025-04-07",
        time: "11:45 AM",
        pickup: "999 Rose Ave",
        dropoff: "111 Daisy Ln",
        distance: "7.1 miles",
        amount: "$24.50",
        status: RideStatus::Completed,
        start_time: None,
        rating: Some(4),
    },
    ManagedRide {
        id: "ride-007",
        rider_name: "Jennifer Thompson",
        rider_image: "https://i.pravatar.cc/150?img=9",
        driver_name: "Dave Driver",
        driver_image: "https://i.pravatar.cc/150?img=2",
        date: "2025-04-06",
        time: "10:15 AM",
        pickup: "222 Tulip Dr",
        dropoff: "333 Orchid Ave",
        distance: "2.9 miles",
        amount: "$10.80",
        status: RideStatus::Cancelled,
        start_time: None,
        rating: None,
    },
];

pub fn search_rides(rides: &'static [ManagedRide], query: &str) -> Vec<&'static ManagedRide> {
    rides.iter().filter(|r| r.matches(query)).collect()
}

/// Staff actions on a ride row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideAction {
    Reassign,
    Cancel,
    Delete,
}

impl RideAction {
    pub fn message(&self, ride_id: &str) -> String {
        match self {
            RideAction::Reassign => format!("Reassigning ride: {ride_id}"),
            RideAction::Cancel => format!("Cancelling ride: {ride_id}"),
            RideAction::Delete => format!("Deleting ride: {ride_id}"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RideAction::Reassign => "Reassign Driver",
            RideAction::Cancel => "Cancel Ride",
            RideAction::Delete => "Delete Record",
        }
    }

    pub fn tone(&self) -> ActionTone {
        match self {
            RideAction::Reassign => ActionTone::Info,
            RideAction::Cancel => ActionTone::Warning,
            RideAction::Delete => ActionTone::Error,
        }
    }

    /// Finished rides can only have their record deleted.
    pub fn menu(status: RideStatus) -> &'static [RideAction] {
        match status {
            RideStatus::Completed | RideStatus::Cancelled => &[RideAction::Delete],
            _ => &[RideAction::Reassign, RideAction::Cancel],
        }
    }
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

pub const MONTHLY_REVENUE: &[SeriesPoint] = &[
    SeriesPoint { name: "Jan", value: 15000.0 },
    SeriesPoint { name: "Feb", value: 18000.0 },
    SeriesPoint { name: "Mar", value: 22000.0 },
    SeriesPoint { name: "Apr", value: 28000.0 },
    SeriesPoint { name: "May", value: 33000.0 },
    SeriesPoint { name: "Jun", value: 40000.0 },
    SeriesPoint { name: "Jul", value: 45000.0 },
    SeriesPoint { name: "Aug", value: 42000.0 },
    SeriesPoint { name: "Sep", value: 48000.0 },
    SeriesPoint { name: "Oct", value: 51000.0 },
    SeriesPoint { name: "Nov", value: 55000.0 },
    SeriesPoint { name: "Dec", value: 60000.0 },
];

pub const MONTHLY_RIDES: &[SeriesPoint] = &[
    SeriesPoint { name: "Jan", value: 450.0 },
    SeriesPoint { name: "Feb", value: 520.0 },
    SeriesPoint { name: "Mar", value: 610.0 },
    SeriesPoint { name: "Apr", value: 780.0 },
    SeriesPoint { name: "May", value: 890.0 },
    SeriesPoint { name: "Jun", value: 1050.0 },
    SeriesPoint { name: "Jul", value: 1200.0 },
    SeriesPoint { name: "Aug", value: 1150.0 },
    SeriesPoint { name: "Sep", value: 1300.0 },
    SeriesPoint { name: "Oct", value: 1420.0 },
    SeriesPoint { name: "Nov", value: 1500.0 },
    SeriesPoint { name: "Dec", value: 1650.0 },
];

/// Completed vs cancelled rides for one weekday.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyRides {
    pub name: &'static str,
    pub completed: u32,
    pub cancelled: u32,
}

pub const WEEKLY_RIDES: &[WeeklyRides] = &[
    WeeklyRides { name: "Mon", completed: 145, cancelled: 12 },
    WeeklyRides { name: "Tue", completed: 132, cancelled: 8 },
    WeeklyRides { name: "Wed", completed: 148, cancelled: 10 },
    WeeklyRides { name: "Thu", completed: 167, cancelled: 15 },
    WeeklyRides { name: "Fri", completed: 195, cancelled: 18 },
    WeeklyRides { name: "Sat", completed: 210, cancelled: 20 },
    WeeklyRides { name: "Sun", completed: 178, cancelled: 16 },
];

/// Percentage shares; each slice sums to 100.
pub const RIDES_BY_LOCATION: &[SeriesPoint] = &[
    SeriesPoint { name: "Downtown", value: 35.0 },
    SeriesPoint { name: "Uptown", value: 25.0 },
    SeriesPoint { name: "Midtown", value: 20.0 },
    SeriesPoint { name: "Suburbs", value: 15.0 },
    SeriesPoint { name: "Airport", value: 5.0 },
];

pub const REVENUE_SOURCES: &[SeriesPoint] = &[
    SeriesPoint { name: "Regular Rides", value: 65.0 },
    SeriesPoint { name: "Premium Rides", value: 25.0 },
    SeriesPoint { name: "Subscription", value: 10.0 },
];

pub const RIDE_CATEGORIES: &[SeriesPoint] = &[
    SeriesPoint { name: "Standard", value: 70.0 },
    SeriesPoint { name: "Premium", value: 20.0 },
    SeriesPoint { name: "Shared", value: 10.0 },
];

/// Rider and driver counts at the end of a month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserGrowth {
    pub name: &'static str,
    pub riders: u32,
    pub drivers: u32,
}

pub const USER_GROWTH: &[UserGrowth] = &[
    UserGrowth { name: "Jan", riders: 1200, drivers: 180 },
    UserGrowth { name: "Feb", riders: 1350, drivers: 210 },
    UserGrowth { name: "Mar", riders: 1500, drivers: 240 },
    UserGrowth { name: "Apr", riders: 1680, drivers: 265 },
    UserGrowth { name: "May", riders: 1850, drivers: 290 },
    UserGrowth { name: "Jun", riders: 2100, drivers: 320 },
    UserGrowth { name: "Jul", riders: 2300, drivers: 350 },
    UserGrowth { name: "Aug", riders: 2450, drivers: 380 },
    UserGrowth { name: "Sep", riders: 2600, drivers: 410 },
    UserGrowth { name: "Oct", riders: 2850, drivers: 450 },
    UserGrowth { name: "Nov", riders: 3100, drivers: 480 },
    UserGrowth { name: "Dec", riders: 3400, drivers: 510 },
];

/// Summary cards on the analytics page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub total_rides: f64,
    pub avg_rides_per_month: u32,
    pub total_users: u32,
}

pub fn analytics_summary() -> AnalyticsSummary {
    let total_revenue: f64 = MONTHLY_REVENUE.iter().map(|p| p.value).sum();
    let total_rides: f64 = MONTHLY_RIDES.iter().map(|p| p.value).sum();
    let avg_rides_per_month = if MONTHLY_RIDES.is_empty() {
        0
    } else {
        (total_rides / MONTHLY_RIDES.len() as f64).round() as u32
    };
    let total_users = USER_GROWTH
        .last()
        .map(|g| g.riders + g.drivers)
        .unwrap_or(0);
    AnalyticsSummary {
        total_revenue,
        total_rides,
        avg_rides_per_month,
        total_users,
    }
}

/// Revenue summed per quarter (Q1..Q4) from the monthly series.
pub fn quarterly_revenue() -> Vec<(String, f64)> {
    MONTHLY_REVENUE
        .chunks(3)
        .enumerate()
        .map(|(i, months)| {
            (
                format!("Q{}", i + 1),
                months.iter().map(|p| p.value).sum(),
            )
        })
        .collect()
}

pub const USER_DISTRIBUTION: &[SeriesPoint] = &[
    SeriesPoint { name: "Riders", value: 85.0 },
    SeriesPoint { name: "Drivers", value: 15.0 },
];

pub const USER_ACQUISITION: &[SeriesPoint] = &[
    SeriesPoint { name: "Organic", value: 42.0 },
    SeriesPoint { name: "Referral", value: 28.0 },
    SeriesPoint { name: "Social", value: 18.0 },
    SeriesPoint { name: "Ads", value: 12.0 },
];

/// Average trip minutes per area.
pub const TRIP_DURATION: &[SeriesPoint] = &[
    SeriesPoint { name: "Downtown", value: 18.0 },
    SeriesPoint { name: "Uptown", value: 22.0 },
    SeriesPoint { name: "Midtown", value: 15.0 },
    SeriesPoint { name: "Suburbs", value: 28.0 },
    SeriesPoint { name: "Airport", value: 35.0 },
];

/// Busiest windows for an area, with relative load as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakHours {
    pub area: &'static str,
    pub windows: &'static str,
    pub load: f64,
}

pub const PEAK_HOURS: &[PeakHours] = &[
    PeakHours { area: "Downtown", windows: "8-9 AM, 5-6 PM", load: 85.0 },
    PeakHours { area: "Uptown", windows: "7-8 PM, 10-11 PM", load: 70.0 },
    PeakHours { area: "Midtown", windows: "12-1 PM, 6-7 PM", load: 65.0 },
    PeakHours { area: "Suburbs", windows: "7-8 AM, 6-7 PM", load: 55.0 },
    PeakHours { area: "Airport", windows: "5-7 AM, 9-11 PM", load: 40.0 },
];

/// Comparison window chosen on the analytics page. Only changes captions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsTimeframe {
    Month,
    Quarter,
    #[default]
    Year,
}

impl AnalyticsTimeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsTimeframe::Month => "month",
            AnalyticsTimeframe::Quarter => "quarter",
            AnalyticsTimeframe::Year => "year",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "month" => AnalyticsTimeframe::Month,
            "quarter" => AnalyticsTimeframe::Quarter,
            _ => AnalyticsTimeframe::Year,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalyticsTimeframe::Month => "Last Month",
            AnalyticsTimeframe::Quarter => "Last Quarter",
            AnalyticsTimeframe::Year => "Last Year",
        }
    }
}

/// Format a whole number with thousands separators ("466,000").
pub fn format_thousands(value: f64) -> String {
    let digits = format!("{}", value.round() as i64);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", digits),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn analytics_summary_matches_series() {
        let s = analytics_summary();
        assert_eq!(s.total_revenue, 457000.0);
        assert_eq!(s.total_rides, 12520.0);
        assert_eq!(s.avg_rides_per_month, 1043);
        assert_eq!(s.total_users, 3910);
    }

    #[test]
    fn quarterly_revenue_sums_three_months() {
        let q = quarterly_revenue();
        assert_eq!(
            q,
            vec![
                ("Q1".to_string(), 55000.0),
                ("Q2".to_string(), 101000.0),
                ("Q3".to_string(), 135000.0),
                ("Q4".to_string(), 166000.0),
            ]
        );
    }

    #[test]
    fn share_series_sum_to_hundred() {
        for series in [
            RIDES_BY_LOCATION,
            REVENUE_SOURCES,
            RIDE_CATEGORIES,
            USER_DISTRIBUTION,
            USER_ACQUISITION,
        ] {
            let total: f64 = series.iter().map(|p| p.value).sum();
            assert_eq!(total, 100.0);
        }
    }

    #[test]
    fn analytics_timeframe_defaults_to_year() {
        assert_eq!(AnalyticsTimeframe::default(), AnalyticsTimeframe::Year);
        assert_eq!(AnalyticsTimeframe::from_key("quarter").label(), "Last Quarter");
        assert_eq!(AnalyticsTimeframe::from_key("decade"), AnalyticsTimeframe::Year);
    }

    #[test]
    fn ride_search_is_case_insensitive_across_fields() {
        assert_eq!(search_rides(ACTIVE_RIDES, "dave").len(), 1);
        assert_eq!(search_rides(SCHEDULED_RIDES, "MAPLE").len(), 1);
        assert_eq!(search_rides(COMPLETED_RIDES, "").len(), 3);
        assert!(search_rides(COMPLETED_RIDES, "nowhere").is_empty());
    }

    #[test]
    fn user_search_matches_name_or_email() {
        assert_eq!(search_users(MANAGED_RIDERS, "jane").len(), 1);
        assert_eq!(search_users(MANAGED_DRIVERS, "EXAMPLE.COM").len(), 3);
        assert_eq!(search_users(MANAGED_STAFF, "rodriguez").len(), 1);
    }

    #[test]
    fn format_thousands_groups_digits() {
        assert_eq!(format_thousands(457000.0), "457,000");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1043.4), "1,043");
        assert_eq!(format_thousands(-12500.0), "-12,500");
    }

    #[test]
    fn action_messages_include_kind_and_id() {
        assert_eq!(
            UserAction::Suspend.message("driver", "d2").as_deref(),
            Some("Suspended driver with ID: d2")
        );
        assert_eq!(UserAction::Activate.message("rider", "r3"), None);
        assert_eq!(RideAction::Cancel.message("ride-003"), "Cancelling ride: ride-003");
    }

    #[test]
    fn user_menu_depends_on_account_state() {
        assert_eq!(
            UserAction::menu(AccountStatus::Active, false),
            vec![UserAction::Edit, UserAction::Suspend, UserAction::Delete]
        );
        assert_eq!(
            UserAction::menu(AccountStatus::Pending, true),
            vec![UserAction::Edit, UserAction::Approve, UserAction::Delete]
        );
        assert_eq!(
            UserAction::menu(AccountStatus::Pending, false),
            vec![UserAction::Edit, UserAction::Delete]
        );
        assert_eq!(
            UserAction::menu(AccountStatus::Inactive, true),
            vec![UserAction::Edit, UserAction::Activate, UserAction::Delete]
        );
    }

    #[test]
    fn finished_rides_only_offer_deletion() {
        assert_eq!(RideAction::menu(RideStatus::Completed), &[RideAction::Delete]);
        assert_eq!(
            RideAction::menu(RideStatus::Scheduled),
            &[RideAction::Reassign, RideAction::Cancel]
        );
        assert_eq!(RideAction::Cancel.tone(), ActionTone::Warning);
    }
}
