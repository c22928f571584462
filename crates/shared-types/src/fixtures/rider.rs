use serde::{Deserialize, Serialize};

use super::{RideStatus, StatTile};

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// A recent trip on the rider dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentRide {
    pub id: &'static str,
    pub date: &'static str,
    pub pickup: &'static str,
    pub destination: &'static str,
    pub amount: &'static str,
    pub status: RideStatus,
}

pub const RECENT_RIDES: &[RecentRide] = &[
    RecentRide {
        id: "ride-1",
        date: "Today, 2:30 PM",
        pickup: "Home",
        destination: "Work",
        amount: "$12.50",
        status: RideStatus::Completed,
    },
    RecentRide {
        id: "ride-2",
        date: "Yesterday, 9:15 AM",
        pickup: "Work",
        destination: "Home",
        amount: "$13.25",
        status: RideStatus::Completed,
    },
    RecentRide {
        id: "ride-3",
        date: "Apr 5, 5:45 PM",
        pickup: "Gym",
        destination: "Home",
        amount: "$8.75",
        status: RideStatus::Completed,
    },
];

/// Wallet card on the rider dashboard and payment page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalletSummary {
    pub balance: &'static str,
    pub monthly_spent: f64,
    pub monthly_budget: f64,
}

impl WalletSummary {
    /// Share of the monthly budget already spent, as a whole percentage.
    pub fn budget_used_percent(&self) -> f64 {
        if self.monthly_budget <= 0.0 {
            return 0.0;
        }
        (self.monthly_spent * 100.0 / self.monthly_budget).round()
    }
}

pub const WALLET: WalletSummary = WalletSummary {
    balance: "$125.50",
    monthly_spent: 89.25,
    monthly_budget: 150.0,
};

pub const RIDER_STATS: &[StatTile] = &[
    StatTile { label: "Rides This Month", value: "12" },
    StatTile { label: "Total Rides", value: "89" },
    StatTile { label: "Avg. Rating", value: "4.9" },
    StatTile { label: "Avg. Ride Cost", value: "$10.75" },
];

// ---------------------------------------------------------------------------
// Book a ride
// ---------------------------------------------------------------------------

/// A vehicle class offered on the booking page. Prices are in rupees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideOption {
    pub id: &'static str,
    pub kind: &'static str,
    pub price: u32,
    pub eta: &'static str,
    pub seats: u8,
}

pub const RIDE_OPTIONS: &[RideOption] = &[
    RideOption {
        id: "ride-1",
        kind: "Standard",
        price: 950,
        eta: "3 min away",
        seats: 4,
    },
    RideOption {
        id: "ride-2",
        kind: "Premium",
        price: 1450,
        eta: "5 min away",
        seats: 4,
    },
    RideOption {
        id: "ride-3",
        kind: "XL",
        price: 1890,
        eta: "8 min away",
        seats: 6,
    },
];

/// A nearby driver the rider may pick directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvailableDriver {
    pub id: &'static str,
    pub name: &'static str,
    pub car: &'static str,
    pub plate: &'static str,
    pub rating: f32,
    pub price: u32,
    pub eta: &'static str,
    pub image: &'static str,
}

pub const AVAILABLE_DRIVERS: &[AvailableDriver] = &[
    AvailableDriver {
        id: "driver-1",
        name: "Rajesh Kumar",
        car: "Maruti Swift",
        plate: "MH02 AB1234",
        rating: 4.9,
        price: 950,
        eta: "3 min away",
        image: "https://i.pravatar.cc/150?img=60",
    },
    AvailableDriver {
        id: "driver-2",
        name: "Sunil Verma",
        car: "Hyundai i20",
        plate: "DL01 XY7890",
        rating: 4.8,
        price: 1025,
        eta: "6 min away",
        image: "https://i.pravatar.cc/150?img=32",
    },
    AvailableDriver {
        id: "driver-3",
        name: "Amit Patel",
        car: "Honda City",
        plate: "KA05 MN4567",
        rating: 4.7,
        price: 980,
        eta: "8 min away",
        image: "https://i.pravatar.cc/150?img=69",
    },
];

/// Whether the rider books for now or for a later slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingMode {
    #[default]
    Now,
    Schedule,
}

/// Everything the booking form collects before confirmation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingRequest {
    pub pickup: String,
    pub destination: String,
    pub mode: BookingMode,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub ride_option: Option<String>,
    pub driver: Option<String>,
}

impl BookingRequest {
    /// Check the form in the order the booking page reports problems.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.pickup.is_empty() || self.destination.is_empty() {
            return Err("Please enter pickup and destination locations");
        }
        if self.mode == BookingMode::Schedule
            && (self.scheduled_date.is_empty() || self.scheduled_time.is_empty())
        {
            return Err("Please select date and time for scheduled ride");
        }
        if self.ride_option.is_none() && self.driver.is_none() {
            return Err("Please select a ride or driver");
        }
        Ok(())
    }

    /// Fare of the selected ride option, else of the selected driver.
    pub fn fare(&self) -> Option<u32> {
        if let Some(id) = &self.ride_option {
            return RIDE_OPTIONS.iter().find(|o| o.id == id.as_str()).map(|o| o.price);
        }
        let id = self.driver.as_ref()?;
        AVAILABLE_DRIVERS.iter().find(|d| d.id == id.as_str()).map(|d| d.price)
    }

    /// Fare plus the flat service fee.
    pub fn total(&self) -> Option<u32> {
        self.fare().map(|fare| fare + SERVICE_FEE)
    }

    /// Name shown in the summary: the ride type or the driver.
    pub fn selection_label(&self) -> Option<(&'static str, &'static str)> {
        if let Some(id) = &self.ride_option {
            return RIDE_OPTIONS
                .iter()
                .find(|o| o.id == id.as_str())
                .map(|o| ("Ride Type", o.kind));
        }
        let id = self.driver.as_ref()?;
        AVAILABLE_DRIVERS
            .iter()
            .find(|d| d.id == id.as_str())
            .map(|d| ("Driver", d.name))
    }
}

/// Flat service fee added to every booking, in rupees.
pub const SERVICE_FEE: u32 = 99;

// ---------------------------------------------------------------------------
// Ride history
// ---------------------------------------------------------------------------

/// A past ride on the history page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryRide {
    pub id: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub driver: &'static str,
    pub amount: &'static str,
    pub status: RideStatus,
}

pub const RIDE_HISTORY: &[HistoryRide] = &[
    HistoryRide {
        id: "ride-001",
        date: "2025-04-07",
        time: "09:15 AM",
        from: "Home",
        to: "Office",
        driver: "Rahul Sharma",
        amount: "₹950.00",
        status: RideStatus::Completed,
    },
    HistoryRide {
        id: "ride-002",
        date: "2025-04-05",
        time: "06:30 PM",
        from: "Office",
        to: "Home",
        driver: "Vikram Singh",
        amount: "₹1250.00",
        status: RideStatus::Completed,
    },
    HistoryRide {
        id: "ride-003",
        date: "2025-04-03",
        time: "08:00 PM",
        from: "Home",
        to: "Restaurant",
        driver: "Arjun Mehta",
        amount: "₹980.00",
        status: RideStatus::Completed,
    },
    HistoryRide {
        id: "ride-004",
        date: "2025-04-01",
        time: "07:45 AM",
        from: "Home",
        to: "Gym",
        driver: "Deepak Gupta",
        amount: "₹850.00",
        status: RideStatus::Cancelled,
    },
];

/// Status filter on the history page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Completed,
    Cancelled,
}

impl HistoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryFilter::All => "all",
            HistoryFilter::Completed => "completed",
            HistoryFilter::Cancelled => "cancelled",
        }
    }

    /// Parse a select value, falling back to `All`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "completed" => HistoryFilter::Completed,
            "cancelled" => HistoryFilter::Cancelled,
            _ => HistoryFilter::All,
        }
    }

    pub fn admits(&self, status: RideStatus) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Completed => status == RideStatus::Completed,
            HistoryFilter::Cancelled => status == RideStatus::Cancelled,
        }
    }
}

/// Rides visible under the given filter, in fixture order.
pub fn filter_history(filter: HistoryFilter) -> Vec<&'static HistoryRide> {
    RIDE_HISTORY
        .iter()
        .filter(|ride| filter.admits(ride.status))
        .collect()
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// Card network shown next to a saved card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl CardBrand {
    /// Visa numbers start with `4`; everything else is treated as Mastercard.
    pub fn detect(number: &str) -> Self {
        if number.starts_with('4') {
            CardBrand::Visa
        } else {
            CardBrand::Mastercard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
        }
    }
}

/// A saved card. Owned because the payment page appends to its local list.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub id: String,
    pub brand: CardBrand,
    pub last4: String,
    pub expiry: String,
    pub name: String,
    pub is_default: bool,
}

/// Cards the payment page starts with.
pub fn initial_payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "pm1".into(),
            brand: CardBrand::Visa,
            last4: "4242".into(),
            expiry: "04/25".into(),
            name: "John Doe".into(),
            is_default: true,
        },
        PaymentMethod {
            id: "pm2".into(),
            brand: CardBrand::Mastercard,
            last4: "5555".into(),
            expiry: "07/26".into(),
            name: "John Doe".into(),
            is_default: false,
        },
    ]
}

/// Input from the add-card dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewCard {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
    pub name: String,
}

impl NewCard {
    /// Build the saved card that would be appended to `existing`.
    pub fn into_payment_method(self, existing: &[PaymentMethod]) -> Result<PaymentMethod, &'static str> {
        if self.number.is_empty() || self.expiry.is_empty() || self.cvc.is_empty() || self.name.is_empty() {
            return Err("Please fill in all card details");
        }
        let chars: Vec<char> = self.number.chars().collect();
        let last4: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        Ok(PaymentMethod {
            id: format!("pm{}", existing.len() + 1),
            brand: CardBrand::detect(&self.number),
            last4,
            expiry: self.expiry,
            name: self.name,
            is_default: existing.is_empty(),
        })
    }
}

/// Make `id` the only default card.
pub fn set_default_method(methods: &mut [PaymentMethod], id: &str) {
    for method in methods.iter_mut() {
        method.is_default = method.id == id;
    }
}

/// Remove a saved card. The default card can only go when it is the last one.
pub fn remove_method(methods: &mut Vec<PaymentMethod>, id: &str) -> Result<(), &'static str> {
    let is_default = methods.iter().any(|m| m.id == id && m.is_default);
    if is_default && methods.len() > 1 {
        return Err("Cannot remove default payment method. Please set another method as default first.");
    }
    methods.retain(|m| m.id != id);
    Ok(())
}

/// Quick-pick amounts on the top-up form.
pub const TOP_UP_PRESETS: &[&str] = &["10", "25", "50"];

/// Toast after a successful top-up; echoes the amount as typed.
pub fn top_up_message(input: &str) -> String {
    format!("Successfully added ${} to your wallet", input.trim())
}

/// Parse a wallet top-up amount. Must be a positive number.
pub fn parse_top_up(input: &str) -> Result<f64, &'static str> {
    match input.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err("Please enter a valid amount"),
    }
}

/// A wallet movement on the payment page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    pub id: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub amount: &'static str,
    pub status: RideStatus,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount.starts_with('+')
    }
}

pub const TRANSACTIONS: &[Transaction] = &[
    Transaction {
        id: "tx1",
        date: "Today, 3:30 PM",
        description: "Ride to Airport",
        amount: "-$28.50",
        status: RideStatus::Completed,
    },
    Transaction {
        id: "tx2",
        date: "Yesterday, 9:15 AM",
        description: "Added funds",
        amount: "+$50.00",
        status: RideStatus::Completed,
    },
    Transaction {
        id: "tx3",
        date: "Apr 5, 7:45 PM",
        description: "Ride to Downtown",
        amount: "-$12.75",
        status: RideStatus::Completed,
    },
    Transaction {
        id: "tx4",
        date: "Apr 3, 8:30 AM",
        description: "Ride to Work",
        amount: "-$9.50",
        status: RideStatus::Completed,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn booking() -> BookingRequest {
        BookingRequest {
            pickup: "Home".into(),
            destination: "Airport".into(),
            ride_option: Some("ride-1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn booking_requires_locations_first() {
        let req = BookingRequest {
            destination: String::new(),
            ride_option: None,
            ..booking()
        };
        assert_eq!(req.validate(), Err("Please enter pickup and destination locations"));
    }

    #[test]
    fn blank_but_non_empty_locations_pass_the_location_check() {
        let req = BookingRequest {
            pickup: " ".into(),
            ..booking()
        };
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn scheduled_booking_requires_date_and_time() {
        let req = BookingRequest {
            mode: BookingMode::Schedule,
            scheduled_date: "2025-04-10".into(),
            ..booking()
        };
        assert_eq!(req.validate(), Err("Please select date and time for scheduled ride"));
    }

    #[test]
    fn booking_requires_ride_or_driver() {
        let req = BookingRequest {
            ride_option: None,
            ..booking()
        };
        assert_eq!(req.validate(), Err("Please select a ride or driver"));

        let req = BookingRequest {
            ride_option: None,
            driver: Some("driver-2".into()),
            ..booking()
        };
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn fare_follows_selection_and_adds_service_fee() {
        let req = booking();
        assert_eq!(req.fare(), Some(950));
        assert_eq!(req.total(), Some(1049));
        assert_eq!(req.selection_label(), Some(("Ride Type", "Standard")));

        let req = BookingRequest {
            ride_option: None,
            driver: Some("driver-2".into()),
            ..booking()
        };
        assert_eq!(req.fare(), Some(1025));
        assert_eq!(req.selection_label(), Some(("Driver", "Sunil Verma")));

        let req = BookingRequest {
            ride_option: None,
            ..booking()
        };
        assert_eq!(req.total(), None);
    }

    #[test]
    fn history_filter_selects_by_status() {
        assert_eq!(filter_history(HistoryFilter::All).len(), 4);
        let cancelled = filter_history(HistoryFilter::Cancelled);
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].id, "ride-004");
        assert_eq!(filter_history(HistoryFilter::Completed).len(), 3);
    }

    #[test]
    fn history_filter_from_key_falls_back_to_all() {
        assert_eq!(HistoryFilter::from_key("completed"), HistoryFilter::Completed);
        assert_eq!(HistoryFilter::from_key("bogus"), HistoryFilter::All);
    }

    #[test]
    fn top_up_rejects_non_positive_and_garbage() {
        assert_eq!(parse_top_up("25"), Ok(25.0));
        assert_eq!(parse_top_up(" 10.5 "), Ok(10.5));
        assert!(parse_top_up("0").is_err());
        assert!(parse_top_up("-5").is_err());
        assert!(parse_top_up("abc").is_err());
        assert!(parse_top_up("").is_err());
    }

    #[test]
    fn new_card_builds_visa_with_next_id() {
        let existing = initial_payment_methods();
        let card = NewCard {
            number: "4111111111111234".into(),
            expiry: "12/28".into(),
            cvc: "123".into(),
            name: "John Doe".into(),
        }
        .into_payment_method(&existing)
        .unwrap();
        assert_eq!(card.id, "pm3");
        assert_eq!(card.brand, CardBrand::Visa);
        assert_eq!(card.last4, "1234");
        assert!(!card.is_default);
    }

    #[test]
    fn first_card_becomes_default_and_non_visa_is_mastercard() {
        let card = NewCard {
            number: "5500000000000004".into(),
            expiry: "01/27".into(),
            cvc: "999".into(),
            name: "Jane".into(),
        }
        .into_payment_method(&[])
        .unwrap();
        assert_eq!(card.id, "pm1");
        assert_eq!(card.brand, CardBrand::Mastercard);
        assert!(card.is_default);
    }

    #[test]
    fn new_card_requires_every_field() {
        let err = NewCard {
            number: "4111".into(),
            ..Default::default()
        }
        .into_payment_method(&[]);
        assert_eq!(err, Err("Please fill in all card details"));
    }

    #[test]
    fn default_card_cannot_be_removed_while_others_remain() {
        let mut methods = initial_payment_methods();
        assert_eq!(
            remove_method(&mut methods, "pm1"),
            Err("Cannot remove default payment method. Please set another method as default first.")
        );
        assert_eq!(methods.len(), 2);

        set_default_method(&mut methods, "pm2");
        assert!(!methods[0].is_default);
        assert!(methods[1].is_default);

        assert_eq!(remove_method(&mut methods, "pm1"), Ok(()));
        assert_eq!(remove_method(&mut methods, "pm2"), Ok(()));
        assert!(methods.is_empty());
    }

    #[test]
    fn top_up_message_echoes_input() {
        assert_eq!(top_up_message("25"), "Successfully added $25 to your wallet");
    }

    #[test]
    fn wallet_budget_share_rounds() {
        assert_eq!(WALLET.budget_used_percent(), 60.0);
    }

    #[test]
    fn credit_transactions_are_detected() {
        let credits: Vec<_> = TRANSACTIONS.iter().filter(|t| t.is_credit()).collect();
        assert_eq!(credits.len(), 1);
        assert_eq!(credits[0].description, "Added funds");
    }
}
