//! Literal sample records rendered by the dashboards.
//!
//! Nothing here is persisted or mutated; views read these slices directly
//! and the helpers compute display values (totals, filters) from them.

pub mod driver;
pub mod rider;
pub mod staff;

pub use driver::*;
pub use rider::*;
pub use staff::*;

use serde::{Deserialize, Serialize};

/// Lifecycle label shown on ride rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RideStatus {
    Pending,
    Accepted,
    Scheduled,
    Active,
    Completed,
    Cancelled,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => "pending",
            RideStatus::Accepted => "accepted",
            RideStatus::Scheduled => "scheduled",
            RideStatus::Active => "active",
            RideStatus::Completed => "completed",
            RideStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized label for badges.
    pub fn label(&self) -> &'static str {
        match self {
            RideStatus::Pending => "Pending",
            RideStatus::Accepted => "Accepted",
            RideStatus::Scheduled => "Scheduled",
            RideStatus::Active => "Active",
            RideStatus::Completed => "Completed",
            RideStatus::Cancelled => "Cancelled",
        }
    }
}

/// Account standing shown in the staff user tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Pending,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Pending => "pending",
        }
    }
}

/// How prominently an action's confirmation toast is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    Success,
    Info,
    Warning,
    Error,
}

/// A labelled figure in a grid of summary tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: &'static str,
}

/// A named data point for charts ("Jan" → 15000).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub name: &'static str,
    pub value: f64,
}

/// Case-insensitive substring test used by every search box.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ride_status_labels_are_capitalized() {
        assert_eq!(RideStatus::Completed.label(), "Completed");
        assert_eq!(RideStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn contains_ignore_case_matches_any_case() {
        assert!(contains_ignore_case("Dave Driver", "dave"));
        assert!(contains_ignore_case("123 Main St", "MAIN"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Airport", "downtown"));
    }
}
