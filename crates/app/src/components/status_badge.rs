use dioxus::prelude::*;
use shared_types::fixtures::{AccountStatus, RideStatus};
use shared_ui::{Badge, BadgeVariant};

/// Badge colour for a ride lifecycle state.
pub fn ride_status_variant(status: RideStatus) -> BadgeVariant {
    match status {
        RideStatus::Completed => BadgeVariant::Success,
        RideStatus::Cancelled => BadgeVariant::Destructive,
        RideStatus::Active | RideStatus::Accepted => BadgeVariant::Primary,
        RideStatus::Scheduled => BadgeVariant::Secondary,
        RideStatus::Pending => BadgeVariant::Warning,
    }
}

pub fn account_status_variant(status: AccountStatus) -> BadgeVariant {
    match status {
        AccountStatus::Active => BadgeVariant::Success,
        AccountStatus::Inactive => BadgeVariant::Destructive,
        AccountStatus::Pending => BadgeVariant::Warning,
    }
}

#[component]
pub fn RideStatusBadge(status: RideStatus) -> Element {
    rsx! {
        Badge { variant: ride_status_variant(status), "{status.label()}" }
    }
}

#[component]
pub fn AccountStatusBadge(status: AccountStatus) -> Element {
    rsx! {
        Badge { variant: account_status_variant(status), "{status.as_str()}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_rides_are_green_or_red() {
        assert_eq!(ride_status_variant(RideStatus::Completed), BadgeVariant::Success);
        assert_eq!(ride_status_variant(RideStatus::Cancelled), BadgeVariant::Destructive);
    }

    #[test]
    fn pending_accounts_are_flagged() {
        assert_eq!(account_status_variant(AccountStatus::Pending), BadgeVariant::Warning);
    }
}
