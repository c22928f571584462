use super::announce;
use crate::components::RideStatusBadge;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdPhone};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    DriverAction, DriverRide, DRIVER_HISTORY, REQUESTED_RIDES, UPCOMING_RIDES,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow, PersonAvatar, Segment, SegmentedControl,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum RidesTab {
    Upcoming,
    Requests,
    History,
}

impl RidesTab {
    fn key(&self) -> &'static str {
        match self {
            RidesTab::Upcoming => "upcoming",
            RidesTab::Requests => "requests",
            RidesTab::History => "history",
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "requests" => RidesTab::Requests,
            "history" => RidesTab::History,
            _ => RidesTab::Upcoming,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            RidesTab::Upcoming => "Upcoming Rides",
            RidesTab::Requests => "Pending Ride Requests",
            RidesTab::History => "Ride History",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            RidesTab::Upcoming => "No upcoming rides scheduled.",
            RidesTab::Requests => "No pending ride requests.",
            RidesTab::History => "No ride history available.",
        }
    }

    fn rides(&self) -> &'static [DriverRide] {
        match self {
            RidesTab::Upcoming => UPCOMING_RIDES,
            RidesTab::Requests => REQUESTED_RIDES,
            RidesTab::History => DRIVER_HISTORY,
        }
    }
}

/// Upcoming, requested and past rides for the signed-in driver.
#[component]
pub fn ManageRides() -> Element {
    let toast = use_toast();
    let mut tab = use_signal(|| RidesTab::Upcoming);
    let current = tab();
    let rides = current.rides();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./driver.css") }

        SegmentedControl {
            segments: vec![
                Segment::new("upcoming", "Upcoming"),
                Segment::new("requests", "Requests"),
                Segment::new("history", "History"),
            ],
            selected: current.key().to_string(),
            on_select: move |key: String| tab.set(RidesTab::from_key(&key)),
        }

        Card { class: "rides-card",
            CardHeader {
                CardTitle { "{current.title()}" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Rider" }
                        DataTableColumn { "Date & Time" }
                        DataTableColumn { "Route" }
                        DataTableColumn { "Amount" }
                        if current == RidesTab::History {
                            DataTableColumn { "Status" }
                        } else {
                            DataTableColumn { "Actions" }
                        }
                    }
                    DataTableBody {
                        if rides.is_empty() {
                            DataTableEmpty { columns: 5, message: current.empty_message().to_string() }
                        }
                        for ride in rides.iter() {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell {
                                    div { class: "rider-cell",
                                        PersonAvatar {
                                            name: ride.rider_name.to_string(),
                                            image: ride.rider_image.to_string(),
                                        }
                                        div {
                                            div { class: "rider-cell-name", "{ride.rider_name}" }
                                            if current == RidesTab::Upcoming {
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    size: ButtonSize::Small,
                                                    Icon::<LdPhone> { icon: LdPhone, width: 12, height: 12 }
                                                    "Call"
                                                }
                                            }
                                        }
                                    }
                                }
                                DataTableCell {
                                    div { class: "icon-line",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                        "{ride.date}"
                                    }
                                    div { class: "icon-line",
                                        Icon::<LdClock> { icon: LdClock, width: 12, height: 12 }
                                        "{ride.time}"
                                    }
                                }
                                DataTableCell {
                                    div { class: "icon-line",
                                        Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                                        "{ride.pickup}"
                                    }
                                    div { class: "icon-line icon-line-dropoff",
                                        Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                                        "{ride.dropoff}"
                                    }
                                    div { class: "muted", "{ride.distance}" }
                                }
                                DataTableCell { "{ride.amount}" }
                                DataTableCell {
                                    {
                                        match current {
                                            RidesTab::Upcoming => rsx! {
                                                div { class: "row-actions",
                                                    Button {
                                                        size: ButtonSize::Small,
                                                        onclick: move |_: MouseEvent| announce(toast, DriverAction::Start),
                                                        "Start Ride"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Outline,
                                                        size: ButtonSize::Small,
                                                        onclick: move |_: MouseEvent| announce(toast, DriverAction::Cancel),
                                                        "Cancel"
                                                    }
                                                }
                                            },
                                            RidesTab::Requests => rsx! {
                                                div { class: "row-actions",
                                                    Button {
                                                        size: ButtonSize::Small,
                                                        onclick: move |_: MouseEvent| announce(toast, DriverAction::AcceptRequest),
                                                        "Accept"
                                                    }
                                                    Button {
                                                        variant: ButtonVariant::Destructive,
                                                        size: ButtonSize::Small,
                                                        onclick: move |_: MouseEvent| announce(toast, DriverAction::DeclineRequest),
                                                        "Decline"
                                                    }
                                                }
                                            },
                                            RidesTab::History => rsx! {
                                                RideStatusBadge { status: ride.status }
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_round_trip_and_default_to_upcoming() {
        for tab in [RidesTab::Upcoming, RidesTab::Requests, RidesTab::History] {
            assert_eq!(RidesTab::from_key(tab.key()), tab);
        }
        assert_eq!(RidesTab::from_key("bogus"), RidesTab::Upcoming);
    }

    #[test]
    fn each_tab_lists_its_fixture() {
        assert_eq!(RidesTab::Upcoming.rides().len(), 2);
        assert_eq!(RidesTab::Requests.rides().len(), 1);
        assert_eq!(RidesTab::History.rides().len(), 3);
    }
}
