use crate::components::{notify, RideStatusBadge};
use crate::format_helpers::format_date_human;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdEllipsis, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    search_rides, ManagedRide, RideAction, ACTIVE_RIDES, COMPLETED_RIDES, SCHEDULED_RIDES,
};
use shared_ui::{
    use_toast, Button, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, DialogContent,
    DialogDescription, DialogFooter, DialogRoot, DialogTitle, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, PersonAvatar, SearchBar,
    Segment, SegmentedControl,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum RideTab {
    Active,
    Scheduled,
    Completed,
}

impl RideTab {
    fn key(&self) -> &'static str {
        match self {
            RideTab::Active => "active",
            RideTab::Scheduled => "scheduled",
            RideTab::Completed => "completed",
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "scheduled" => RideTab::Scheduled,
            "completed" => RideTab::Completed,
            _ => RideTab::Active,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            RideTab::Active => "Active Rides",
            RideTab::Scheduled => "Scheduled Rides",
            RideTab::Completed => "Completed Rides",
        }
    }

    fn rides(&self) -> &'static [ManagedRide] {
        match self {
            RideTab::Active => ACTIVE_RIDES,
            RideTab::Scheduled => SCHEDULED_RIDES,
            RideTab::Completed => COMPLETED_RIDES,
        }
    }

    fn empty_message(&self) -> String {
        format!("No {} rides found matching your search.", self.key())
    }
}

/// Operations view over active, scheduled and completed rides.
#[component]
pub fn RideManagement() -> Element {
    let toast = use_toast();
    let mut tab = use_signal(|| RideTab::Active);
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<&'static ManagedRide>);

    let current = tab();
    let rides = search_rides(current.rides(), &query());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./staff.css") }

        SearchBar {
            value: query(),
            on_input: move |q: String| query.set(q),
            placeholder: "Search rides...",
        }

        SegmentedControl {
            segments: vec![
                Segment::new("active", "Active"),
                Segment::new("scheduled", "Scheduled"),
                Segment::new("completed", "Completed"),
            ],
            selected: current.key().to_string(),
            on_select: move |key: String| tab.set(RideTab::from_key(&key)),
        }

        Card { class: "staff-table-card",
            CardHeader {
                CardTitle { "{current.title()}" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Rider" }
                        DataTableColumn { "Driver" }
                        DataTableColumn { "Date & Time" }
                        DataTableColumn { "Route" }
                        DataTableColumn { "Amount" }
                        DataTableColumn { "Status" }
                        DataTableColumn { align_right: true, "Actions" }
                    }
                    DataTableBody {
                        if rides.is_empty() {
                            DataTableEmpty { columns: 7, message: current.empty_message() }
                        }
                        for ride in rides {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell {
                                    div { class: "person-cell",
                                        PersonAvatar { name: ride.rider_name.to_string(), image: ride.rider_image.to_string() }
                                        span { class: "person-cell-name", "{ride.rider_name}" }
                                    }
                                }
                                DataTableCell {
                                    div { class: "person-cell",
                                        PersonAvatar { name: ride.driver_name.to_string(), image: ride.driver_image.to_string() }
                                        span { class: "person-cell-name", "{ride.driver_name}" }
                                    }
                                }
                                DataTableCell {
                                    div { class: "icon-line",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                        "{format_date_human(ride.date)}"
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
                                    RideStatusBadge { status: ride.status }
                                }
                                DataTableCell { align_right: true,
                                    DropdownMenu {
                                        DropdownMenuTrigger {
                                            div { class: "row-menu-trigger",
                                                Icon::<LdEllipsis> { icon: LdEllipsis, width: 18, height: 18 }
                                            }
                                        }
                                        DropdownMenuContent {
                                            DropdownMenuItem::<String> {
                                                value: "details".to_string(),
                                                index: 0usize,
                                                on_select: move |_: String| selected.set(Some(ride)),
                                                span { "View Details" }
                                            }
                                            DropdownMenuSeparator {}
                                            for (i, action) in RideAction::menu(ride.status).iter().copied().enumerate() {
                                                DropdownMenuItem::<String> {
                                                    key: "{action.label()}",
                                                    value: action.label().to_string(),
                                                    index: i + 1,
                                                    on_select: move |_: String| {
                                                        tracing::debug!(ride = ride.id, ?action, "Ride action");
                                                        notify(toast, action.tone(), action.message(ride.id));
                                                    },
                                                    span {
                                                        class: if action == RideAction::Reassign { "" } else { "row-menu-destructive" },
                                                        "{action.label()}"
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
        }

        DialogRoot {
            open: selected().is_some(),
            on_open_change: move |open: bool| {
                if !open {
                    selected.set(None);
                }
            },
            DialogContent {
                DialogTitle { "Ride Details" }
                DialogDescription { "Complete information about the selected ride." }
                if let Some(ride) = selected() {
                    div { class: "ride-details",
                        div { class: "ride-details-pair",
                            div {
                                h3 { "Rider" }
                                div { class: "person-cell",
                                    PersonAvatar { name: ride.rider_name.to_string(), image: ride.rider_image.to_string() }
                                    span { class: "person-cell-name", "{ride.rider_name}" }
                                }
                            }
                            div {
                                h3 { "Driver" }
                                div { class: "person-cell",
                                    PersonAvatar { name: ride.driver_name.to_string(), image: ride.driver_image.to_string() }
                                    span { class: "person-cell-name", "{ride.driver_name}" }
                                }
                            }
                        }
                        div { class: "ride-details-pair",
                            div {
                                h3 { "Date" }
                                p { "{format_date_human(ride.date)}" }
                            }
                            div {
                                h3 { "Time" }
                                p { "{ride.time}" }
                            }
                        }
                        div {
                            h3 { "Pickup Location" }
                            p { "{ride.pickup}" }
                        }
                        div {
                            h3 { "Dropoff Location" }
                            p { "{ride.dropoff}" }
                        }
                        div { class: "ride-details-triple",
                            div {
                                h3 { "Distance" }
                                p { "{ride.distance}" }
                            }
                            div {
                                h3 { "Amount" }
                                p { class: "staff-list-title", "{ride.amount}" }
                            }
                            div {
                                h3 { "Status" }
                                RideStatusBadge { status: ride.status }
                            }
                        }
                        if let Some(started) = ride.start_time {
                            div {
                                h3 { "Started At" }
                                p { "{started}" }
                            }
                        }
                        if let Some(rating) = ride.rating {
                            div {
                                h3 { "Rating" }
                                p { "★ {rating}/5" }
                            }
                        }
                    }
                }
                DialogFooter {
                    Button { onclick: move |_: MouseEvent| selected.set(None), "Close" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_messages_name_the_tab() {
        assert_eq!(
            RideTab::Scheduled.empty_message(),
            "No scheduled rides found matching your search."
        );
    }

    #[test]
    fn unknown_tab_key_falls_back_to_active() {
        assert_eq!(RideTab::from_key("archived"), RideTab::Active);
        assert_eq!(RideTab::from_key("completed").rides().len(), COMPLETED_RIDES.len());
    }
}
