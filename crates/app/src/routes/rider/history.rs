use crate::components::RideStatusBadge;
use crate::format_helpers::format_date_human;
use dioxus::prelude::*;
use shared_types::fixtures::{filter_history, HistoryFilter};
use shared_ui::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, FormSelect,
};

/// Past rides with a completed/cancelled filter.
#[component]
pub fn RideHistory() -> Element {
    let mut filter = use_signal(HistoryFilter::default);
    let rides = filter_history(filter());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rider.css") }

        Card {
            CardHeader {
                div { class: "card-header-row",
                    CardTitle { "Your Past Rides" }
                    FormSelect {
                        id: "history-filter",
                        value: filter().as_str().to_string(),
                        onchange: move |e: FormEvent| filter.set(HistoryFilter::from_key(&e.value())),
                        option { value: "all", "All Rides" }
                        option { value: "completed", "Completed" }
                        option { value: "cancelled", "Cancelled" }
                    }
                }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Date & Time" }
                        DataTableColumn { "Route" }
                        DataTableColumn { "Driver" }
                        DataTableColumn { align_right: true, "Amount" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        if rides.is_empty() {
                            DataTableEmpty {
                                columns: 5,
                                message: "No rides found matching your filter.",
                            }
                        }
                        for ride in rides {
                            DataTableRow { key: "{ride.id}",
                                DataTableCell {
                                    div { "{format_date_human(ride.date)}" }
                                    div { class: "muted", "{ride.time}" }
                                }
                                DataTableCell {
                                    div { "From: {ride.from}" }
                                    div { "To: {ride.to}" }
                                }
                                DataTableCell { "{ride.driver}" }
                                DataTableCell { align_right: true, "{ride.amount}" }
                                DataTableCell {
                                    RideStatusBadge { status: ride.status }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
