use crate::format_helpers::format_date_human;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    earnings_summary, format_dollars, EarningsTimeframe, RECENT_PAYOUTS,
};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, ChartSeries, ChartTone, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, FormSelect,
    LineChart, ShareChart,
};

const NEXT_PAYOUT: &str = "2025-04-15";

#[component]
pub fn Earnings() -> Element {
    let mut timeframe = use_signal(EarningsTimeframe::default);
    let current = timeframe();
    let series = current.series();
    let summary = earnings_summary(current);

    let labels: Vec<String> = series.iter().map(|p| p.name.to_string()).collect();
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    let slices: Vec<(String, f64)> = series.iter().map(|p| (p.name.to_string(), p.value)).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./driver.css") }

        div { class: "earnings-grid",
            Card { class: "earnings-overview",
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "Earnings Overview" }
                            CardDescription { "Your {current.as_str()} earnings at a glance" }
                        }
                        FormSelect {
                            id: "earnings-timeframe",
                            value: current.as_str().to_string(),
                            onchange: move |e: FormEvent| timeframe.set(EarningsTimeframe::from_key(&e.value())),
                            option { value: "weekly", "Weekly" }
                            option { value: "monthly", "Monthly" }
                        }
                    }
                }
                CardContent {
                    {
                        match current {
                            EarningsTimeframe::Weekly => rsx! {
                                LineChart {
                                    labels,
                                    series: vec![ChartSeries::new("Earnings", values, ChartTone::Primary)],
                                }
                            },
                            EarningsTimeframe::Monthly => rsx! {
                                div { class: "earnings-breakdown",
                                    ShareChart { slices }
                                    ul { class: "earnings-legend",
                                        for point in series.iter() {
                                            li { key: "{point.name}",
                                                "{point.name}: {format_dollars(point.value)}"
                                            }
                                        }
                                    }
                                }
                            },
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Total Earnings" }
                    CardDescription { "{current.caption()}" }
                }
                CardContent {
                    div { class: "earnings-total", "{format_dollars(summary.total)}" }
                    dl { class: "summary-list",
                        dt { "Rides Completed:" }
                        dd { "{current.rides_completed()}" }
                        dt { "Avg. per Ride:" }
                        dd { "{format_dollars(summary.per_ride_average)}" }
                        dt { "Next Payout:" }
                        dd { "{format_date_human(NEXT_PAYOUT)}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Recent Payouts" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Date" }
                        DataTableColumn { "Rides" }
                        DataTableColumn { "Amount" }
                        DataTableColumn { "Status" }
                    }
                    DataTableBody {
                        for payout in RECENT_PAYOUTS.iter() {
                            DataTableRow { key: "{payout.id}",
                                DataTableCell {
                                    div { class: "icon-line",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                        "{format_date_human(payout.date)}"
                                    }
                                }
                                DataTableCell { "{payout.rides} rides" }
                                DataTableCell {
                                    span { class: "payout-amount", "{payout.amount}" }
                                }
                                DataTableCell {
                                    span { class: "payout-status", "{payout.status.label()}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
