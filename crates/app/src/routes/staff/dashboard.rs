use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChartColumn, LdCalendar, LdCreditCard, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    UserAction, ACTIVE_PARTICIPANTS, LIVE_RIDES, MONTHLY_RIDES, PLATFORM_STATS, RECENT_SIGNUPS,
    SYSTEM_HEALTH, VERIFICATION_QUEUE,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, BarChart, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, ChartSeries, ChartTone, Progress,
    StatCard, ToastOptions,
};

/// Platform overview for operations staff.
#[component]
pub fn StaffDashboard() -> Element {
    let toast = use_toast();

    let labels: Vec<String> = MONTHLY_RIDES.iter().map(|p| p.name.to_string()).collect();
    let rides: Vec<f64> = MONTHLY_RIDES.iter().map(|p| p.value).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./staff.css") }

        div { class: "stat-row",
            for stat in PLATFORM_STATS.iter() {
                StatCard {
                    key: "{stat.title}",
                    title: stat.title.to_string(),
                    value: stat.value.to_string(),
                    change: stat.change.to_string(),
                }
            }
        }

        div { class: "staff-grid staff-grid-wide",
            Card {
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "Platform Activity" }
                            CardDescription { "Rides and revenue over time" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| { navigator().push(Route::Analytics {}); },
                            Icon::<LdChartColumn> { icon: LdChartColumn, width: 16, height: 16 }
                            "Full Analytics"
                        }
                    }
                }
                CardContent {
                    BarChart {
                        labels,
                        series: vec![ChartSeries::new("Rides", rides, ChartTone::Primary)],
                    }
                }
            }

            Card {
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "Recent Users" }
                            CardDescription { "New platform registrations" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| { navigator().push(Route::UserManagement {}); },
                            "View All"
                        }
                    }
                }
                CardContent {
                    ul { class: "staff-list",
                        for signup in RECENT_SIGNUPS.iter() {
                            li { key: "{signup.id}", class: "staff-list-item",
                                div {
                                    div { class: "staff-list-title", "{signup.name}" }
                                    div { class: "muted", "{signup.kind} • {signup.joined}" }
                                }
                                Badge {
                                    variant: if signup.status == "Active" { BadgeVariant::Success } else { BadgeVariant::Warning },
                                    "{signup.status}"
                                }
                            }
                        }
                    }
                }
            }
        }

        div { class: "staff-grid staff-grid-thirds",
            Card {
                CardHeader {
                    CardTitle { "Active Rides" }
                    CardDescription { "Current rides in progress" }
                }
                CardContent {
                    div { class: "staff-panels",
                        for ride in LIVE_RIDES.iter() {
                            div { key: "{ride.number}", class: "staff-panel",
                                div { class: "staff-panel-head",
                                    span { class: "staff-list-title", "Ride #{ride.number}" }
                                    Badge { variant: BadgeVariant::Primary, "In Progress" }
                                }
                                div { span { class: "muted", "Driver: " } "{ride.driver}" }
                                div { span { class: "muted", "Rider: " } "{ride.rider}" }
                                div { class: "staff-panel-meta muted",
                                    span { class: "icon-line",
                                        Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                                        "{ride.area}"
                                    }
                                    span { class: "icon-line",
                                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 12, height: 12 }
                                        "{ride.fare}"
                                    }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| { navigator().push(Route::RideManagement {}); },
                        "Manage All Rides"
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Verification Queue" }
                    CardDescription { "Pending driver approvals" }
                }
                CardContent {
                    div { class: "staff-panels",
                        for pending in VERIFICATION_QUEUE.iter() {
                            div { key: "{pending.id}", class: "staff-panel",
                                div { class: "staff-panel-head",
                                    span { class: "staff-list-title", "{pending.name}" }
                                    Badge { variant: BadgeVariant::Warning, "Pending" }
                                }
                                div { class: "muted icon-line",
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                                    "{pending.submitted}"
                                }
                                div { class: "staff-panel-actions",
                                    Button {
                                        variant: ButtonVariant::Destructive,
                                        size: ButtonSize::Small,
                                        "Reject"
                                    }
                                    Button {
                                        size: ButtonSize::Small,
                                        onclick: move |_: MouseEvent| {
                                            if let Some(message) = UserAction::Approve.message("driver", pending.id) {
                                                toast.success(message, ToastOptions::new());
                                            }
                                        },
                                        "Approve"
                                    }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| { navigator().push(Route::UserManagement {}); },
                        "View All Verifications"
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "System Health" }
                    CardDescription { "Platform performance metrics" }
                }
                CardContent {
                    div { class: "health-list",
                        for metric in SYSTEM_HEALTH.iter() {
                            div { key: "{metric.label}",
                                div { class: "health-caption",
                                    span { "{metric.label}" }
                                    span { class: "staff-list-title", "{metric.display}" }
                                }
                                Progress { value: metric.percent }
                            }
                        }
                    }
                    div { class: "stat-tiles",
                        for tile in ACTIVE_PARTICIPANTS.iter() {
                            div { key: "{tile.label}", class: "stat-tile",
                                div { class: "stat-tile-value", "{tile.value}" }
                                div { class: "stat-tile-label", "{tile.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
