use super::announce;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdCalendar, LdClock, LdDollarSign, LdMapPin, LdToggleLeft, LdUser,
};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{
    availability_message, format_dollars, DriverAction, DRIVER_DAY_STATS, DRIVER_NOTICES,
    PENDING_REQUESTS, SHIFT_SUMMARY,
};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Progress, ProgressTone, Switch, ToastOptions,
};

#[component]
pub fn DriverDashboard() -> Element {
    let toast = use_toast();
    let mut online = use_signal(|| false);

    let toggle_online = move |now_online: bool| {
        online.set(now_online);
        tracing::info!(online = now_online, "Driver availability changed");
        toast.success(availability_message(now_online).to_string(), ToastOptions::new());
    };

    let shift = SHIFT_SUMMARY;
    let goal_text = format!(
        "{} / {}",
        format_dollars(shift.earnings_today),
        format_dollars(shift.daily_goal)
    );

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./driver.css") }

        div { class: "driver-grid",
            Card { class: "driver-status",
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "Driver Status" }
                            CardDescription { "Control your availability" }
                        }
                        Switch {
                            checked: online(),
                            on_change: toggle_online,
                            on_label: "Online",
                            off_label: "Offline",
                        }
                    }
                }
                CardContent {
                    div { class: "shift-panel",
                        div { class: "shift-facts",
                            div { class: "shift-fact",
                                div { class: "muted", "Current Location" }
                                div { class: "shift-fact-value",
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                                    "{shift.area}"
                                }
                            }
                            div { class: "shift-fact",
                                div { class: "muted", "Today's Earnings" }
                                div { class: "shift-fact-value",
                                    Icon::<LdDollarSign> { icon: LdDollarSign, width: 16, height: 16 }
                                    "{format_dollars(shift.earnings_today)}"
                                }
                            }
                            div { class: "shift-fact",
                                div { class: "muted", "Online Hours" }
                                div { class: "shift-fact-value",
                                    Icon::<LdClock> { icon: LdClock, width: 16, height: 16 }
                                    "{shift.online_time}"
                                }
                            }
                        }
                        div { class: "shift-goal",
                            div { class: "shift-goal-caption",
                                span { "Daily Goal Progress" }
                                span { "{goal_text}" }
                            }
                            Progress { value: shift.goal_percent(), tone: ProgressTone::Success }
                        }
                    }

                    if online() {
                        h3 { class: "driver-section-title", "Nearby Ride Requests" }
                        div { class: "request-list",
                            for request in PENDING_REQUESTS.iter() {
                                div { key: "{request.id}", class: "request-card",
                                    div { class: "request-head",
                                        div { class: "request-rider",
                                            Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                                            span { "{request.rider}" }
                                        }
                                        div { class: "muted request-eta",
                                            Icon::<LdClock> { icon: LdClock, width: 14, height: 14 }
                                            "{request.eta}"
                                        }
                                    }
                                    div { class: "request-details",
                                        div {
                                            div { class: "request-caption", "Pickup" }
                                            div { "{request.pickup}" }
                                        }
                                        div {
                                            div { class: "request-caption", "Destination" }
                                            div { "{request.destination}" }
                                        }
                                        div {
                                            div { class: "request-caption", "Fare" }
                                            div { class: "request-fare", "{request.fare}" }
                                        }
                                    }
                                    div { class: "request-actions",
                                        Button {
                                            variant: ButtonVariant::Outline,
                                            size: ButtonSize::Small,
                                            onclick: move |_: MouseEvent| announce(toast, DriverAction::DeclineNearby),
                                            "Decline"
                                        }
                                        Button {
                                            size: ButtonSize::Small,
                                            onclick: move |_: MouseEvent| announce(toast, DriverAction::AcceptNearby),
                                            "Accept"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Today's Summary" }
                    CardDescription { "Your daily activity" }
                }
                CardContent {
                    div { class: "stat-tiles",
                        for stat in DRIVER_DAY_STATS.iter() {
                            div { key: "{stat.label}", class: "stat-tile",
                                div { class: "stat-tile-value", "{stat.value}" }
                                div { class: "stat-tile-label", "{stat.label}" }
                            }
                        }
                    }
                    div { class: "driver-summary-action",
                        Button {
                            onclick: move |_: MouseEvent| { navigator().push(Route::Earnings {}); },
                            Icon::<LdDollarSign> { icon: LdDollarSign, width: 16, height: 16 }
                            "View Detailed Earnings"
                        }
                    }
                    div { class: "notice-list",
                        h4 { "Recent Notifications" }
                        for (i, notice) in DRIVER_NOTICES.iter().enumerate() {
                            div { key: "{notice.title}", class: "notice",
                                if i == 0 {
                                    Icon::<LdBell> { icon: LdBell, width: 16, height: 16 }
                                } else {
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                                }
                                div {
                                    div { class: "notice-title", "{notice.title}" }
                                    div { class: "muted notice-detail", "{notice.detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                div { class: "card-header-row",
                    div {
                        CardTitle { "Upcoming Schedule" }
                        CardDescription { "Pre-booked rides" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_: MouseEvent| { navigator().push(Route::ManageRides {}); },
                        "View All"
                    }
                }
            }
            CardContent {
                div { class: "driver-empty",
                    Icon::<LdToggleLeft> { icon: LdToggleLeft, width: 56, height: 56 }
                    h3 { "No upcoming rides" }
                    p { class: "muted",
                        "You don't have any pre-booked rides. Turn on your availability to start receiving ride requests."
                    }
                }
            }
        }
    }
}
