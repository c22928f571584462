use crate::components::RideStatusBadge;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdCar, LdCreditCard, LdMap, LdMapPin};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{RECENT_RIDES, RIDER_STATS, WALLET};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Progress,
};

#[component]
pub fn RiderDashboard() -> Element {
    let mut pickup = use_signal(String::new);
    let mut destination = use_signal(String::new);
    let can_search = !pickup().trim().is_empty() && !destination().trim().is_empty();
    let budget_used = WALLET.budget_used_percent();
    let spent = format!("${:.2} / ${:.0}", WALLET.monthly_spent, WALLET.monthly_budget);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rider.css") }

        div { class: "rider-grid",
            Card { class: "rider-quick-ride",
                CardHeader {
                    CardTitle { "Quick Ride" }
                    CardDescription { "Book a ride in seconds" }
                }
                CardContent {
                    div { class: "field-with-icon",
                        span { class: "field-caption",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                            "Pickup Location"
                        }
                        Input {
                            placeholder: "Enter pickup location",
                            value: pickup(),
                            on_input: move |e: FormEvent| pickup.set(e.value()),
                        }
                    }
                    div { class: "field-with-icon",
                        span { class: "field-caption",
                            Icon::<LdMap> { icon: LdMap, width: 16, height: 16 }
                            "Destination"
                        }
                        Input {
                            placeholder: "Enter destination",
                            value: destination(),
                            on_input: move |e: FormEvent| destination.set(e.value()),
                        }
                    }
                    Button {
                        disabled: !can_search,
                        onclick: move |_: MouseEvent| { navigator().push(Route::BookRide {}); },
                        Icon::<LdCar> { icon: LdCar, width: 16, height: 16 }
                        "Find Rides"
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Wallet" }
                    CardDescription { "Your payment details" }
                }
                CardContent {
                    span { class: "muted", "Current Balance" }
                    div { class: "wallet-balance", "{WALLET.balance}" }
                    div { class: "wallet-spending",
                        span { "Monthly spending" }
                        span { "{spent}" }
                    }
                    Progress { value: budget_used }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| { navigator().push(Route::Payment {}); },
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                        "Manage Payment Methods"
                    }
                }
            }

            Card { class: "rider-recent",
                CardHeader {
                    div { class: "card-header-row",
                        div {
                            CardTitle { "Recent Rides" }
                            CardDescription { "Your latest trips" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_: MouseEvent| { navigator().push(Route::RideHistory {}); },
                            "View All"
                        }
                    }
                }
                CardContent {
                    ul { class: "ride-list",
                        for ride in RECENT_RIDES.iter() {
                            li { key: "{ride.id}", class: "ride-list-item",
                                div {
                                    div { class: "ride-list-date",
                                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                                        span { "{ride.date}" }
                                    }
                                    div { class: "ride-list-route", "{ride.pickup} to {ride.destination}" }
                                }
                                div { class: "ride-list-meta",
                                    div { class: "ride-list-amount", "{ride.amount}" }
                                    RideStatusBadge { status: ride.status }
                                }
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Ride Statistics" }
                    CardDescription { "Your riding patterns" }
                }
                CardContent {
                    div { class: "stat-tiles",
                        for stat in RIDER_STATS.iter() {
                            div { key: "{stat.label}", class: "stat-tile",
                                div { class: "stat-tile-value", "{stat.value}" }
                                div { class: "stat-tile-label", "{stat.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
