use crate::format_helpers::{format_rating, format_rupees, format_schedule, today_iso};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCreditCard, LdMapPin, LdRoute, LdStar};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{BookingMode, BookingRequest, AVAILABLE_DRIVERS, RIDE_OPTIONS, SERVICE_FEE};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, DialogContent, DialogDescription, DialogFooter, DialogRoot, DialogTitle, Input,
    Label, PersonAvatar, Segment, SegmentedControl, ToastOptions,
};

/// Booking form: locations, now-or-later, and a ride type or driver.
#[component]
pub fn BookRide() -> Element {
    let toast = use_toast();
    let mut form = use_signal(BookingRequest::default);
    let mut confirming = use_signal(|| false);

    let request = form();
    let ready = !request.pickup.is_empty()
        && !request.destination.is_empty()
        && (request.ride_option.is_some() || request.driver.is_some());
    let schedule_text = (request.mode == BookingMode::Schedule
        && !request.scheduled_date.is_empty()
        && !request.scheduled_time.is_empty())
    .then(|| format_schedule(&request.scheduled_date, &request.scheduled_time));
    let selection = request.selection_label();
    let fare = request.fare().map(format_rupees).unwrap_or_else(|| "₹0.00".to_string());
    let total = request.total().map(format_rupees).unwrap_or_else(|| "₹0.00".to_string());
    let service_fee = format_rupees(SERVICE_FEE);

    let handle_book = move |_: MouseEvent| match form.read().validate() {
        Ok(()) => confirming.set(true),
        Err(message) => {
            toast.error(message.to_string(), ToastOptions::new());
        }
    };

    let handle_confirm = move |_: MouseEvent| {
        confirming.set(false);
        tracing::info!("Ride booked");
        toast.success("Ride booked successfully!".to_string(), ToastOptions::new());
        form.set(BookingRequest::default());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./rider.css") }

        div { class: "book-layout",
            div { class: "book-main",
                Card {
                    CardHeader {
                        CardTitle { "Ride Details" }
                        CardDescription { "Enter your pickup and destination locations" }
                    }
                    CardContent {
                        div { class: "book-field",
                            Label { html_for: "pickup", "Pickup Location" }
                            div { class: "book-field-row",
                                Input {
                                    id: "pickup",
                                    placeholder: "Enter pickup location",
                                    value: request.pickup.clone(),
                                    on_input: move |e: FormEvent| form.write().pickup = e.value(),
                                }
                                Button {
                                    variant: ButtonVariant::Ghost,
                                    onclick: move |_: MouseEvent| form.write().pickup = "Current Location".to_string(),
                                    Icon::<LdMapPin> { icon: LdMapPin, width: 16, height: 16 }
                                }
                            }
                        }
                        div { class: "book-field",
                            Label { html_for: "destination", "Destination" }
                            Input {
                                id: "destination",
                                placeholder: "Enter destination",
                                value: request.destination.clone(),
                                on_input: move |e: FormEvent| form.write().destination = e.value(),
                            }
                        }

                        SegmentedControl {
                            segments: vec![Segment::new("now", "Ride Now"), Segment::new("schedule", "Schedule")],
                            selected: if request.mode == BookingMode::Schedule { "schedule".to_string() } else { "now".to_string() },
                            on_select: move |key: String| {
                                form.write().mode = if key == "schedule" { BookingMode::Schedule } else { BookingMode::Now };
                            },
                        }

                        if request.mode == BookingMode::Now {
                            p { class: "muted book-now-note", "Your ride will arrive as soon as possible" }
                        } else {
                            div { class: "book-schedule",
                                div { class: "book-field",
                                    Label { html_for: "ride-date", "Date" }
                                    input {
                                        id: "ride-date",
                                        class: "input",
                                        r#type: "date",
                                        min: today_iso(),
                                        value: request.scheduled_date.clone(),
                                        oninput: move |e: FormEvent| form.write().scheduled_date = e.value(),
                                    }
                                }
                                div { class: "book-field",
                                    Label { html_for: "ride-time", "Time" }
                                    input {
                                        id: "ride-time",
                                        class: "input",
                                        r#type: "time",
                                        value: request.scheduled_time.clone(),
                                        oninput: move |e: FormEvent| form.write().scheduled_time = e.value(),
                                    }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Select Ride Type" }
                        CardDescription { "Choose from available ride options" }
                    }
                    CardContent {
                        div { class: "choice-list",
                            for option in RIDE_OPTIONS.iter() {
                                div {
                                    key: "{option.id}",
                                    class: "choice",
                                    "data-selected": request.ride_option.as_deref() == Some(option.id),
                                    onclick: move |_| {
                                        let mut f = form.write();
                                        f.ride_option = Some(option.id.to_string());
                                        f.driver = None;
                                    },
                                    div {
                                        div { class: "choice-title", "{option.kind}" }
                                        div { class: "muted", "{option.eta} • {option.seats} seats" }
                                    }
                                    div { class: "choice-price", "{format_rupees(option.price)}" }
                                }
                            }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Available Drivers" }
                        CardDescription { "Select a specific driver for your ride" }
                    }
                    CardContent {
                        div { class: "choice-list",
                            for driver in AVAILABLE_DRIVERS.iter() {
                                div {
                                    key: "{driver.id}",
                                    class: "choice",
                                    "data-selected": request.driver.as_deref() == Some(driver.id),
                                    onclick: move |_| {
                                        let mut f = form.write();
                                        f.driver = Some(driver.id.to_string());
                                        f.ride_option = None;
                                    },
                                    div { class: "choice-person",
                                        PersonAvatar { name: driver.name.to_string(), image: driver.image.to_string() }
                                        div {
                                            div { class: "choice-title", "{driver.name}" }
                                            div { class: "muted", "{driver.car} • {driver.plate}" }
                                            div { class: "muted choice-rating",
                                                Icon::<LdStar> { icon: LdStar, width: 12, height: 12 }
                                                "{format_rating(driver.rating)} • {driver.eta}"
                                            }
                                        }
                                    }
                                    div { class: "choice-price", "{format_rupees(driver.price)}" }
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "book-summary",
                CardHeader {
                    CardTitle { "Ride Summary" }
                    CardDescription { "Review your ride details" }
                }
                CardContent {
                    if !request.pickup.is_empty() && !request.destination.is_empty() {
                        dl { class: "summary-list",
                            dt { "Pickup" }
                            dd { "{request.pickup}" }
                            dt { "Destination" }
                            dd { "{request.destination}" }
                            if let Some(when) = schedule_text.clone() {
                                dt { "Scheduled Time" }
                                dd { "{when}" }
                            }
                            if let Some((caption, value)) = selection {
                                dt { "{caption}" }
                                dd { "{value}" }
                            }
                        }
                        div { class: "summary-fares",
                            div { class: "summary-fare-row",
                                span { "Ride Fare" }
                                span { "{fare}" }
                            }
                            div { class: "summary-fare-row",
                                span { "Service Fee" }
                                span { "{service_fee}" }
                            }
                            div { class: "summary-fare-row summary-total",
                                span { "Total" }
                                span { "{total}" }
                            }
                        }
                    } else {
                        div { class: "summary-empty",
                            Icon::<LdRoute> { icon: LdRoute, width: 32, height: 32 }
                            h3 { "No ride details yet" }
                            p { class: "muted",
                                "Enter your pickup and destination locations to see a summary of your ride."
                            }
                        }
                    }
                }
                CardFooter {
                    div { class: "summary-payment muted",
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 14, height: 14 }
                        span { "Payment: UPI / Wallet" }
                    }
                    Button { disabled: !ready, onclick: handle_book, "Book Ride" }
                }
            }
        }

        DialogRoot {
            open: confirming(),
            on_open_change: move |open: bool| confirming.set(open),
            DialogContent {
                DialogTitle { "Confirm Your Ride" }
                DialogDescription { "Review the details of your ride before confirming" }
                dl { class: "summary-list",
                    dt { "Pickup" }
                    dd { "{request.pickup}" }
                    dt { "Destination" }
                    dd { "{request.destination}" }
                    if let Some(when) = schedule_text {
                        dt { "Scheduled Time" }
                        dd { "{when}" }
                    }
                    if let Some((caption, value)) = selection {
                        dt { "{caption}" }
                        dd { "{value}" }
                    }
                    dt { "Total" }
                    dd { "{total}" }
                }
                DialogFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_: MouseEvent| confirming.set(false),
                        "Cancel"
                    }
                    Button { onclick: handle_confirm, "Confirm Ride" }
                }
            }
        }
    }
}
