use crate::auth::use_auth;
use crate::routes::{home_route, Route};
use crate::BRAND;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCar, LdChevronRight, LdCreditCard, LdMapPin, LdStar, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, PersonAvatar};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Convenient Rides",
        description: "Book a ride easily and get to your destination comfortably and on time.",
    },
    Feature {
        title: "Verified Drivers",
        description: "All our drivers are thoroughly vetted and verified for your safety.",
    },
    Feature {
        title: "Easy Payments",
        description: "Multiple payment options including credit cards, digital wallets, and cash.",
    },
    Feature {
        title: "Rate Your Experience",
        description: "Provide feedback and rate your rides to help us improve.",
    },
];

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "1. Set Your Location",
        description: "Enter your pickup and drop-off locations to find available rides.",
    },
    Step {
        title: "2. Choose Your Ride",
        description: "Select from available drivers based on price, ratings, and arrival time.",
    },
    Step {
        title: "3. Enjoy Your Ride",
        description: "Sit back, relax, and rate your experience after reaching your destination.",
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    image: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Emily Johnson",
        role: "Regular Rider",
        quote: "RideX has transformed my daily commute. The app is so easy to use, and the drivers are always professional and punctual.",
        image: "https://i.pravatar.cc/150?img=5",
    },
    Testimonial {
        name: "Michael Chen",
        role: "RideX Driver",
        quote: "Being a RideX driver has provided me with a flexible source of income. The platform is driver-friendly and the support team is responsive.",
        image: "https://i.pravatar.cc/150?img=8",
    },
    Testimonial {
        name: "Sophia Rodriguez",
        role: "Business Traveler",
        quote: "I rely on RideX for all my business trips. The service is consistent, and I never have to worry about transportation.",
        image: "https://i.pravatar.cc/150?img=9",
    },
];

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1532975304279-a2d2febe3a20?auto=format&fit=crop&q=80&w=1000";

#[component]
fn FeatureIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdCar> { icon: LdCar, width: 28, height: 28 } },
        1 => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 28, height: 28 } },
        2 => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 28, height: 28 } },
        _ => rsx! { Icon::<LdStar> { icon: LdStar, width: 28, height: 28 } },
    }
}

#[component]
fn StepIcon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 28, height: 28 } },
        1 => rsx! { Icon::<LdCar> { icon: LdCar, width: 28, height: 28 } },
        _ => rsx! { Icon::<LdStar> { icon: LdStar, width: 28, height: 28 } },
    }
}

/// Public landing page.
#[component]
pub fn Index() -> Element {
    let auth = use_auth();
    let signed_in = auth.is_authenticated();

    let go_to_dashboard = move |_: MouseEvent| match auth.current_user() {
        Some(user) => {
            navigator().push(home_route(user.role));
        }
        None => {
            navigator().push(Route::Login {});
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-header",
                Link { class: "landing-logo", to: Route::Index {},
                    span { "Ride" }
                    span { class: "landing-logo-accent", "X" }
                }
                nav { class: "landing-nav",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_: MouseEvent| { navigator().push(Route::Index {}); },
                        "Home"
                    }
                    if signed_in {
                        Button { onclick: go_to_dashboard, "Dashboard" }
                    } else {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_: MouseEvent| { navigator().push(Route::Login {}); },
                            "Login"
                        }
                        Button {
                            onclick: move |_: MouseEvent| { navigator().push(Route::Register {}); },
                            "Register"
                        }
                    }
                }
            }

            section { class: "landing-hero",
                div { class: "landing-hero-text",
                    h1 { "Your Journey, Our Priority" }
                    p {
                        "{BRAND} connects you with reliable drivers for a seamless carpooling experience. Save money, reduce emissions, and travel comfortably."
                    }
                    div { class: "landing-hero-actions",
                        Button {
                            size: ButtonSize::Large,
                            onclick: move |_: MouseEvent| { navigator().push(Route::Register {}); },
                            "Get Started"
                            Icon::<LdChevronRight> { icon: LdChevronRight, width: 18, height: 18 }
                        }
                        Button {
                            size: ButtonSize::Large,
                            variant: ButtonVariant::Outline,
                            onclick: move |_: MouseEvent| { navigator().push(Route::Login {}); },
                            "Sign In"
                        }
                    }
                }
                img { class: "landing-hero-image", src: HERO_IMAGE, alt: "Carpooling" }
            }

            section { class: "landing-section",
                h2 { "Why Choose {BRAND}?" }
                p { class: "landing-section-lead",
                    "Experience the best carpooling service with features designed for convenience, safety, and affordability."
                }
                div { class: "landing-grid",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        div { key: "{feature.title}", class: "landing-feature",
                            div { class: "landing-feature-icon", FeatureIcon { index: i } }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }

            section { class: "landing-section landing-section-alt",
                h2 { "How {BRAND} Works" }
                p { class: "landing-section-lead",
                    "Get from point A to point B in just three simple steps"
                }
                div { class: "landing-grid landing-steps",
                    for (i, step) in STEPS.iter().enumerate() {
                        div { key: "{step.title}", class: "landing-step",
                            div { class: "landing-step-icon", StepIcon { index: i } }
                            h3 { "{step.title}" }
                            p { "{step.description}" }
                        }
                    }
                }
            }

            section { class: "landing-section",
                h2 { "What Our Users Say" }
                p { class: "landing-section-lead", "Hear from our community of riders and drivers" }
                div { class: "landing-grid landing-testimonials",
                    for testimonial in TESTIMONIALS.iter() {
                        div { key: "{testimonial.name}", class: "landing-testimonial",
                            div { class: "landing-testimonial-person",
                                PersonAvatar {
                                    name: testimonial.name.to_string(),
                                    image: testimonial.image.to_string(),
                                }
                                div {
                                    h4 { "{testimonial.name}" }
                                    p { class: "muted", "{testimonial.role}" }
                                }
                            }
                            p { class: "landing-quote", "\"{testimonial.quote}\"" }
                        }
                    }
                }
            }

            section { class: "landing-cta",
                h2 { "Ready to Get Started?" }
                p { "Join thousands of users who are already enjoying a better way to travel with {BRAND}." }
                Button {
                    size: ButtonSize::Large,
                    variant: ButtonVariant::Secondary,
                    onclick: move |_: MouseEvent| { navigator().push(Route::Register {}); },
                    "Sign Up Now"
                }
            }

            footer { class: "landing-footer",
                div {
                    h3 { "{BRAND}" }
                    p { class: "muted",
                        "Your trusted carpooling platform for safe, affordable, and convenient rides."
                    }
                }
                p { class: "muted", "© 2025 {BRAND}. All rights reserved." }
            }
        }
    }
}
