//! Building blocks shared by the sign-in and registration screens.

use crate::routes::Route;
use crate::BRAND;
use dioxus::prelude::*;
use shared_types::{UserRole, ALL_ROLES};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect, Input,
    Label,
};

/// Centered card with the brand link above it. `footer` holds the
/// cross-link to the other auth screen.
#[component]
pub fn AuthShell(
    title: String,
    description: String,
    footer: Element,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Link { class: "auth-brand", to: Route::Index {}, "{BRAND}" }
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent { {children} }
                CardFooter {
                    p { class: "auth-link", {footer} }
                }
            }
        }
    }
}

/// Labelled, required text input bound to a string signal.
#[component]
pub fn AuthField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    placeholder: String,
    mut value: Signal<String>,
) -> Element {
    rsx! {
        div { class: "auth-field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                input_type: input_type,
                id: id,
                placeholder: placeholder,
                required: true,
                value: value(),
                on_input: move |e: FormEvent| value.set(e.value()),
            }
        }
    }
}

/// Role dropdown. `describe` supplies each option's caption.
#[component]
pub fn RolePicker(
    label: String,
    mut role: Signal<UserRole>,
    describe: fn(UserRole) -> &'static str,
) -> Element {
    rsx! {
        div { class: "auth-field",
            FormSelect {
                id: "role",
                label: label,
                value: role().as_str().to_string(),
                onchange: move |e: FormEvent| {
                    if let Some(picked) = UserRole::parse(&e.value()) {
                        role.set(picked);
                    }
                },
                for option_role in ALL_ROLES.iter() {
                    option { value: option_role.as_str(), "{describe(*option_role)}" }
                }
            }
        }
    }
}

/// Submit button that swaps its caption and disables itself while `busy`.
#[component]
pub fn SubmitButton(busy: bool, idle_label: String, busy_label: String) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "auth-submit button",
            disabled: busy,
            if busy { "{busy_label}" } else { "{idle_label}" }
        }
    }
}
