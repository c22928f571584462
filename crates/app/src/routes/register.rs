use super::auth_form::{AuthField, AuthShell, RolePicker, SubmitButton};
use crate::auth::use_auth;
use crate::routes::{home_route, Route};
use dioxus::prelude::*;
use shared_types::UserRole;
use shared_ui::{use_toast, ToastOptions};

/// Create-account form. A successful registration signs the user in.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let role = use_signal(|| UserRole::Rider);
    let mut busy = use_signal(|| false);

    let create_account = move |evt: FormEvent| async move {
        evt.prevent_default();
        busy.set(true);

        let outcome = auth.register(name(), email(), password(), role()).await;
        busy.set(false);
        match outcome {
            Ok(user) => {
                toast.success("Account created successfully!".to_string(), ToastOptions::new());
                navigator().push(home_route(user.role));
            }
            Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
        }
    };

    rsx! {
        AuthShell {
            title: "Create Account",
            description: "Join as a rider, driver or staff member",
            footer: rsx! {
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            },

            form { onsubmit: create_account,
                AuthField { id: "name", label: "Full Name", placeholder: "Jane Doe", value: name }
                AuthField {
                    id: "email",
                    label: "Email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: email,
                }
                AuthField {
                    id: "password",
                    label: "Password",
                    input_type: "password",
                    placeholder: "Choose a password",
                    value: password,
                }
                RolePicker { label: "I want to", role, describe: role_pitch }
                SubmitButton { busy: busy(), idle_label: "Create Account", busy_label: "Creating account..." }
            }
        }
    }
}

fn role_pitch(role: UserRole) -> &'static str {
    match role {
        UserRole::Rider => "Ride with us",
        UserRole::Driver => "Drive with us",
        UserRole::Staff => "Manage the platform",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_pitch() {
        for role in shared_types::ALL_ROLES {
            assert!(!role_pitch(*role).is_empty());
        }
    }
}
