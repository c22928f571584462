use super::auth_form::{AuthField, AuthShell, RolePicker, SubmitButton};
use crate::auth::use_auth;
use crate::routes::{home_route, Route};
use dioxus::prelude::*;
use shared_types::{SessionUser, UserRole};
use shared_ui::{use_toast, ToastOptions};

fn welcome_message(user: &SessionUser) -> String {
    format!("Welcome back, {}!", user.name)
}

fn role_name(role: UserRole) -> &'static str {
    role.display_name()
}

/// Sign-in form: email, password and the role to sign in as.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let role = use_signal(|| UserRole::Rider);
    let mut busy = use_signal(|| false);

    // Already signed in: go straight to the dashboard.
    use_hook(move || {
        if let Some(user) = auth.current_user() {
            navigator().replace(home_route(user.role));
        }
    });

    let sign_in = move |evt: FormEvent| async move {
        evt.prevent_default();
        busy.set(true);

        let outcome = auth.authenticate(email(), password(), role()).await;
        busy.set(false);
        match outcome {
            Ok(user) => {
                toast.success(welcome_message(&user), ToastOptions::new());
                navigator().push(home_route(user.role));
            }
            Err(e) => toast.error(e.friendly_message(), ToastOptions::new()),
        }
    };

    rsx! {
        AuthShell {
            title: "Sign In",
            description: "Enter your credentials to access your account",
            footer: rsx! {
                "Don't have an account? "
                Link { to: Route::Register {}, "Create one" }
            },

            form { onsubmit: sign_in,
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
                    placeholder: "Enter your password",
                    value: password,
                }
                RolePicker { label: "Sign in as", role, describe: role_name }
                SubmitButton { busy: busy(), idle_label: "Sign In", busy_label: "Signing in..." }
            }
            p { class: "auth-hint",
                "Demo accounts: rider@example.com, driver@example.com or staff@example.com with password \"password\"."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn greeting_uses_full_name() {
        let user = SessionUser {
            id: "d1".into(),
            name: "Dave Driver".into(),
            email: "driver@example.com".into(),
            role: UserRole::Driver,
            profile_image: None,
        };
        assert_eq!(welcome_message(&user), "Welcome back, Dave Driver!");
    }
}
