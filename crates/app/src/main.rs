use dioxus::prelude::*;

mod auth;
mod components;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Session settings, baked in at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Product name shown in headers and the sidebar.
pub const BRAND: &str = "RideX";

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else if cfg!(feature = "web") {
        "web"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    // The launcher has installed the tracing subscriber by the time the
    // root component runs, so config warnings reach the console.
    use_hook(|| {
        gate::init_config(CONFIG_TOML);
        tracing::info!(platform = client_platform(), "Starting client");
    });

    use_context_provider(AuthState::restore);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
