use dioxus::prelude::*;

use crate::routes::Route;

/// 404 page for any path outside the route table.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    use_hook({
        let path = path.clone();
        move || tracing::warn!(%path, "No route for path")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Oops! Wrong Turn" }
                p { class: "not-found-message",
                    "We couldn't find the page you're looking for. It seems you've taken a detour!"
                }
                p { class: "not-found-path",
                    code { "{path}" }
                }
                Link { to: Route::Index {},
                    class: "not-found-link",
                    "Return to Home"
                }
            }
        }
    }
}
