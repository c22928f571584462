use dioxus::prelude::*;

/// Search box row above a table. Extra children (filters, buttons) sit to
/// the right of the input.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            input {
                class: "search-bar-input",
                r#type: "search",
                value: value,
                placeholder: placeholder,
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            {children}
        }
    }
}
