use dioxus::prelude::*;

/// One choice in a [`SegmentedControl`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub key: String,
    pub label: String,
}

impl Segment {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Row of mutually exclusive buttons, used for tab strips and filters.
/// The caller owns the selected key.
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "segmented", role: "tablist",
            for segment in segments {
                button {
                    key: "{segment.key}",
                    r#type: "button",
                    role: "tab",
                    class: "segmented-item",
                    "data-active": if segment.key == selected { "true" } else { "false" },
                    onclick: {
                        let key = segment.key.clone();
                        move |_| on_select.call(key.clone())
                    },
                    "{segment.label}"
                }
            }
        }
    }
}
