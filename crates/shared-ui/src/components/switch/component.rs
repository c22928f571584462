use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// On/off toggle with a state caption beside it.
///
/// The caption reads `on_label` or `off_label` and carries `data-on` so the
/// stylesheet can tint it while the switch is on.
#[component]
pub fn Switch(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(into, default = "On".to_string())] on_label: String,
    #[props(into, default = "Off".to_string())] off_label: String,
) -> Element {
    let caption = if checked { on_label } else { off_label };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "switch-field",
            span { class: "switch-caption", "data-on": checked, "{caption}" }
            prim::Switch {
                class: "switch",
                checked: Some(checked),
                on_checked_change: move |value: bool| on_change.call(value),
                prim::SwitchThumb { class: "switch-thumb" }
            }
        }
    }
}
