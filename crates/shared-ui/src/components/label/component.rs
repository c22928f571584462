use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Label for the auth, booking, payment and add-user form fields; pair with
/// `html_for` on the field's id so clicking the label focuses the input.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "form-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
