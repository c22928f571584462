use dioxus::prelude::*;

/// Whether the navigation drawer is open on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Page frame with a fixed navigation column and a content area.
#[component]
pub fn SidebarLayout(children: Element) -> Element {
    let state = use_context_provider(|| Signal::new(SidebarState { open: false }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-layout",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let open = state().open;

    rsx! {
        if open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content",
            ul { class: "sidebar-menu", {children} }
        }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// A navigation entry. Wrap the router `Link` around it, or give it an
/// `onclick`.
#[component]
pub fn SidebarMenuButton(
    #[props(default)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    rsx! {
        li { class: "sidebar-menu-item",
            div {
                class: "sidebar-menu-button",
                "data-active": if active { "true" } else { "false" },
                onclick: move |evt| {
                    state.set(SidebarState { open: false });
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

/// Hamburger button that opens the drawer on narrow screens.
#[component]
pub fn SidebarTrigger() -> Element {
    let mut state = use_sidebar();
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            aria_label: "Toggle navigation",
            onclick: move |_| {
                let open = state().open;
                state.set(SidebarState { open: !open });
            },
            "\u{2630}"
        }
    }
}

/// Content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}
