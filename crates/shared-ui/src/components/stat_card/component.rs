use dioxus::prelude::*;

/// Direction of the change shown under a headline figure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// `+12%` is up, `-3` is down, anything else is flat.
    pub fn of(change: &str) -> Self {
        match change.trim().chars().next() {
            Some('+') => Trend::Up,
            Some('-') => Trend::Down,
            _ => Trend::Flat,
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// Headline tile: a label, a big value and an optional caption or change.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] caption: Option<String>,
    #[props(default)] change: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-card-title", "{title}" }
            span { class: "stat-card-value", "{value}" }
            if let Some(change) = change {
                span {
                    class: "stat-card-change",
                    "data-trend": Trend::of(&change).class(),
                    "{change} from last month"
                }
            }
            if let Some(caption) = caption {
                span { class: "stat-card-caption", "{caption}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_follows_sign() {
        assert_eq!(Trend::of("+12%"), Trend::Up);
        assert_eq!(Trend::of(" -0.4"), Trend::Down);
        assert_eq!(Trend::of("0%"), Trend::Flat);
        assert_eq!(Trend::of(""), Trend::Flat);
    }
}
