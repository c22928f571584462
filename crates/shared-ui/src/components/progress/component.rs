use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Fill colour of a [`Progress`] bar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ProgressTone {
    #[default]
    Primary,
    Success,
    Warning,
}

impl ProgressTone {
    fn as_str(&self) -> &'static str {
        match self {
            ProgressTone::Primary => "primary",
            ProgressTone::Success => "success",
            ProgressTone::Warning => "warning",
        }
    }
}

/// Clamps a percentage into the range the bar can draw.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Horizontal bar filled to `value` percent.
#[component]
pub fn Progress(value: f64, #[props(default)] tone: ProgressTone) -> Element {
    let percent = clamp_percent(value);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress-track", "data-tone": tone.as_str(),
            prim::Progress { class: "progress", value: Some(percent),
                prim::ProgressIndicator { class: "progress-indicator" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_stay_in_range() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(180.0), 100.0);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
    }
}
