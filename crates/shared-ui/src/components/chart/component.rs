use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 44.0;
const PAD_BOTTOM: f64 = 24.0;
const PAD_TOP: f64 = 8.0;
const TICKS: usize = 4;

/// Colour slot for a series; maps to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ChartTone {
    #[default]
    Primary,
    Success,
    Danger,
    Warning,
    Muted,
}

impl ChartTone {
    fn class(&self) -> &'static str {
        match self {
            ChartTone::Primary => "tone-primary",
            ChartTone::Success => "tone-success",
            ChartTone::Danger => "tone-danger",
            ChartTone::Warning => "tone-warning",
            ChartTone::Muted => "tone-muted",
        }
    }

    /// Cycles through the palette for share charts.
    pub fn nth(index: usize) -> Self {
        const PALETTE: [ChartTone; 5] = [
            ChartTone::Primary,
            ChartTone::Success,
            ChartTone::Warning,
            ChartTone::Danger,
            ChartTone::Muted,
        ];
        PALETTE[index % PALETTE.len()]
    }
}

/// One named run of values, aligned with the chart's labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub tone: ChartTone,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>, tone: ChartTone) -> Self {
        Self {
            name: name.into(),
            values,
            tone,
        }
    }
}

/// Round `value` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let fraction = value / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| fraction <= *step)
        .unwrap_or(10.0);
    nice * magnitude
}

/// Compact axis label: 60000 → "60k", 1500 → "1.5k", 450 → "450".
pub fn format_tick(value: f64) -> String {
    let trim = |s: String| {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    };
    if value.abs() >= 1_000_000.0 {
        format!("{}M", trim(format!("{:.1}", value / 1_000_000.0)))
    } else if value.abs() >= 1_000.0 {
        format!("{}k", trim(format!("{:.1}", value / 1_000.0)))
    } else {
        trim(format!("{value:.1}"))
    }
}

/// Largest value across all series, rounded to a nice axis maximum.
pub fn axis_max(series: &[ChartSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0, f64::max);
    nice_ceiling(max)
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64, max: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - (value / max).clamp(0.0, 1.0))
}

/// SVG `points` string for a polyline through `values`, evenly spaced
/// across the plot area.
pub fn line_points(values: &[f64], max: f64) -> String {
    let plot_width = WIDTH - PAD_LEFT;
    let step = if values.len() > 1 {
        plot_width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", PAD_LEFT + step * i as f64, y_for(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn label_x(index: usize, count: usize, centered: bool) -> f64 {
    let plot_width = WIDTH - PAD_LEFT;
    if centered {
        let band = plot_width / count.max(1) as f64;
        PAD_LEFT + band * (index as f64 + 0.5)
    } else if count > 1 {
        PAD_LEFT + plot_width / (count - 1) as f64 * index as f64
    } else {
        PAD_LEFT
    }
}

#[component]
fn Axis(max: f64, labels: Vec<String>, centered: bool) -> Element {
    let count = labels.len();
    let ticks: Vec<(f64, f64, String)> = (0..=TICKS)
        .map(|tick| {
            let value = max * tick as f64 / TICKS as f64;
            let y = y_for(value, max);
            (y, y + 4.0, format_tick(value))
        })
        .collect();
    let placed: Vec<(f64, String)> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label_x(i, count, centered), label))
        .collect();
    let tick_x = PAD_LEFT - 6.0;
    let label_y = HEIGHT - 6.0;

    rsx! {
        for (y, baseline, tick_label) in ticks {
            line { class: "chart-grid", x1: "{PAD_LEFT}", x2: "{WIDTH}", y1: "{y}", y2: "{y}" }
            text { class: "chart-tick", x: "{tick_x}", y: "{baseline}", "{tick_label}" }
        }
        for (x, label) in placed {
            text { class: "chart-label", x: "{x}", y: "{label_y}", "{label}" }
        }
    }
}

#[component]
fn Legend(series: Vec<ChartSeries>) -> Element {
    let entries: Vec<(String, &'static str)> = series
        .iter()
        .map(|s| (s.name.clone(), s.tone.class()))
        .collect();
    rsx! {
        if entries.len() > 1 {
            div { class: "chart-legend",
                for (name, tone) in entries {
                    span { class: "chart-legend-item",
                        span { class: "chart-swatch {tone}" }
                        "{name}"
                    }
                }
            }
        }
    }
}

/// Grouped vertical bars, one group per label.
#[component]
pub fn BarChart(labels: Vec<String>, series: Vec<ChartSeries>) -> Element {
    let max = axis_max(&series);
    let groups = labels.len().max(1);
    let band = (WIDTH - PAD_LEFT) / groups as f64;
    let bar_width = band * 0.7 / series.len().max(1) as f64;

    let mut bars = Vec::new();
    for (si, s) in series.iter().enumerate() {
        for (gi, value) in s.values.iter().enumerate() {
            let x = PAD_LEFT + band * gi as f64 + band * 0.15 + bar_width * si as f64;
            let y = y_for(*value, max);
            bars.push((x, y, HEIGHT - PAD_BOTTOM - y, s.tone.class()));
        }
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "chart",
            svg { class: "chart-svg", view_box: "0 0 {WIDTH} {HEIGHT}",
                Axis { max, labels: labels.clone(), centered: true }
                for (x, y, h, tone) in bars {
                    rect { class: "chart-bar {tone}", x: "{x}", y: "{y}", width: "{bar_width}", height: "{h}", rx: "3" }
                }
            }
            Legend { series }
        }
    }
}

/// One polyline per series.
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<ChartSeries>) -> Element {
    let max = axis_max(&series);
    let lines: Vec<(&'static str, String)> = series
        .iter()
        .map(|s| (s.tone.class(), line_points(&s.values, max)))
        .collect();
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "chart",
            svg { class: "chart-svg", view_box: "0 0 {WIDTH} {HEIGHT}",
                Axis { max, labels: labels.clone(), centered: false }
                for (tone, points) in lines {
                    polyline { class: "chart-line {tone}", points: "{points}" }
                }
            }
            Legend { series }
        }
    }
}

/// Share of each slice in the total, in percent.
pub fn shares(slices: &[(String, f64)]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    slices
        .iter()
        .map(|(_, v)| if total > 0.0 { v / total * 100.0 } else { 0.0 })
        .collect()
}

/// Percentage breakdown rendered as labelled horizontal bars.
#[component]
pub fn ShareChart(slices: Vec<(String, f64)>) -> Element {
    let rows: Vec<(String, f64, &'static str)> = shares(&slices)
        .into_iter()
        .zip(slices)
        .enumerate()
        .map(|(i, (pct, (name, _)))| (name, pct, ChartTone::nth(i).class()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "share-chart",
            for (name, pct, tone) in rows {
                div { key: "{name}", class: "share-row",
                    div { class: "share-row-label",
                        span { class: "chart-swatch {tone}" }
                        span { "{name}" }
                        span { class: "share-row-value", "{pct:.0}%" }
                    }
                    div { class: "share-track",
                        div { class: "share-fill {tone}", style: "width: {pct:.1}%" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nice_ceiling_rounds_up_to_friendly_steps() {
        assert_eq!(nice_ceiling(60000.0), 100000.0);
        assert_eq!(nice_ceiling(1650.0), 2000.0);
        assert_eq!(nice_ceiling(210.0), 250.0);
        assert_eq!(nice_ceiling(145.25), 200.0);
        assert_eq!(nice_ceiling(35.0), 50.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn ticks_are_compact() {
        assert_eq!(format_tick(60000.0), "60k");
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(450.0), "450");
        assert_eq!(format_tick(62.5), "62.5");
        assert_eq!(format_tick(2_500_000.0), "2.5M");
    }

    #[test]
    fn line_spans_plot_width() {
        let points = line_points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points, "44.0,216.0 322.0,112.0 600.0,8.0");
    }

    #[test]
    fn axis_max_covers_every_series() {
        let series = vec![
            ChartSeries::new("a", vec![10.0, 20.0], ChartTone::Primary),
            ChartSeries::new("b", vec![180.0], ChartTone::Danger),
        ];
        assert_eq!(axis_max(&series), 200.0);
    }

    #[test]
    fn shares_normalise_to_percent() {
        let slices = vec![("a".to_string(), 1.0), ("b".to_string(), 3.0)];
        assert_eq!(shares(&slices), vec![25.0, 75.0]);
        assert_eq!(shares(&[("z".to_string(), 0.0)]), vec![0.0]);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(ChartTone::nth(0), ChartTone::nth(5));
    }
}
