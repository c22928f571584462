use dioxus::prelude::*;
use shared_types::fixtures::{
    analytics_summary, format_thousands, quarterly_revenue, AnalyticsTimeframe, SeriesPoint,
    MONTHLY_REVENUE, MONTHLY_RIDES, PEAK_HOURS, REVENUE_SOURCES, RIDES_BY_LOCATION,
    RIDE_CATEGORIES, TRIP_DURATION, USER_ACQUISITION, USER_DISTRIBUTION, USER_GROWTH,
    WEEKLY_RIDES,
};
use shared_ui::{
    BarChart, Card, CardContent, CardDescription, CardHeader, CardTitle, ChartSeries, ChartTone,
    FormSelect, LineChart, Progress, ProgressTone, Segment, SegmentedControl, ShareChart,
    StatCard,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AnalyticsTab {
    Revenue,
    Rides,
    Users,
    Locations,
}

impl AnalyticsTab {
    fn key(&self) -> &'static str {
        match self {
            AnalyticsTab::Revenue => "revenue",
            AnalyticsTab::Rides => "rides",
            AnalyticsTab::Users => "users",
            AnalyticsTab::Locations => "locations",
        }
    }

    fn from_key(key: &str) -> Self {
        match key {
            "rides" => AnalyticsTab::Rides,
            "users" => AnalyticsTab::Users,
            "locations" => AnalyticsTab::Locations,
            _ => AnalyticsTab::Revenue,
        }
    }
}

fn labels(points: &[SeriesPoint]) -> Vec<String> {
    points.iter().map(|p| p.name.to_string()).collect()
}

fn values(points: &[SeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

fn slices(points: &[SeriesPoint]) -> Vec<(String, f64)> {
    points.iter().map(|p| (p.name.to_string(), p.value)).collect()
}

/// Revenue, ride, user and location charts for staff.
#[component]
pub fn Analytics() -> Element {
    let mut timeframe = use_signal(AnalyticsTimeframe::default);
    let mut tab = use_signal(|| AnalyticsTab::Revenue);

    let period = timeframe().as_str();
    let summary = analytics_summary();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./staff.css") }

        div { class: "analytics-toolbar",
            FormSelect {
                id: "analytics-timeframe",
                value: period.to_string(),
                onchange: move |e: FormEvent| timeframe.set(AnalyticsTimeframe::from_key(&e.value())),
                for option_timeframe in [AnalyticsTimeframe::Month, AnalyticsTimeframe::Quarter, AnalyticsTimeframe::Year] {
                    option { value: option_timeframe.as_str(), "{option_timeframe.label()}" }
                }
            }
        }

        div { class: "stat-row",
            StatCard {
                title: "Total Revenue",
                value: format!("${}", format_thousands(summary.total_revenue)),
                caption: format!("↑ 12.5% from previous {period}"),
            }
            StatCard {
                title: "Total Rides",
                value: format_thousands(summary.total_rides),
                caption: format!("↑ 8.3% from previous {period}"),
            }
            StatCard {
                title: "Avg Rides/Month",
                value: format_thousands(summary.avg_rides_per_month as f64),
                caption: format!("↑ 5.7% from previous {period}"),
            }
            StatCard {
                title: "Total Users",
                value: format_thousands(summary.total_users as f64),
                caption: "↓ 2.1% decrease in driver growth".to_string(),
            }
        }

        SegmentedControl {
            segments: vec![
                Segment::new("revenue", "Revenue"),
                Segment::new("rides", "Rides"),
                Segment::new("users", "Users"),
                Segment::new("locations", "Locations"),
            ],
            selected: tab().key().to_string(),
            on_select: move |key: String| tab.set(AnalyticsTab::from_key(&key)),
        }

        {
            match tab() {
                AnalyticsTab::Revenue => {
                    let quarters = quarterly_revenue();
                    rsx! {
                        div { class: "staff-grid",
                            Card { class: "analytics-full",
                                CardHeader {
                                    CardTitle { "Revenue Trends" }
                                    CardDescription { "Monthly revenue over the {period}" }
                                }
                                CardContent {
                                    LineChart {
                                        labels: labels(MONTHLY_REVENUE),
                                        series: vec![ChartSeries::new("Revenue", values(MONTHLY_REVENUE), ChartTone::Primary)],
                                    }
                                }
                            }
                            Card {
                                CardHeader {
                                    CardTitle { "Revenue Breakdown" }
                                    CardDescription { "Revenue sources" }
                                }
                                CardContent {
                                    ShareChart { slices: slices(REVENUE_SOURCES) }
                                }
                            }
                            Card {
                                CardHeader {
                                    CardTitle { "Revenue per Quarter" }
                                    CardDescription { "Quarterly performance" }
                                }
                                CardContent {
                                    BarChart {
                                        labels: quarters.iter().map(|(q, _)| q.clone()).collect::<Vec<_>>(),
                                        series: vec![ChartSeries::new(
                                            "Revenue",
                                            quarters.iter().map(|(_, v)| *v).collect(),
                                            ChartTone::Primary,
                                        )],
                                    }
                                }
                            }
                        }
                    }
                }
                AnalyticsTab::Rides => rsx! {
                    div { class: "staff-grid",
                        Card { class: "analytics-full",
                            CardHeader {
                                CardTitle { "Ride Trends" }
                                CardDescription { "Monthly rides over the {period}" }
                            }
                            CardContent {
                                LineChart {
                                    labels: labels(MONTHLY_RIDES),
                                    series: vec![ChartSeries::new("Rides", values(MONTHLY_RIDES), ChartTone::Primary)],
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Weekly Performance" }
                                CardDescription { "Rides completed vs cancelled" }
                            }
                            CardContent {
                                BarChart {
                                    labels: WEEKLY_RIDES.iter().map(|d| d.name.to_string()).collect::<Vec<_>>(),
                                    series: vec![
                                        ChartSeries::new(
                                            "Completed",
                                            WEEKLY_RIDES.iter().map(|d| d.completed as f64).collect(),
                                            ChartTone::Success,
                                        ),
                                        ChartSeries::new(
                                            "Cancelled",
                                            WEEKLY_RIDES.iter().map(|d| d.cancelled as f64).collect(),
                                            ChartTone::Danger,
                                        ),
                                    ],
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Ride Types" }
                                CardDescription { "Distribution by ride category" }
                            }
                            CardContent {
                                ShareChart { slices: slices(RIDE_CATEGORIES) }
                            }
                        }
                    }
                },
                AnalyticsTab::Users => rsx! {
                    div { class: "staff-grid",
                        Card { class: "analytics-full",
                            CardHeader {
                                CardTitle { "User Growth" }
                                CardDescription { "Growth of riders and drivers over time" }
                            }
                            CardContent {
                                LineChart {
                                    labels: USER_GROWTH.iter().map(|g| g.name.to_string()).collect::<Vec<_>>(),
                                    series: vec![
                                        ChartSeries::new(
                                            "Riders",
                                            USER_GROWTH.iter().map(|g| g.riders as f64).collect(),
                                            ChartTone::Primary,
                                        ),
                                        ChartSeries::new(
                                            "Drivers",
                                            USER_GROWTH.iter().map(|g| g.drivers as f64).collect(),
                                            ChartTone::Success,
                                        ),
                                    ],
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "User Distribution" }
                                CardDescription { "Breakdown by user type" }
                            }
                            CardContent {
                                ShareChart { slices: slices(USER_DISTRIBUTION) }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "User Acquisition" }
                                CardDescription { "New users by acquisition channel" }
                            }
                            CardContent {
                                BarChart {
                                    labels: labels(USER_ACQUISITION),
                                    series: vec![ChartSeries::new("Share", values(USER_ACQUISITION), ChartTone::Primary)],
                                }
                            }
                        }
                    }
                },
                AnalyticsTab::Locations => rsx! {
                    div { class: "staff-grid",
                        Card { class: "analytics-full",
                            CardHeader {
                                CardTitle { "Popular Ride Locations" }
                                CardDescription { "Distribution of rides by location" }
                            }
                            CardContent {
                                BarChart {
                                    labels: labels(RIDES_BY_LOCATION),
                                    series: vec![ChartSeries::new("Percentage", values(RIDES_BY_LOCATION), ChartTone::Success)],
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Peak Hours by Location" }
                                CardDescription { "When each location is busiest" }
                            }
                            CardContent {
                                div { class: "health-list",
                                    for peak in PEAK_HOURS.iter() {
                                        div { key: "{peak.area}",
                                            div { class: "health-caption",
                                                span { "{peak.area}" }
                                                span { class: "staff-list-title", "{peak.windows}" }
                                            }
                                            Progress { value: peak.load, tone: ProgressTone::Warning }
                                        }
                                    }
                                }
                            }
                        }
                        Card {
                            CardHeader {
                                CardTitle { "Trip Duration by Location" }
                                CardDescription { "Average ride time by area" }
                            }
                            CardContent {
                                BarChart {
                                    labels: labels(TRIP_DURATION),
                                    series: vec![ChartSeries::new("Minutes", values(TRIP_DURATION), ChartTone::Primary)],
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tab_shows_revenue() {
        assert_eq!(AnalyticsTab::from_key("users"), AnalyticsTab::Users);
        assert_eq!(AnalyticsTab::from_key(""), AnalyticsTab::Revenue);
    }

    #[test]
    fn slices_keep_series_order() {
        let s = slices(REVENUE_SOURCES);
        assert_eq!(s[0], ("Regular Rides".to_string(), 65.0));
        assert_eq!(s.len(), 3);
    }
}
