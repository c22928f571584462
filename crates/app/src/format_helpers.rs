//! Shared formatting utilities for the UI layer.
//!
//! Fixture dates are plain `YYYY-MM-DD` strings; these helpers turn them
//! and the rupee/dollar amounts into display text.

use chrono::NaiveDate;

/// Format a `YYYY-MM-DD` date as "Apr 7, 2025".
///
/// Returns the input unchanged if it doesn't parse.
pub fn format_date_human(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// "Apr 10, 2025 at 14:30" for a scheduled ride.
pub fn format_schedule(date_str: &str, time: &str) -> String {
    format!("{} at {}", format_date_human(date_str), time)
}

/// Rupee price with two decimals ("₹950.00").
pub fn format_rupees(amount: u32) -> String {
    format!("₹{amount}.00")
}

/// Star rating with one decimal ("4.9").
pub fn format_rating(rating: f32) -> String {
    format!("{rating:.1}")
}

/// Today's date as `YYYY-MM-DD`, the earliest selectable booking date.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn human_dates_drop_leading_zero() {
        assert_eq!(format_date_human("2025-04-07"), "Apr 7, 2025");
        assert_eq!(format_date_human("2025-12-25"), "Dec 25, 2025");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date_human("Today, 2:30 PM"), "Today, 2:30 PM");
        assert_eq!(format_date_human("2025-13-01"), "2025-13-01");
    }

    #[test]
    fn schedule_joins_date_and_time() {
        assert_eq!(format_schedule("2025-04-10", "14:30"), "Apr 10, 2025 at 14:30");
    }

    #[test]
    fn rupees_and_ratings() {
        assert_eq!(format_rupees(1049), "₹1049.00");
        assert_eq!(format_rating(4.8), "4.8");
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
