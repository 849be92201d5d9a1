/// Utilities for date and time formatting
///
/// The backend sends ISO-8601 strings; the UI shows them as
/// `YYYY-MM-DD HH:MM`.
use chrono::{Duration, NaiveDate};

/// Format ISO datetime string for tables
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let hh_mm: String = time_part.chars().take(5).collect();
        if date_part.len() == 10 && hh_mm.len() == 5 {
            return format!("{} {}", date_part, hh_mm);
        }
    }
    datetime_str.to_string()
}

pub fn format_datetime_opt(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Format a date for display
/// Example: 2024-03-15 -> "15 Mar 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Parse the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in the browser's local timezone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Inclusive range of `days` days ending at `end`.
pub fn last_days(end: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (end - Duration::days((days - 1).max(0)), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_input_date(s).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "2024-12-31 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime_opt(None), "-");
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d("2024-03-05")), "05 Mar 2024");
        assert_eq!(to_input_date(d("2024-03-05")), "2024-03-05");
    }

    #[test]
    fn test_last_days_is_inclusive() {
        assert_eq!(last_days(d("2024-03-31"), 7), (d("2024-03-25"), d("2024-03-31")));
        assert_eq!(last_days(d("2024-03-31"), 1), (d("2024-03-31"), d("2024-03-31")));
    }
}
