/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format a timestamp the way the tables show it: `YYYY-MM-DD HH:MM`.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Human label for a promotion expiry, counted in calendar days.
pub fn expiry_label(expires_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let days = (expires_at.date_naive() - now.date_naive()).num_days();
    if days > 0 {
        format!("{} days left", days)
    } else if days == 0 {
        "Expires today".to_string()
    } else {
        format!("{} days overdue", -days)
    }
}

/// Parse the value of an `<input type="datetime-local">` into UTC.
pub fn parse_local_datetime(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_expiry_label() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 23, 0, 0).unwrap();
        let in_two_days = Utc.with_ymd_and_hms(2024, 3, 17, 1, 0, 0).unwrap();
        assert_eq!(expiry_label(&in_two_days, &now), "2 days left");

        let today = Utc.with_ymd_and_hms(2024, 3, 15, 1, 0, 0).unwrap();
        assert_eq!(expiry_label(&today, &now), "Expires today");

        let yesterday = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
        assert_eq!(expiry_label(&yesterday, &now), "1 days overdue");
    }

    #[test]
    fn test_parse_local_datetime() {
        let parsed = parse_local_datetime("2024-03-15T14:02").unwrap();
        assert_eq!(format_datetime(&parsed), "2024-03-15 14:02");
        assert!(parse_local_datetime("").is_none());
        assert!(parse_local_datetime("not a date").is_none());
    }
}
