/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::NaiveDateTime;

/// Format a timestamp to DD.MM.YYYY for listing badges.
pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%d.%m.%Y").to_string()
}

/// Format a timestamp to HH:MM for chat bubbles.
pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// "Posted 15.03.2026" label; listings without a timestamp fall back to
/// "Posted Recently".
pub fn posted_label(dt: Option<&NaiveDateTime>) -> String {
    match dt {
        Some(dt) => format!("Posted {}", format_date(dt)),
        None => "Posted Recently".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&dt("2026-03-15T14:02:26")), "15.03.2026");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(&dt("2026-03-15T09:05:00")), "09:05");
    }

    #[test]
    fn test_posted_label() {
        assert_eq!(
            posted_label(Some(&dt("2026-01-12T10:15:30"))),
            "Posted 12.01.2026"
        );
        assert_eq!(posted_label(None), "Posted Recently");
    }
}
