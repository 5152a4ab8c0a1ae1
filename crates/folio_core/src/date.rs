use chrono::{DateTime, NaiveDate, SecondsFormat};

/// Parse a post date.
/// Supports: "YYYY-MM-DD" and RFC 3339 timestamps (the date part is kept).
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Format a date for display, e.g. "January 15, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date for structured data, e.g. "2024-01-15T00:00:00.000Z"
pub fn format_date_iso(date: &NaiveDate) -> String {
    midnight_utc(date).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Format a date for RSS `pubDate`, e.g. "Mon, 15 Jan 2024 00:00:00 +0000"
pub fn format_date_rfc2822(date: &NaiveDate) -> String {
    midnight_utc(date).to_rfc2822()
}

fn midnight_utc(date: &NaiveDate) -> DateTime<chrono::Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15"), Some(jan_15()));
        assert_eq!(parse_date(" 2024-01-15 "), Some(jan_15()));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(jan_15()));

        assert!(parse_date("invalid").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&jan_15()), "January 15, 2024");
        let first = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
        assert_eq!(format_date(&first), "March 1, 2023");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date_iso(&jan_15()), "2024-01-15T00:00:00.000Z");
    }

    #[test]
    fn test_format_date_rfc2822() {
        assert_eq!(format_date_rfc2822(&jan_15()), "Mon, 15 Jan 2024 00:00:00 +0000");
    }
}
