use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Format a `YYYY-MM-DD` date for table display, e.g. "May 1, 2024".
/// Unparsable input is shown as-is.
pub fn format_for_display(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_dates() {
        assert!(parse_date("2024-05-01").is_some());
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("05/01/2024").is_none());
    }

    #[test]
    fn formats_dates_for_display() {
        assert_eq!(format_for_display("2024-05-01"), "May 1, 2024");
        assert_eq!(format_for_display("1999-12-31"), "December 31, 1999");
    }

    #[test]
    fn unparsable_dates_pass_through() {
        assert_eq!(format_for_display("someday"), "someday");
        assert_eq!(format_for_display(""), "");
    }
}
