//! Time utilities for temporal aggregation
//!
//! Shared helpers for parsing CFPB complaint dates and truncating them to
//! calendar-month keys.

use chrono::NaiveDate;

/// Date formats observed in CFPB complaint exports.
///
/// The bulk CSV download uses ISO dates; older extracts use US-style
/// slash dates. Both are accepted.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a complaint submission date, returning None for blank or
/// unrecognised values.
///
/// # Examples
/// ```
/// use cfpb_complaint_analyser::utils::time::parse_complaint_date;
/// assert!(parse_complaint_date("2023-07-14").is_some());
/// assert!(parse_complaint_date("07/14/2023").is_some());
/// assert!(parse_complaint_date("14 July 2023").is_none());
/// assert!(parse_complaint_date("").is_none());
/// ```
pub fn parse_complaint_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Truncate a date to its calendar-month key ("YYYY-MM").
///
/// Month keys sort lexicographically in chronological order, which the
/// monthly series relies on.
///
/// # Examples
/// ```
/// use cfpb_complaint_analyser::utils::time::month_key;
/// use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2023, 7, 14).unwrap();
/// assert_eq!(month_key(date), "2023-07");
/// ```
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_complaint_date("2023-07-14").unwrap();
        assert_eq!(month_key(date), "2023-07");
    }

    #[test]
    fn test_parse_us_date() {
        let date = parse_complaint_date("07/14/2023").unwrap();
        assert_eq!(month_key(date), "2023-07");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert!(parse_complaint_date("  2023-01-02  ").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_complaint_date("not-a-date").is_none());
        assert!(parse_complaint_date("2023-13-40").is_none());
        assert!(parse_complaint_date("").is_none());
    }

    #[test]
    fn test_month_key_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(month_key(date), "2024-03");
    }

    #[test]
    fn test_month_key_sorts_chronologically() {
        let a = month_key(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        let b = month_key(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(a < b);
    }
}
