//! Invoice date extraction.

use chrono::NaiveDate;

use super::FieldRule;
use super::patterns::{DATE_DMY, DATE_LABEL, DATE_TEXTUAL, DATE_YMD};

/// Matches a date label ("Date", "Invoice Date", "Date Issued") and parses
/// the first date token on that line.
///
/// A label followed by an unparseable token leaves the field empty; a
/// malformed date is never fatal to the overall parse.
pub struct DateRule;

impl FieldRule for DateRule {
    type Output = NaiveDate;

    fn name(&self) -> &'static str {
        "date"
    }

    fn apply(&self, text: &str) -> Option<NaiveDate> {
        let caps = DATE_LABEL.captures(text)?;
        parse_date_token(&caps[1])
    }
}

/// Parse the first date token in a string.
pub fn parse_date_token(s: &str) -> Option<NaiveDate> {
    if let Some(caps) = DATE_YMD.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = DATE_DMY.captures(s) {
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let year = parse_year(&caps[3]);
        // D/M/Y convention, with M/D/Y as fallback when the middle slot
        // is not a valid month (e.g. "01/15/2024").
        return NaiveDate::from_ymd_opt(year, second, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, second));
    }

    if let Some(caps) = DATE_TEXTUAL.captures(s) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: 2000s for 00-50, 1900s for 51-99.
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

fn month_number(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "january" => Some(1),
        "february" => Some(2),
        "march" => Some(3),
        "april" => Some(4),
        "may" => Some(5),
        "june" => Some(6),
        "july" => Some(7),
        "august" => Some(8),
        "september" => Some(9),
        "october" => Some(10),
        "november" => Some(11),
        "december" => Some(12),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_us_slash_date() {
        assert_eq!(
            DateRule.apply("Date: 01/15/2024"),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_day_first_date() {
        assert_eq!(
            DateRule.apply("Date: 15/01/2024"),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_ymd_date() {
        assert_eq!(
            DateRule.apply("Invoice Date: 2024-01-15"),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_dotted_two_digit_year() {
        assert_eq!(DateRule.apply("Date: 15.01.24"), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_textual_date() {
        assert_eq!(
            DateRule.apply("Date Issued: January 15, 2024"),
            Some(date(2024, 1, 15))
        );
    }

    #[test]
    fn test_malformed_date_left_empty() {
        assert_eq!(DateRule.apply("Date: Not-A-Date"), None);
    }

    #[test]
    fn test_unlabeled_date_ignored() {
        assert_eq!(DateRule.apply("shipped 01/15/2024"), None);
    }
}
