//! Birth date parsing, formatting, and age computation.
//!
//! Wire payloads carry dates as `yyyy-MM-dd` strings; the domain works with
//! [`chrono::NaiveDate`]. Conversion in both directions happens here so the
//! format lives in exactly one place.

use chrono::{Datelike, NaiveDate};

/// Fixed wire format for dates, `yyyy-MM-dd`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while parsing a wire-format date.
#[derive(Debug, thiserror::Error)]
pub enum DateParseError {
    #[error("Invalid date format. Use: yyyy-MM-dd")]
    InvalidFormat,
}

/// Parses a `yyyy-MM-dd` date string into a [`NaiveDate`].
///
/// # Errors
///
/// Returns [`DateParseError::InvalidFormat`] for any input that does not
/// parse under the fixed format, including out-of-range calendar dates
/// such as `2021-02-30`.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| DateParseError::InvalidFormat)
}

/// Formats a [`NaiveDate`] back into its `yyyy-MM-dd` wire representation.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Age in whole years on the proleptic Gregorian calendar.
///
/// The year difference is reduced by one when the birthday has not yet
/// occurred in `on`'s year. A Feb 29 birthday therefore counts its
/// anniversary as Mar 1 in non-leap years.
pub fn age_in_years(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        assert_eq!(parse_date("2000-01-11").unwrap(), date(2000, 1, 11));
    }

    #[test]
    fn test_parse_rejects_wrong_separator() {
        assert!(parse_date("2000/01/11").is_err());
    }

    #[test]
    fn test_parse_rejects_day_month_order() {
        assert!(parse_date("11-01-2000").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!(parse_date("2021-02-30").is_err());
        assert!(parse_date("2021-13-01").is_err());
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert_eq!(parse_date("2004-02-29").unwrap(), date(2004, 2, 29));
        assert!(parse_date("2005-02-29").is_err());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(1999, 1, 2)), "1999-01-02");
    }

    #[test]
    fn test_round_trip() {
        for s in ["2000-01-11", "1970-12-31", "2004-02-29", "0001-01-01"] {
            assert_eq!(format_date(parse_date(s).unwrap()), s);
        }
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(age_in_years(date(1990, 3, 15), date(2020, 3, 15)), 30);
        assert_eq!(age_in_years(date(1990, 3, 15), date(2020, 6, 1)), 30);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(age_in_years(date(1990, 3, 15), date(2020, 3, 14)), 29);
        assert_eq!(age_in_years(date(1990, 3, 15), date(2020, 1, 1)), 29);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        // Anniversary of a Feb 29 birth falls on Mar 1 in common years.
        assert_eq!(age_in_years(date(2004, 2, 29), date(2022, 2, 28)), 17);
        assert_eq!(age_in_years(date(2004, 2, 29), date(2022, 3, 1)), 18);
        assert_eq!(age_in_years(date(2004, 2, 29), date(2024, 2, 29)), 20);
    }

    #[test]
    fn test_age_same_day_is_zero() {
        assert_eq!(age_in_years(date(2020, 5, 5), date(2020, 5, 5)), 0);
    }
}
