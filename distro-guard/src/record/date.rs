//! ISO 8601 date conversion for release rows.

use chrono::NaiveDate;
use thiserror::Error;

/// Marker error for a raw value that is not an ISO 8601 calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("date not in ISO 8601 format")]
pub struct NotIso8601;

/// Converts a date string in ISO 8601 form (`YYYY-MM-DD`) into a calendar
/// date.
///
/// An empty string means "no date set" and converts to `None`. Anything else
/// that is not a valid `YYYY-MM-DD` date is an error; partial dates such as
/// `2021-05` are rejected.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use distro_guard::record::date::convert_date;
///
/// let date = convert_date("2016-04-26").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2016, 4, 26));
/// assert_eq!(convert_date("").unwrap(), None);
/// assert!(convert_date("next tuesday").is_err());
/// ```
pub fn convert_date(raw: &str) -> Result<Option<NaiveDate>, NotIso8601> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| NotIso8601)
}
