use chrono::{DateTime, Months, NaiveDate, NaiveDateTime};

/// Textual layout used when printing time values.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses an ISO-8601 date or date-time (UTC) into seconds since the epoch.
///
/// Accepted forms are `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` and
/// `YYYY-MM-DDTHH:MM:SS`.
///
/// ## Example
/// ```
/// use arden_ops::util::time::parse_time;
///
/// assert_eq!(parse_time("1970-01-02"), Some(86_400));
/// assert_eq!(parse_time("1970-01-01T00:01:05"), Some(65));
/// assert_eq!(parse_time("1970-13-01"), None);
/// ```
#[must_use]
pub fn parse_time(text: &str) -> Option<i64> {
    for format in ACCEPTED_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(text, format) {
            return Some(stamp.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
                                               .and_then(|date| date.and_hms_opt(0, 0, 0))
                                               .map(|stamp| stamp.and_utc().timestamp())
}

/// Formats seconds since the epoch as `YYYY-MM-DDTHH:MM:SS` (UTC).
///
/// Stamps outside the representable calendar range fall back to the raw
/// number of seconds.
#[must_use]
pub fn format_time(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0).map_or_else(|| seconds.to_string(),
                                                     |stamp| stamp.format(TIME_FORMAT).to_string())
}

/// Shifts a time stamp by a whole number of calendar months.
///
/// The day of month is clamped to the length of the target month, so
/// January 31st plus one month is the last day of February.
///
/// ## Example
/// ```
/// use arden_ops::util::time::{add_months, parse_time};
///
/// let start = parse_time("2023-01-31").unwrap();
/// let end = parse_time("2023-02-28").unwrap();
/// assert_eq!(add_months(start, 1), Some(end));
/// assert_eq!(add_months(end, -1), parse_time("2023-01-28"));
/// ```
#[must_use]
pub fn add_months(seconds: i64, months: i64) -> Option<i64> {
    let stamp = DateTime::from_timestamp(seconds, 0)?;
    let amount = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let shifted = if months >= 0 {
        stamp.checked_add_months(amount)?
    } else {
        stamp.checked_sub_months(amount)?
    };
    Some(shifted.timestamp())
}
