//! Lenient date parsing for client-supplied dates.
//!
//! Clients send dates in whatever shape their forms produce, so several
//! common layouts are accepted. Date-only inputs resolve to midnight UTC,
//! which keeps `2023-01-15` rendering as `Sun Jan 15 2023`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Raised when no supported layout matches the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised date: {input}")]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

const DATE_LAYOUTS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%a %b %d %Y",
    "%b %d %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

const DATE_TIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a calendar date or timestamp.
///
/// RFC 3339 and RFC 2822 timestamps keep their instant; naive timestamps and
/// bare dates are interpreted as UTC.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::parse_calendar_date;
///
/// let date = parse_calendar_date("2023-01-15").expect("ISO date");
/// assert_eq!(date.to_rfc3339(), "2023-01-15T00:00:00+00:00");
/// assert!(parse_calendar_date("next tuesday").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let trimmed = input.trim();

    if let Ok(timestamp) =
        DateTime::parse_from_rfc3339(trimmed).or_else(|_| DateTime::parse_from_rfc2822(trimmed))
    {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Some(naive) = DATE_TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
    {
        return Ok(naive.and_utc());
    }

    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DateParseError {
            input: input.to_owned(),
        })
}
