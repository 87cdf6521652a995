//! Date and time text for an event timestamp
//!
//! Both formatters are plain functions of the timestamp, the time zone and
//! the locale; nothing is cached between rows.

use super::constants::{DATE_PATTERN, TIME_PATTERN};
use chrono::{DateTime, FixedOffset, Local, Locale, TimeZone, Utc};
use std::fmt;

/// Time zone rows are formatted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The host's zone, with the daylight saving rule in force at each event
    Local,
    /// A constant offset from UTC
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn format_date(&self, time_in_milliseconds: i64, locale: Locale) -> String {
        match self {
            DisplayZone::Local => format_date(time_in_milliseconds, &Local, locale),
            DisplayZone::Fixed(offset) => format_date(time_in_milliseconds, offset, locale),
        }
    }

    pub fn format_time(&self, time_in_milliseconds: i64, locale: Locale) -> String {
        match self {
            DisplayZone::Local => format_time(time_in_milliseconds, &Local, locale),
            DisplayZone::Fixed(offset) => format_time(time_in_milliseconds, offset, locale),
        }
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisplayZone::Local => f.write_str("local time"),
            DisplayZone::Fixed(offset) => write!(f, "UTC{}", offset),
        }
    }
}

/// Convert epoch milliseconds to a zoned date time.
///
/// Timestamps chrono cannot represent clamp to its earliest or latest instant.
fn to_date_time<Tz: TimeZone>(time_in_milliseconds: i64, tz: &Tz) -> DateTime<Tz> {
    let utc = DateTime::<Utc>::from_timestamp_millis(time_in_milliseconds).unwrap_or(
        if time_in_milliseconds < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        },
    );
    utc.with_timezone(tz)
}

/// Calendar date, e.g. "Mar 3, 1984"
pub fn format_date<Tz>(time_in_milliseconds: i64, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    to_date_time(time_in_milliseconds, tz)
        .format_localized(DATE_PATTERN, locale)
        .to_string()
}

/// Clock time, e.g. "4:30 PM"
pub fn format_time<Tz>(time_in_milliseconds: i64, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    to_date_time(time_in_milliseconds, tz)
        .format_localized(TIME_PATTERN, locale)
        .to_string()
}
