//! Accepted forms of a date/time argument.

use jiff::civil::{Date, DateTime};
use jiff::Timestamp;

use crate::date_helper::from_epoch_seconds;
use crate::error::{RecurrenceError, Result};

/// A date/time given as a typed value, epoch seconds or a string.
///
/// Strings are parsed by jiff and may be a civil datetime
/// (`2016-12-12T09:30`, `2016-12-12 09:30:00`), a bare date (`2016-12-12`,
/// read as midnight) or an RFC 3339 instant (`2016-12-12T09:30:00Z`, read in
/// UTC). Epoch seconds and instants are converted to UTC civil time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeInput {
    DateTime(DateTime),
    Timestamp(i64),
    Text(String),
}

impl DateTimeInput {
    pub fn resolve(&self) -> Result<DateTime> {
        match self {
            Self::DateTime(dt) => Ok(*dt),
            Self::Timestamp(seconds) => from_epoch_seconds(*seconds),
            Self::Text(text) => parse_datetime(text),
        }
    }
}

fn parse_datetime(text: &str) -> Result<DateTime> {
    let text = text.trim();
    // Instants first: civil parsing would silently drop an offset.
    if let Ok(ts) = text.parse::<Timestamp>() {
        return Ok(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime());
    }
    if let Ok(dt) = text.parse::<DateTime>() {
        return Ok(dt);
    }
    if let Ok(date) = text.parse::<Date>() {
        return Ok(date.to_datetime(jiff::civil::Time::midnight()));
    }
    Err(RecurrenceError::invalid_argument(format!(
        "'{text}' is not a valid date or datetime"
    )))
}

impl From<DateTime> for DateTimeInput {
    fn from(dt: DateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Date> for DateTimeInput {
    fn from(date: Date) -> Self {
        Self::DateTime(date.to_datetime(jiff::civil::Time::midnight()))
    }
}

impl From<Timestamp> for DateTimeInput {
    fn from(ts: Timestamp) -> Self {
        Self::DateTime(ts.to_zoned(jiff::tz::TimeZone::UTC).datetime())
    }
}

impl From<i64> for DateTimeInput {
    fn from(seconds: i64) -> Self {
        Self::Timestamp(seconds)
    }
}

impl From<&str> for DateTimeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateTimeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&DateTime> for DateTimeInput {
    fn from(dt: &DateTime) -> Self {
        Self::DateTime(*dt)
    }
}
