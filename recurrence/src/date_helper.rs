//! Small calendar helpers on top of jiff civil datetimes.
//!
//! Civil datetimes carry no zone. Wherever an epoch timestamp is needed they
//! are read as UTC, so equality of two values is equality of their instants.

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::{Span, Timestamp};

use crate::error::{RecurrenceError, Result};
use crate::types::{Ordinal, Weekday};

/// Day of the week as 0..=6, Sunday=0.
pub fn day_of_week(dt: DateTime) -> u8 {
    dt.weekday().to_sunday_zero_offset() as u8
}

pub fn weekday(dt: DateTime) -> Weekday {
    Weekday::from_jiff(dt.weekday())
}

/// English name of a 0..=6 day number.
pub fn weekday_name(day: u8) -> Result<&'static str> {
    Weekday::try_from(day).map(Weekday::name)
}

/// `target`'s date with `source`'s time of day.
pub fn copy_time_of_day(target: DateTime, source: DateTime) -> DateTime {
    target.date().to_datetime(source.time())
}

/// Drop everything below whole seconds.
pub fn truncate_to_second(dt: DateTime) -> DateTime {
    let t = dt.time();
    dt.date()
        .to_datetime(jiff::civil::time(t.hour(), t.minute(), t.second(), 0))
}

pub fn to_timestamp(dt: DateTime) -> Result<Timestamp> {
    Ok(dt.to_zoned(TimeZone::UTC)?.timestamp())
}

pub fn from_epoch_seconds(seconds: i64) -> Result<DateTime> {
    let ts = Timestamp::from_second(seconds).map_err(|e| {
        RecurrenceError::invalid_argument(format!("timestamp {seconds} out of range: {e}"))
    })?;
    Ok(ts.to_zoned(TimeZone::UTC).datetime())
}

/// `dt` moved by `days` whole days, sign included.
pub fn add_days(dt: DateTime, days: i64) -> Result<DateTime> {
    Ok(dt.checked_add(Span::new().try_days(days)?)?)
}

pub fn add_minutes(dt: DateTime, minutes: i64) -> Result<DateTime> {
    Ok(dt.checked_add(Span::new().try_minutes(minutes)?)?)
}

/// `dt` moved by `months`. jiff clamps the day to the target month's length.
pub fn add_months(dt: DateTime, months: i64) -> Result<DateTime> {
    Ok(dt.checked_add(Span::new().try_months(months)?)?)
}

/// The `ordinal` `weekday` of the month containing `month`, if that month has one.
pub fn nth_weekday_of_month(month: Date, weekday: Weekday, ordinal: Ordinal) -> Option<Date> {
    let nth = ordinal.nth().map_or(-1, |n| n as i8);
    month.nth_weekday_of_month(nth, weekday.to_jiff()).ok()
}

/// Index of a month on a continuous scale, for comparing months across years.
pub fn month_index(date: Date) -> i64 {
    date.year() as i64 * 12 + date.month() as i64
}
