use std::str::FromStr;

use jiff::civil::DateTime;

use crate::date_helper::add_minutes;
use crate::error::{RecurrenceError, Result};
use crate::types::Direction;

/// Every `n` hours, where `n` may be fractional.
///
/// The step is applied in whole minutes: `trunc(hours * 60)`. Anything below
/// a minute is dropped, so 2.8888 hours advances by 2h53m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyInterval {
    hours: f64,
}

impl HourlyInterval {
    pub fn new(hours: f64) -> Result<Self> {
        let mut interval = Self { hours: 1.0 };
        interval.set_hours(hours)?;
        Ok(interval)
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn set_hours(&mut self, hours: f64) -> Result<&mut Self> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(RecurrenceError::invalid_argument(format!(
                "number of hours must be a number greater than 0, got {hours}"
            )));
        }
        if (hours * 60.0).trunc() < 1.0 {
            return Err(RecurrenceError::invalid_argument(format!(
                "number of hours must amount to at least one minute, got {hours}"
            )));
        }
        self.hours = hours;
        Ok(self)
    }

    /// The step in whole minutes.
    pub fn minutes(&self) -> i64 {
        (self.hours * 60.0).trunc() as i64
    }

    pub fn find_next_occurrence(&self, current: DateTime, direction: Direction) -> Result<DateTime> {
        add_minutes(current, direction.sign() * self.minutes())
    }
}

impl FromStr for HourlyInterval {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        let hours: f64 = s.trim().parse().map_err(|_| {
            RecurrenceError::invalid_argument(format!("number of hours must be numeric, got '{s}'"))
        })?;
        Self::new(hours)
    }
}
