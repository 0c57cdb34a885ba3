use std::str::FromStr;

use jiff::civil::DateTime;

use crate::date_helper::add_days;
use crate::error::{RecurrenceError, Result};
use crate::types::Direction;

/// Every `n` days, keeping the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyInterval {
    days: u32,
}

impl DailyInterval {
    pub fn new(days: u32) -> Result<Self> {
        let mut interval = Self { days: 1 };
        interval.set_days(days)?;
        Ok(interval)
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn set_days(&mut self, days: u32) -> Result<&mut Self> {
        if days < 1 {
            return Err(RecurrenceError::invalid_argument(
                "number of days must be at least 1",
            ));
        }
        self.days = days;
        Ok(self)
    }

    pub fn find_next_occurrence(&self, current: DateTime, direction: Direction) -> Result<DateTime> {
        add_days(current, direction.sign() * self.days as i64)
    }
}

impl Default for DailyInterval {
    fn default() -> Self {
        Self { days: 1 }
    }
}

/// Accepts numeric strings; fractional values are truncated to whole days.
impl FromStr for DailyInterval {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s.trim().parse().map_err(|_| {
            RecurrenceError::invalid_argument(format!("number of days must be numeric, got '{s}'"))
        })?;
        if !value.is_finite() || value < 1.0 || value > u32::MAX as f64 {
            return Err(RecurrenceError::invalid_argument(format!(
                "number of days must be at least 1, got '{s}'"
            )));
        }
        Self::new(value.trunc() as u32)
    }
}
