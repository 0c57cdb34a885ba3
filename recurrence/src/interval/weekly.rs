use jiff::civil::DateTime;

use crate::date_helper::{add_days, day_of_week};
use crate::error::{RecurrenceError, Result};
use crate::types::{DaySet, Direction, Weekday};

/// Windows searched before giving up. The second window is shifted by at
/// least a week, so every day in it lies strictly beyond the current one.
const MAX_WEEK_WINDOWS: usize = 2;

/// On a set of weekdays, every `n` weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyInterval {
    days: DaySet,
    weeks: u32,
}

impl WeeklyInterval {
    pub fn new(days: impl Into<DaySet>, weeks: u32) -> Result<Self> {
        let mut interval = Self {
            days: DaySet::every_day(),
            weeks: 1,
        };
        interval.set_days(days)?;
        interval.set_weeks(weeks)?;
        Ok(interval)
    }

    /// Every week on a single day. Extend with [`and_every`](Self::and_every).
    pub fn every(day: Weekday) -> Self {
        Self {
            days: DaySet::from(day),
            weeks: 1,
        }
    }

    pub fn and_every(mut self, day: Weekday) -> Self {
        self.days.insert(day);
        self
    }

    pub fn of_every_week(mut self, weeks: u32) -> Result<Self> {
        self.set_weeks(weeks)?;
        Ok(self)
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn weeks(&self) -> u32 {
        self.weeks
    }

    pub fn set_days(&mut self, days: impl Into<DaySet>) -> Result<&mut Self> {
        let days = days.into();
        if days.is_empty() {
            return Err(RecurrenceError::invalid_argument(
                "you must pass valid days of the week to the interval",
            ));
        }
        self.days = days;
        Ok(self)
    }

    pub fn set_weeks(&mut self, weeks: u32) -> Result<&mut Self> {
        if weeks < 1 {
            return Err(RecurrenceError::invalid_argument(
                "number of weeks must be at least 1",
            ));
        }
        self.weeks = weeks;
        Ok(self)
    }

    /// Next matching day strictly beyond `current`, same time of day.
    ///
    /// Each window is one week of candidate days, expressed as offsets from
    /// `current`'s weekday. When no candidate in a window lies ahead, the
    /// window shifts by `weeks` whole weeks.
    pub fn find_next_occurrence(&self, current: DateTime, direction: Direction) -> Result<DateTime> {
        let cur = day_of_week(current) as i64;
        let ordered = self.days.ordered(direction);
        let window = 7 * self.weeks as i64;

        let mut offset = 0i64;
        for _ in 0..MAX_WEEK_WINDOWS {
            for day in &ordered {
                let target = day.number() as i64 + direction.sign() * offset;
                let ahead = match direction {
                    Direction::Forwards => cur <= target,
                    Direction::Backwards => cur >= target,
                };
                if !ahead {
                    continue;
                }
                let found = add_days(current, direction.sign() * (target - cur).abs())?;
                if direction.is_beyond(&found, &current) {
                    return Ok(found);
                }
            }
            offset += window;
        }

        Err(RecurrenceError::internal(format!(
            "no weekly occurrence found within {MAX_WEEK_WINDOWS} windows of {current}"
        )))
    }
}
