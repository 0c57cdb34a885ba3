//! Recurrence rules.
//!
//! Each rule answers one question: given a datetime and a direction, what is
//! the next datetime the rule produces strictly beyond it? The four rules are
//! joined by [`Interval`], which is what a
//! [`RecurrenceIterator`](crate::RecurrenceIterator) drives.

mod daily;
mod hourly;
mod monthly;
mod weekly;

pub use daily::DailyInterval;
pub use hourly::HourlyInterval;
pub use monthly::MonthlyInterval;
pub use weekly::WeeklyInterval;

use jiff::civil::DateTime;

use crate::error::Result;
use crate::types::Direction;

/// A recurrence rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Interval {
    /// `every 3 days`
    Daily(DailyInterval),
    /// `every 1.5 hours`
    Hourly(HourlyInterval),
    /// `every monday, thursday of every 2 weeks`
    Weekly(WeeklyInterval),
    /// `the second tuesday of every 3 months`, or the same day every month
    Monthly(MonthlyInterval),
}

impl Interval {
    /// Next occurrence strictly beyond `current` in `direction`.
    ///
    /// Takes `&mut self` because a day-of-month rule pins the day of the
    /// first datetime it sees.
    pub fn find_next_occurrence(
        &mut self,
        current: DateTime,
        direction: Direction,
    ) -> Result<DateTime> {
        match self {
            Self::Daily(rule) => rule.find_next_occurrence(current, direction),
            Self::Hourly(rule) => rule.find_next_occurrence(current, direction),
            Self::Weekly(rule) => rule.find_next_occurrence(current, direction),
            Self::Monthly(rule) => rule.find_next_occurrence(current, direction),
        }
    }

    /// Drop state a rule picked up from the datetimes it was applied to.
    pub fn reset_state(&mut self) {
        if let Self::Monthly(rule) = self {
            rule.clear_original_day_of_month();
        }
    }

    /// Check configuration that can only be judged as a whole.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Monthly(rule) => rule.validate(),
            Self::Daily(_) | Self::Hourly(_) | Self::Weekly(_) => Ok(()),
        }
    }
}

impl From<DailyInterval> for Interval {
    fn from(rule: DailyInterval) -> Self {
        Self::Daily(rule)
    }
}

impl From<HourlyInterval> for Interval {
    fn from(rule: HourlyInterval) -> Self {
        Self::Hourly(rule)
    }
}

impl From<WeeklyInterval> for Interval {
    fn from(rule: WeeklyInterval) -> Self {
        Self::Weekly(rule)
    }
}

impl From<MonthlyInterval> for Interval {
    fn from(rule: MonthlyInterval) -> Self {
        Self::Monthly(rule)
    }
}
