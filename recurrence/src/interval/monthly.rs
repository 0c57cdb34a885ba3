use jiff::civil::{Date, DateTime, Time};
use jiff::Span;

use crate::date_helper::{add_months, copy_time_of_day, month_index, nth_weekday_of_month, weekday};
use crate::error::{RecurrenceError, Result};
use crate::types::{DaySet, Direction, Ordinal, Weekday};

/// Month windows searched before giving up on an nth-weekday rule.
///
/// The rarest case is a fifth weekday in February under a twelve month
/// step, which recurs within a few decades.
const MAX_MONTH_WINDOWS: usize = 600;

/// Every `n` months, either on the same day of the month or on the
/// `frequency` occurrence of one of `days` ("the second Tuesday").
///
/// In day-of-month mode the day is taken from the first datetime the rule is
/// applied to and stays pinned from then on, so a rule started on the 30th
/// lands on Feb 29 and then returns to Mar 30.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyInterval {
    days: DaySet,
    frequency: Option<Ordinal>,
    months: u32,
    original_day_of_month: Option<u8>,
}

impl MonthlyInterval {
    pub fn new(frequency: Option<Ordinal>, days: impl Into<DaySet>, months: u32) -> Result<Self> {
        let mut interval = Self::every_month();
        interval.set_frequency(frequency);
        interval.set_days(days);
        interval.set_months(months)?;
        Ok(interval)
    }

    /// Same day of the month, every month.
    pub fn every_month() -> Self {
        Self {
            days: DaySet::empty(),
            frequency: None,
            months: 1,
            original_day_of_month: None,
        }
    }

    /// The `frequency` `day` of every month.
    pub fn every(frequency: Ordinal, day: Weekday) -> Self {
        Self {
            days: DaySet::from(day),
            frequency: Some(frequency),
            ..Self::every_month()
        }
    }

    pub fn and_every(mut self, day: Weekday) -> Self {
        self.days.insert(day);
        self
    }

    pub fn of_every_month(mut self, months: u32) -> Result<Self> {
        self.set_months(months)?;
        Ok(self)
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn frequency(&self) -> Option<Ordinal> {
        self.frequency
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Day of the month captured on first use, in day-of-month mode.
    pub fn original_day_of_month(&self) -> Option<u8> {
        self.original_day_of_month
    }

    /// Forget the pinned day of the month so the next datetime pins it again.
    pub fn clear_original_day_of_month(&mut self) -> &mut Self {
        self.original_day_of_month = None;
        self
    }

    pub fn set_days(&mut self, days: impl Into<DaySet>) -> &mut Self {
        self.days = days.into();
        self
    }

    pub fn set_frequency(&mut self, frequency: Option<Ordinal>) -> &mut Self {
        self.frequency = frequency;
        self
    }

    pub fn set_months(&mut self, months: u32) -> Result<&mut Self> {
        if !(1..=12).contains(&months) {
            return Err(RecurrenceError::invalid_argument(format!(
                "number of months must be between 1 and 12, got {months}"
            )));
        }
        self.months = months;
        Ok(self)
    }

    /// Days and frequency must be configured together.
    pub fn validate(&self) -> Result<()> {
        if !self.days.is_empty() && self.frequency.is_none() {
            return Err(RecurrenceError::invalid_argument(
                "a frequency must be set when days of the week are given",
            ));
        }
        Ok(())
    }

    pub fn find_next_occurrence(
        &mut self,
        current: DateTime,
        direction: Direction,
    ) -> Result<DateTime> {
        self.validate()?;
        match self.frequency {
            Some(frequency) if !self.days.is_empty() => {
                self.find_nth_weekday(current, direction, frequency)
            }
            _ => self.step_day_of_month(current, direction),
        }
    }

    fn step(&self, direction: Direction) -> i64 {
        direction.sign() * self.months as i64
    }

    fn step_day_of_month(&mut self, current: DateTime, direction: Direction) -> Result<DateTime> {
        let original = *self
            .original_day_of_month
            .get_or_insert(current.day() as u8);

        let target_month = add_months(current.first_of_month(), self.step(direction))?;
        let day = (original as i8).min(target_month.days_in_month());
        Ok(target_month.with().day(day).build()?)
    }

    fn find_nth_weekday(
        &self,
        current: DateTime,
        direction: Direction,
        frequency: Ordinal,
    ) -> Result<DateTime> {
        let mut month = current.date().first_of_month();
        for _ in 0..MAX_MONTH_WINDOWS {
            if let Some(found) = self.closest_in_month(month, current, direction, frequency) {
                return Ok(found);
            }
            month = month.checked_add(Span::new().try_months(self.step(direction))?)?;
        }
        Err(RecurrenceError::internal(format!(
            "no {} {} found within {MAX_MONTH_WINDOWS} month windows of {current}",
            frequency.as_str(),
            self.days,
        )))
    }

    /// The candidate in `month` nearest to `current` while strictly beyond it.
    fn closest_in_month(
        &self,
        month: Date,
        current: DateTime,
        direction: Direction,
        frequency: Ordinal,
    ) -> Option<DateTime> {
        self.days
            .iter()
            .filter_map(|day| nth_weekday_of_month(month, day, frequency))
            .map(|date| copy_time_of_day(date.to_datetime(Time::midnight()), current))
            .filter(|candidate| self.lands_in(candidate, month))
            .filter(|candidate| direction.is_beyond(candidate, &current))
            .min_by_key(|candidate| candidate.duration_since(current).abs())
    }

    /// Guards against a resolved date spilling into a neighbouring month or
    /// onto a day outside the rule.
    fn lands_in(&self, candidate: &DateTime, month: Date) -> bool {
        month_index(candidate.date()) == month_index(month) && self.days.contains(weekday(*candidate))
    }
}

impl Default for MonthlyInterval {
    fn default() -> Self {
        Self::every_month()
    }
}
