use std::fmt;

use crate::interval::{DailyInterval, HourlyInterval, Interval, MonthlyInterval, WeeklyInterval};
use crate::types::{DaySet, Direction, Ordinal, Weekday};

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forwards => f.write_str("forwards"),
            Direction::Backwards => f.write_str("backwards"),
        }
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no days");
        }
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.days() {
            1 => f.write_str("every day"),
            n => write!(f, "every {n} days"),
        }
    }
}

impl fmt::Display for HourlyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        if hours == 1.0 {
            f.write_str("every hour")
        } else {
            write!(f, "every {hours} hours")
        }
    }
}

impl fmt::Display for WeeklyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {}", self.days())?;
        write_every(f, self.weeks(), "week", "weeks")
    }
}

impl fmt::Display for MonthlyInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frequency() {
            Some(frequency) if !self.days().is_empty() => {
                write!(f, "the {frequency} {}", self.days())?;
                write_every(f, self.months(), "month", "months")
            }
            _ => match self.original_day_of_month() {
                Some(day) => {
                    write!(f, "day {day}")?;
                    write_every(f, self.months(), "month", "months")
                }
                None if self.months() == 1 => f.write_str("every month"),
                None => write!(f, "every {} months", self.months()),
            },
        }
    }
}

fn write_every(f: &mut fmt::Formatter<'_>, n: u32, singular: &str, plural: &str) -> fmt::Result {
    if n == 1 {
        write!(f, " of every {singular}")
    } else {
        write!(f, " of every {n} {plural}")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Daily(rule) => rule.fmt(f),
            Interval::Hourly(rule) => rule.fmt(f),
            Interval::Weekly(rule) => rule.fmt(f),
            Interval::Monthly(rule) => rule.fmt(f),
        }
    }
}
