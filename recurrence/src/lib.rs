//! recurrence: recurring calendar occurrences.
//!
//! Daily, hourly, weekly and monthly rules driven from a start datetime to
//! a bound, forwards or backwards in time, with dates to skip. Occurrences are
//! generated lazily and cached.
//!
//! # Examples
//!
//! ```
//! use jiff::civil::date;
//! use recurrence::{Ordinal, MonthlyInterval, RecurrenceIterator, Weekday};
//!
//! let rule = MonthlyInterval::every(Ordinal::Second, Weekday::Tuesday);
//! println!("{rule}"); // "the second Tuesday of every month"
//!
//! let mut meetings = RecurrenceIterator::new(date(2012, 4, 1).at(18, 0, 0, 0), rule, 3u32).unwrap();
//! let dates: Vec<_> = meetings.iter().map(|d| d.unwrap().date()).collect();
//! assert_eq!(dates, vec![date(2012, 4, 10), date(2012, 5, 8), date(2012, 6, 12)]);
//! ```

pub mod date_helper;
pub mod display;
pub mod error;
pub mod input;
pub mod interval;
pub mod iterator;
pub mod occurrences;
pub mod types;

pub use error::{RecurrenceError, Result};
pub use input::DateTimeInput;
pub use interval::{DailyInterval, HourlyInterval, Interval, MonthlyInterval, WeeklyInterval};
pub use iterator::{EndCondition, Iter, RecurrenceIterator, DEFAULT_MAX_OCCURRENCES};
pub use occurrences::Occurrences;
pub use types::{DaySet, Direction, Ordinal, Weekday};

pub use jiff::civil::DateTime;
