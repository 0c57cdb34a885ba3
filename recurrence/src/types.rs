//! Value types shared by every rule: weekdays, ordinals, direction and day sets.

use std::str::FromStr;

use crate::error::{RecurrenceError, Result};

/// Day of the week, numbered Sunday=0 through Saturday=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All seven days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Capitalised English name, e.g. `"Tuesday"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Self::Sunday => "sun",
            Self::Monday => "mon",
            Self::Tuesday => "tue",
            Self::Wednesday => "wed",
            Self::Thursday => "thu",
            Self::Friday => "fri",
            Self::Saturday => "sat",
        }
    }

    pub fn to_jiff(self) -> jiff::civil::Weekday {
        match self {
            Self::Sunday => jiff::civil::Weekday::Sunday,
            Self::Monday => jiff::civil::Weekday::Monday,
            Self::Tuesday => jiff::civil::Weekday::Tuesday,
            Self::Wednesday => jiff::civil::Weekday::Wednesday,
            Self::Thursday => jiff::civil::Weekday::Thursday,
            Self::Friday => jiff::civil::Weekday::Friday,
            Self::Saturday => jiff::civil::Weekday::Saturday,
        }
    }

    pub fn from_jiff(wd: jiff::civil::Weekday) -> Self {
        match wd {
            jiff::civil::Weekday::Sunday => Self::Sunday,
            jiff::civil::Weekday::Monday => Self::Monday,
            jiff::civil::Weekday::Tuesday => Self::Tuesday,
            jiff::civil::Weekday::Wednesday => Self::Wednesday,
            jiff::civil::Weekday::Thursday => Self::Thursday,
            jiff::civil::Weekday::Friday => Self::Friday,
            jiff::civil::Weekday::Saturday => Self::Saturday,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = RecurrenceError;

    fn try_from(n: u8) -> Result<Self> {
        Self::from_number(n).ok_or_else(|| {
            RecurrenceError::invalid_argument(format!("day of week must be 0..=6, got {n}"))
        })
    }
}

impl FromStr for Weekday {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sunday" | "sun" => Ok(Self::Sunday),
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            _ => Err(RecurrenceError::invalid_argument(format!(
                "unknown day of week '{s}'"
            ))),
        }
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Ordinal {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Last,
}

impl Ordinal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Fifth => "fifth",
            Self::Last => "last",
        }
    }

    /// 1-based position, or `None` for [`Ordinal::Last`].
    pub fn nth(self) -> Option<u8> {
        match self {
            Self::First => Some(1),
            Self::Second => Some(2),
            Self::Third => Some(3),
            Self::Fourth => Some(4),
            Self::Fifth => Some(5),
            Self::Last => None,
        }
    }
}

impl FromStr for Ordinal {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" | "1st" => Ok(Self::First),
            "second" | "2nd" => Ok(Self::Second),
            "third" | "3rd" => Ok(Self::Third),
            "fourth" | "4th" => Ok(Self::Fourth),
            "fifth" | "5th" => Ok(Self::Fifth),
            "last" => Ok(Self::Last),
            _ => Err(RecurrenceError::invalid_argument(format!(
                "unknown frequency '{s}'"
            ))),
        }
    }
}

/// Travel direction of a search: into the future or into the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Forwards,
    Backwards,
}

impl Direction {
    /// `1` going forwards, `-1` going backwards.
    pub fn sign(self) -> i64 {
        match self {
            Self::Forwards => 1,
            Self::Backwards => -1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Forwards => Self::Backwards,
            Self::Backwards => Self::Forwards,
        }
    }

    /// Whether `candidate` lies strictly past `reference` in this direction.
    pub fn is_beyond<T: Ord>(self, candidate: &T, reference: &T) -> bool {
        match self {
            Self::Forwards => candidate > reference,
            Self::Backwards => candidate < reference,
        }
    }
}

/// A de-duplicated set of weekdays, iterated in ascending order (Sunday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Weekday>", into = "Vec<Weekday>")
)]
pub struct DaySet {
    bits: u8,
}

impl DaySet {
    /// Build a non-empty set. Duplicates collapse.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Result<Self> {
        let set = Self::new_allow_empty(days);
        if set.is_empty() {
            return Err(RecurrenceError::invalid_argument(
                "you must pass at least one valid day of the week",
            ));
        }
        Ok(set)
    }

    /// Build a set that may be empty.
    pub fn new_allow_empty(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut set = Self::empty();
        for day in days {
            set.insert(day);
        }
        set
    }

    /// Build a non-empty set from 0..=6 day numbers.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        let days = numbers
            .iter()
            .map(|&n| Weekday::try_from(n))
            .collect::<Result<Vec<_>>>()?;
        Self::new(days)
    }

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn every_day() -> Self {
        Self::new_allow_empty(Weekday::ALL)
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self::new_allow_empty([
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ])
    }

    pub fn weekend() -> Self {
        Self::new_allow_empty([Weekday::Saturday, Weekday::Sunday])
    }

    /// Add a day; returns `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let mask = 1 << day.number();
        let added = self.bits & mask == 0;
        self.bits |= mask;
        added
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.bits & (1 << day.number()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Days in ascending order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|d| self.contains(*d))
    }

    /// Days ordered for a search: ascending forwards, descending backwards.
    pub fn ordered(&self, direction: Direction) -> Vec<Weekday> {
        match direction {
            Direction::Forwards => self.iter().collect(),
            Direction::Backwards => self.iter().rev().collect(),
        }
    }

    pub fn to_vec(&self) -> Vec<Weekday> {
        self.iter().collect()
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new_allow_empty(iter)
    }
}

impl From<Weekday> for DaySet {
    fn from(day: Weekday) -> Self {
        Self::new_allow_empty([day])
    }
}

impl From<Vec<Weekday>> for DaySet {
    fn from(days: Vec<Weekday>) -> Self {
        Self::new_allow_empty(days)
    }
}

impl From<DaySet> for Vec<Weekday> {
    fn from(set: DaySet) -> Self {
        set.to_vec()
    }
}
