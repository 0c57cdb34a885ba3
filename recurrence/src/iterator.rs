//! The recurrence iterator: a rule driven from a start point up to a bound.
//!
//! Occurrences are generated lazily and cached, so walking the sequence a
//! second time, indexing into it or counting it never repeats work. Bounds
//! can be raised after the sequence has been partly consumed and generation
//! resumes from the last cached occurrence.

use std::collections::BTreeSet;
use std::iter::FusedIterator;

use jiff::civil::DateTime;
use tracing::{debug, trace};

use crate::date_helper::truncate_to_second;
use crate::error::{RecurrenceError, Result};
use crate::input::DateTimeInput;
use crate::interval::Interval;
use crate::occurrences::Occurrences;
use crate::types::Direction;

/// Ceiling on occurrences unless raised with
/// [`set_max_occurrences`](RecurrenceIterator::set_max_occurrences).
pub const DEFAULT_MAX_OCCURRENCES: u32 = 100;

/// Consecutive skipped candidates tolerated before generation gives up.
const MAX_SKIPPED_CANDIDATES: usize = 10_000;

/// When a sequence stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCondition {
    /// After this many occurrences.
    Count(u32),
    /// At the last occurrence not beyond this datetime.
    Until(DateTime),
}

impl EndCondition {
    /// An `Until` bound from any accepted date/time form.
    pub fn until(input: impl Into<DateTimeInput>) -> Result<Self> {
        Ok(Self::Until(input.into().resolve()?))
    }
}

impl From<u32> for EndCondition {
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl From<DateTime> for EndCondition {
    fn from(until: DateTime) -> Self {
        Self::Until(until)
    }
}

/// Drives an [`Interval`] from a start point to produce a bounded sequence.
///
/// The first occurrence is the rule applied to `start`; `start` itself is
/// never part of the sequence.
///
/// ```
/// use jiff::civil::date;
/// use recurrence::{DailyInterval, RecurrenceIterator};
///
/// let mut it = RecurrenceIterator::new(
///     date(2012, 10, 10).at(9, 0, 0, 0),
///     DailyInterval::new(1).unwrap(),
///     10u32,
/// )
/// .unwrap();
/// assert_eq!(it.count().unwrap(), 10);
/// assert_eq!(it.get(0).unwrap(), Some(date(2012, 10, 11).at(9, 0, 0, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct RecurrenceIterator {
    start: DateTime,
    rule: Interval,
    end: EndCondition,
    max_occurrences: u32,
    direction: Direction,
    skip: BTreeSet<DateTime>,
    occurrences: Occurrences,
    cursor: Option<usize>,
    produced: u32,
}

impl RecurrenceIterator {
    pub fn new(
        start: impl Into<DateTimeInput>,
        rule: impl Into<Interval>,
        end: impl Into<EndCondition>,
    ) -> Result<Self> {
        Self::with_direction(start, rule, end, Direction::Forwards)
    }

    pub fn with_direction(
        start: impl Into<DateTimeInput>,
        rule: impl Into<Interval>,
        end: impl Into<EndCondition>,
        direction: Direction,
    ) -> Result<Self> {
        let rule = rule.into();
        rule.validate()?;
        let mut iterator = Self {
            start: start.into().resolve()?,
            rule,
            end: EndCondition::Count(1),
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
            direction,
            skip: BTreeSet::new(),
            occurrences: Occurrences::new(),
            cursor: None,
            produced: 0,
        };
        iterator.set_end_condition(end)?;
        Ok(iterator)
    }

    // --- configuration ---

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn rule(&self) -> &Interval {
        &self.rule
    }

    pub fn end_condition(&self) -> EndCondition {
        self.end
    }

    pub fn max_occurrences(&self) -> u32 {
        self.max_occurrences
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether `count` is usable as a [`EndCondition::Count`].
    pub fn is_valid_occurrences(&self, count: u32) -> bool {
        (1..=self.max_occurrences).contains(&count)
    }

    /// Move the start point. The cache is discarded since every occurrence
    /// derives from the start.
    pub fn set_start(&mut self, start: impl Into<DateTimeInput>) -> Result<&mut Self> {
        let start = start.into().resolve()?;
        if let EndCondition::Until(until) = self.end {
            self.check_until(start, until, self.direction)?;
        }
        debug!(%start, "start moved, clearing cached occurrences");
        self.start = start;
        self.reset();
        Ok(self)
    }

    /// Swap the rule. Cached occurrences are kept; only occurrences generated
    /// from now on follow the new rule.
    pub fn set_rule(&mut self, rule: impl Into<Interval>) -> Result<&mut Self> {
        let rule = rule.into();
        rule.validate()?;
        debug!(?rule, cached = self.occurrences.len(), "rule replaced");
        self.rule = rule;
        Ok(self)
    }

    pub fn set_end_condition(&mut self, end: impl Into<EndCondition>) -> Result<&mut Self> {
        let end = end.into();
        match end {
            EndCondition::Count(count) => {
                if !self.is_valid_occurrences(count) {
                    return Err(RecurrenceError::invalid_argument(format!(
                        "occurrence count must be between 1 and {}, got {count}",
                        self.max_occurrences
                    )));
                }
            }
            EndCondition::Until(until) => self.check_until(self.start, until, self.direction)?,
        }
        debug!(?end, "end condition set");
        self.end = end;
        Ok(self)
    }

    pub fn set_max_occurrences(&mut self, max: u32) -> Result<&mut Self> {
        if max < 1 {
            return Err(RecurrenceError::invalid_argument(
                "max occurrences must be more than 0",
            ));
        }
        debug!(max, produced = self.produced, "max occurrences set");
        self.max_occurrences = max;
        Ok(self)
    }

    /// Change direction for occurrences generated from now on.
    pub fn set_direction(&mut self, direction: Direction) -> Result<&mut Self> {
        if let EndCondition::Until(until) = self.end {
            self.check_until(self.start, until, direction)?;
        }
        self.direction = direction;
        Ok(self)
    }

    fn check_until(&self, start: DateTime, until: DateTime, direction: Direction) -> Result<()> {
        if direction.is_beyond(&until, &start) {
            return Ok(());
        }
        let relation = match direction {
            Direction::Forwards => "after",
            Direction::Backwards => "before",
        };
        Err(RecurrenceError::invalid_argument(format!(
            "end datetime {until} must be strictly {relation} the start {start}"
        )))
    }

    // --- skipping ---

    /// Exclude dates from the sequence. Compared to the second.
    ///
    /// Every date is resolved before any is added, so a bad input leaves the
    /// skip set untouched.
    pub fn skip<I, D>(&mut self, dates: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<DateTimeInput>,
    {
        let resolved = dates
            .into_iter()
            .map(|d| d.into().resolve().map(truncate_to_second))
            .collect::<Result<Vec<_>>>()?;
        self.skip.extend(resolved);
        Ok(self)
    }

    pub fn should_skip(&self, date: DateTime) -> bool {
        self.skip.contains(&truncate_to_second(date))
    }

    /// Skipped dates in ascending order.
    pub fn skipped(&self) -> impl Iterator<Item = DateTime> + '_ {
        self.skip.iter().copied()
    }

    // --- cache ---

    /// Everything generated so far, including entries beyond a lowered bound.
    pub fn occurrences(&self) -> &Occurrences {
        &self.occurrences
    }

    pub fn produced_count(&self) -> u32 {
        self.produced
    }

    /// Forget all generated occurrences, the cursor and anything the rule
    /// pinned from them.
    pub fn reset(&mut self) -> &mut Self {
        self.rule.reset_state();
        self.occurrences.clear();
        self.cursor = None;
        self.produced = 0;
        self
    }

    // --- cursor protocol ---

    /// Put the cursor on the first occurrence, generating it if needed.
    pub fn rewind(&mut self) -> Result<()> {
        self.materialize(0)?;
        self.cursor = Some(0);
        Ok(())
    }

    /// Move the cursor one occurrence on, generating it if needed.
    pub fn advance(&mut self) -> Result<()> {
        let index = match self.cursor {
            None => {
                self.rewind()?;
                1
            }
            Some(i) => i + 1,
        };
        self.materialize(index)?;
        self.cursor = Some(index);
        Ok(())
    }

    /// Whether the cursor sits on an occurrence within the bounds.
    pub fn valid(&self) -> bool {
        self.cursor.is_some_and(|i| self.is_visible(i))
    }

    pub fn current(&self) -> Option<DateTime> {
        self.cursor
            .filter(|&i| self.is_visible(i))
            .and_then(|i| self.occurrences.get(i))
    }

    pub fn key(&self) -> Option<usize> {
        self.cursor
    }

    // --- consumption ---

    /// Occurrence at `index`, generating up to it if needed.
    pub fn get(&mut self, index: usize) -> Result<Option<DateTime>> {
        self.materialize(index)?;
        if self.is_visible(index) {
            Ok(self.occurrences.get(index))
        } else {
            Ok(None)
        }
    }

    /// Number of occurrences in the sequence.
    ///
    /// Generates whatever is missing up to the bound. Once the bound is
    /// reached further calls only read the cache. The cursor does not move.
    pub fn count(&mut self) -> Result<usize> {
        while self.generate_next()?.is_some() {}
        Ok(self.visible_len())
    }

    /// Walk the sequence from the first occurrence.
    ///
    /// Cached occurrences are replayed; the rest are generated as the walk
    /// reaches them. The cursor follows the walk.
    pub fn iter(&mut self) -> Iter<'_> {
        Iter {
            inner: self,
            index: 0,
            done: false,
        }
    }

    /// The whole sequence.
    pub fn to_vec(&mut self) -> Result<Vec<DateTime>> {
        self.iter().collect()
    }

    // --- generation ---

    fn is_visible(&self, index: usize) -> bool {
        index < self.visible_len()
    }

    /// Cached occurrences that fall inside the current bounds.
    fn visible_len(&self) -> usize {
        let mut limit = self.occurrences.len().min(self.max_occurrences as usize);
        if let EndCondition::Count(count) = self.end {
            limit = limit.min(count as usize);
        }
        limit
    }

    /// Generate until `index` is cached or the bound stops generation.
    fn materialize(&mut self, index: usize) -> Result<bool> {
        while !self.occurrences.contains_index(index) {
            if self.generate_next()?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn generate_next(&mut self) -> Result<Option<DateTime>> {
        let from = self.occurrences.last().unwrap_or(self.start);
        self.compute_next(from)
    }

    fn has_capacity(&self) -> bool {
        if self.produced >= self.max_occurrences {
            return false;
        }
        match self.end {
            EndCondition::Count(count) => self.produced < count,
            EndCondition::Until(_) => true,
        }
    }

    /// Apply the rule from `from` until a candidate survives the skip set,
    /// then cache it if it is within the bound.
    fn compute_next(&mut self, mut from: DateTime) -> Result<Option<DateTime>> {
        if !self.has_capacity() {
            trace!(produced = self.produced, "occurrence limit reached");
            return Ok(None);
        }

        for _ in 0..MAX_SKIPPED_CANDIDATES {
            let candidate = self.rule.find_next_occurrence(from, self.direction)?;
            if self.should_skip(candidate) {
                trace!(%candidate, "skipping occurrence");
                from = candidate;
                continue;
            }
            if let EndCondition::Until(until) = self.end {
                if self.direction.is_beyond(&candidate, &until) {
                    debug!(%candidate, %until, "candidate beyond end datetime");
                    return Ok(None);
                }
            }
            self.occurrences.push(candidate);
            self.produced += 1;
            trace!(index = self.produced - 1, %candidate, "occurrence produced");
            return Ok(Some(candidate));
        }

        Err(RecurrenceError::internal(format!(
            "skipped {MAX_SKIPPED_CANDIDATES} consecutive candidates after {from}"
        )))
    }
}

/// Lazy walk over a [`RecurrenceIterator`]'s sequence.
///
/// Created by [`RecurrenceIterator::iter`]. Yields `Err` once if the rule
/// fails and then ends.
pub struct Iter<'a> {
    inner: &'a mut RecurrenceIterator,
    index: usize,
    done: bool,
}

impl Iterator for Iter<'_> {
    type Item = Result<DateTime>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.get(self.index) {
            Ok(Some(occurrence)) => {
                self.inner.cursor = Some(self.index);
                self.index += 1;
                Some(Ok(occurrence))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Iter<'_> {}
