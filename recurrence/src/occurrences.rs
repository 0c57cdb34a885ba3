//! Cache of produced occurrences, indexed by position in the sequence.

use std::ops::Index;

use jiff::civil::DateTime;

use crate::error::{RecurrenceError, Result};

/// Ordered store of occurrences.
///
/// The store keeps insertion order and nothing else; the iterator decides
/// what goes in and when.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Occurrences {
    occurrences: Vec<DateTime>,
}

impl Occurrences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<DateTime> {
        self.occurrences.get(index).copied()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.occurrences.len()
    }

    /// Replace the entry at `index`, or append when `index == len()`.
    pub fn set(&mut self, index: usize, occurrence: DateTime) -> Result<()> {
        match index.cmp(&self.occurrences.len()) {
            std::cmp::Ordering::Less => self.occurrences[index] = occurrence,
            std::cmp::Ordering::Equal => self.occurrences.push(occurrence),
            std::cmp::Ordering::Greater => {
                return Err(RecurrenceError::invalid_argument(format!(
                    "cannot set occurrence {index} in a store of {}",
                    self.occurrences.len()
                )))
            }
        }
        Ok(())
    }

    pub fn push(&mut self, occurrence: DateTime) -> &mut Self {
        self.occurrences.push(occurrence);
        self
    }

    pub fn pop(&mut self) -> Option<DateTime> {
        self.occurrences.pop()
    }

    pub fn last(&self) -> Option<DateTime> {
        self.occurrences.last().copied()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn clear(&mut self) {
        self.occurrences.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateTime> {
        self.occurrences.iter()
    }

    pub fn as_slice(&self) -> &[DateTime] {
        &self.occurrences
    }

    pub fn to_vec(&self) -> Vec<DateTime> {
        self.occurrences.clone()
    }
}

impl From<Vec<DateTime>> for Occurrences {
    fn from(occurrences: Vec<DateTime>) -> Self {
        Self { occurrences }
    }
}

impl From<Occurrences> for Vec<DateTime> {
    fn from(occurrences: Occurrences) -> Self {
        occurrences.occurrences
    }
}

impl Index<usize> for Occurrences {
    type Output = DateTime;

    fn index(&self, index: usize) -> &DateTime {
        &self.occurrences[index]
    }
}

impl<'a> IntoIterator for &'a Occurrences {
    type Item = &'a DateTime;
    type IntoIter = std::slice::Iter<'a, DateTime>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
