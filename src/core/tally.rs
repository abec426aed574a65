//! Per-length score breakdown
//!
//! Counts accepted words bucketed by their length.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Word lengths that are always present in a tally, even at zero
pub const TRACKED_LENGTHS: RangeInclusive<usize> = 3..=8;

/// Count of accepted words per word length
///
/// Lengths in [`TRACKED_LENGTHS`] always have an entry; other lengths appear once
/// a word of that length is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTally {
    counts: BTreeMap<usize, usize>,
}

impl Default for ScoreTally {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreTally {
    /// Create a tally with every tracked length at zero
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: TRACKED_LENGTHS.map(|len| (len, 0)).collect(),
        }
    }

    /// Record one accepted word of the given length
    pub fn record(&mut self, length: usize) {
        *self.counts.entry(length).or_insert(0) += 1;
    }

    /// Number of accepted words of `length`
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Number of accepted words across all lengths
    #[must_use]
    pub fn words(&self) -> usize {
        self.counts.values().sum()
    }

    /// Score implied by the tally: Σ length × count
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::ScoreTally;
    ///
    /// let mut tally = ScoreTally::new();
    /// tally.record(4);
    /// tally.record(5);
    /// assert_eq!(tally.total(), 9);
    /// ```
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(len, count)| len * count).sum()
    }

    /// All `(length, count)` entries in ascending length order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&len, &count)| (len, count))
    }

    /// Entries with at least one word, for display
    pub fn breakdown(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }

    /// Zero every tracked length and drop untracked ones
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
