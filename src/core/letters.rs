//! Letter multiset for root words
//!
//! A `LetterPool` counts how many times each letter appears in a word, so that a
//! candidate can be checked against it with single-use consumption.

use rustc_hash::FxHashMap;

/// The multiset of letters available in a root word
///
/// Each occurrence of a letter in the root backs at most one occurrence in a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    len: usize,
}

impl LetterPool {
    /// Build the pool of letters in `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.len(), 8);
    /// assert!(!pool.is_empty());
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether every letter of `candidate` can be taken from this pool
    ///
    /// Works on a copy of the counts: each matched letter is removed so it cannot
    /// back a second occurrence in the candidate.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("silky")); // no 'y'
    /// assert!(!pool.can_spell("kiss")); // only one 's'
    /// ```
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        // Cheap reject before cloning the counts
        if candidate.chars().count() > self.len {
            return false;
        }

        let mut remaining = self.counts.clone();
        for ch in candidate.chars() {
            match remaining.get_mut(&ch) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_counts_repeated_letters() {
        let pool = LetterPool::new("balanced");
        assert_eq!(pool.len(), 8);
        assert!(pool.can_spell("aa"));
        assert!(!pool.can_spell("aaa"));
        assert!(!pool.can_spell("bb"));
    }

    #[test]
    fn empty_pool() {
        let pool = LetterPool::new("");
        assert!(pool.is_empty());
        assert!(pool.can_spell(""));
        assert!(!pool.can_spell("a"));
    }

    #[test]
    fn can_spell_subsets() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("swirl"));
        assert!(pool.can_spell("silkworm"));
    }

    #[test]
    fn can_spell_rejects_missing_letter() {
        let pool = LetterPool::new("silkworm");
        assert!(!pool.can_spell("silky"));
        assert!(!pool.can_spell("zoo"));
    }

    #[test]
    fn can_spell_consumes_each_letter_once() {
        let pool = LetterPool::new("silkworm");
        // Only one 'o' and one 's' in the root
        assert!(!pool.can_spell("wool"));
        assert!(!pool.can_spell("kiss"));

        // Two 'a's are available here
        let pool = LetterPool::new("balanced");
        assert!(pool.can_spell("banal"));
        assert!(!pool.can_spell("banana"));
    }

    #[test]
    fn can_spell_does_not_mutate_pool() {
        let pool = LetterPool::new("silkworm");
        let before = pool.clone();
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("silk"));
        assert_eq!(pool, before);
    }

    #[test]
    fn longer_candidate_is_rejected() {
        let pool = LetterPool::new("worm");
        assert!(!pool.can_spell("worms"));
    }
}
