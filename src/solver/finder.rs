//! Attainable-word search
//!
//! Finds every dictionary word a player could score from a root word.

use crate::core::{LetterPool, MIN_WORD_LENGTH, ScoreTally, letter_count, normalize};
use crate::game::Session;
use rayon::prelude::*;

/// Every word that can be scored from one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub tally: ScoreTally,
    pub max_score: usize,
}

impl Solution {
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Words grouped by length, longest group first
    #[must_use]
    pub fn by_length(&self) -> Vec<(usize, Vec<&str>)> {
        let mut groups: Vec<(usize, Vec<&str>)> = Vec::new();
        for word in &self.words {
            let len = letter_count(word);
            match groups.last_mut() {
                Some((group_len, group)) if *group_len == len => group.push(word.as_str()),
                _ => groups.push((len, vec![word.as_str()])),
            }
        }
        groups
    }

    /// How many of this root's words the session has found
    #[must_use]
    pub fn found_in(&self, session: &Session) -> usize {
        session.used_words().filter(|w| self.contains(w)).count()
    }
}

/// Find every word in `dictionary` that a fresh session on `root` would accept
///
/// A word qualifies if it has at least [`MIN_WORD_LENGTH`] letters, is not the
/// root itself, and can be spelled from the root's letters. Realness is given:
/// every entry of `dictionary` is assumed to be a real word.
///
/// # Examples
/// ```
/// use word_scramble::solver::solve;
///
/// let solution = solve("silkworm", &["silk", "worm", "silky", "or", "silkworm"]);
/// assert_eq!(solution.words, vec!["silk", "worm"]);
/// assert_eq!(solution.max_score, 8);
/// ```
#[must_use]
pub fn solve(root: &str, dictionary: &[&str]) -> Solution {
    let root = normalize(root);
    let pool = LetterPool::new(&root);

    let mut words: Vec<String> = dictionary
        .par_iter()
        .map(|&word| normalize(word))
        .filter(|word| {
            letter_count(word) >= MIN_WORD_LENGTH && *word != root && pool.can_spell(word)
        })
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });
    words.dedup();

    let mut tally = ScoreTally::new();
    for word in &words {
        tally.record(letter_count(word));
    }
    let max_score = tally.total();

    Solution {
        root,
        words,
        tally,
        max_score,
    }
}
