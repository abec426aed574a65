//! Game session state
//!
//! A session owns the root word, the words accepted so far and the score. It is
//! created at the start of a game and reset as a whole when the next game begins.

use crate::core::{DEFAULT_ROOT_WORD, LetterPool, ScoreTally, letter_count, normalize};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::VecDeque;

/// Pick a root word uniformly at random from `word_list`
///
/// Blank entries are never picked. Falls back to [`DEFAULT_ROOT_WORD`] when the
/// list has no usable word.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use word_scramble::game::pick_root;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(pick_root(&[], &mut rng), "silkworm");
/// assert_eq!(pick_root(&["absolute".to_string()], &mut rng), "absolute");
/// ```
pub fn pick_root<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> String {
    let candidates: Vec<&str> = word_list
        .iter()
        .map(String::as_str)
        .filter(|word| !word.trim().is_empty())
        .collect();

    candidates
        .choose(rng)
        .map_or_else(|| DEFAULT_ROOT_WORD.to_string(), |word| normalize(word))
}

/// State of one game: root word, accepted words, tally and score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    root_letters: LetterPool,
    used_words: VecDeque<String>,
    tally: ScoreTally,
    score: usize,
}

impl Session {
    /// Start a session on a known root word
    ///
    /// The root is normalized; a blank root becomes [`DEFAULT_ROOT_WORD`].
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        let mut root = normalize(root_word);
        if root.is_empty() {
            root = DEFAULT_ROOT_WORD.to_string();
        }

        Self {
            root_letters: LetterPool::new(&root),
            root_word: root,
            used_words: VecDeque::new(),
            tally: ScoreTally::new(),
            score: 0,
        }
    }

    /// Start a session on a root drawn at random from `word_list`
    pub fn start<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> Self {
        Self::new(&pick_root(word_list, rng))
    }

    /// Begin the next game: new random root, no words, zero score
    pub fn reset<R: Rng + ?Sized>(&mut self, word_list: &[String], rng: &mut R) {
        self.root_word = pick_root(word_list, rng);
        self.root_letters = LetterPool::new(&self.root_word);
        self.used_words.clear();
        self.tally.reset();
        self.score = 0;
        log::debug!("New game with root word '{}'", self.root_word);
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Letters available to candidates
    #[must_use]
    pub const fn root_letters(&self) -> &LetterPool {
        &self.root_letters
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> impl ExactSizeIterator<Item = &str> {
        self.used_words.iter().map(String::as_str)
    }

    /// Whether `word` (already normalized) has been accepted this session
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.iter().any(|used| used == word)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    #[must_use]
    pub const fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// Total score: the sum of the lengths of all accepted words
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Record an accepted word and return the new score
    ///
    /// Callers must have validated `word`; the validator is the only caller.
    pub(crate) fn accept(&mut self, word: String) -> usize {
        self.tally.record(letter_count(&word));
        self.used_words.push_front(word);
        self.score = self.used_words.iter().map(|w| letter_count(w)).sum();
        self.score
    }
}
