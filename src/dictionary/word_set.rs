//! In-memory dictionary backed by a word list

use super::{Dictionary, DictionaryError};
use crate::core::normalize;
use rustc_hash::FxHashSet;

/// A set of known words in a single language
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
    language: String,
}

impl WordSet {
    /// Build a dictionary from any iterator of words
    ///
    /// Entries are normalized; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordSet, ENGLISH};
    ///
    /// let dictionary = WordSet::from_words(["Silk", "worm", ""], ENGLISH);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_real_word("silk", ENGLISH));
    /// assert!(!dictionary.is_real_word("silky", ENGLISH));
    /// ```
    pub fn from_words<I, S>(words: I, language: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            words,
            language: language.to_string(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn lookup(&self, token: &str, language: &str) -> Result<bool, DictionaryError> {
        if language != self.language {
            return Err(DictionaryError::UnsupportedLanguage {
                requested: language.to_string(),
                available: self.language.clone(),
            });
        }
        Ok(self.contains(token))
    }
}
