//! Word lists for Word Scramble
//!
//! Provides the root-word list and dictionary embedded into the binary, plus
//! helpers to swap either for a file on disk.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use crate::dictionary::{ENGLISH, WordSet};

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// The list compiled into the binary
    Builtin,
    /// A newline-delimited file
    File(std::path::PathBuf),
}

impl ListSource {
    /// Parse a command-line value: `builtin` or a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "builtin" | "" => Self::Builtin,
            path => Self::File(path.into()),
        }
    }
}

/// Root words from `source`, degrading to the bundled list if a file cannot be read
#[must_use]
pub fn root_words(source: &ListSource) -> Vec<String> {
    match source {
        ListSource::Builtin => loader::words_from_slice(START_WORDS),
        ListSource::File(path) => loader::load_or_builtin(path, START_WORDS),
    }
}

/// English dictionary from `source`, degrading to the bundled one if a file cannot be read
#[must_use]
pub fn dictionary(source: &ListSource) -> WordSet {
    match source {
        ListSource::Builtin => WordSet::from_words(DICTIONARY, ENGLISH),
        ListSource::File(path) => {
            WordSet::from_words(loader::load_or_builtin(path, DICTIONARY), ENGLISH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPool;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_eight_letter_words() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_include_default() {
        assert!(START_WORDS.contains(&crate::core::DEFAULT_ROOT_WORD));
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary = dictionary(&ListSource::Builtin);
        for &word in START_WORDS {
            assert!(dictionary.contains(word), "Root '{word}' not in dictionary");
        }
    }

    #[test]
    fn every_start_word_has_something_to_find() {
        let words: Vec<&str> = DICTIONARY.iter().copied().filter(|w| w.len() >= 3).collect();
        for &root in &START_WORDS[..20] {
            let pool = LetterPool::new(root);
            assert!(
                words.iter().any(|&w| w != root && pool.can_spell(w)),
                "Root '{root}' has no attainable words"
            );
        }
    }

    #[test]
    fn list_source_from_arg() {
        assert_eq!(ListSource::from_arg("builtin"), ListSource::Builtin);
        assert_eq!(
            ListSource::from_arg("words.txt"),
            ListSource::File("words.txt".into())
        );
    }

    #[test]
    fn missing_file_degrades_to_builtin_roots() {
        let source = ListSource::File("/definitely/not/here/start.txt".into());
        assert_eq!(root_words(&source).len(), START_WORDS_COUNT);
    }
}
