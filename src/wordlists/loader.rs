//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);
    log::info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load a word list from `path`, falling back to `builtin` if it cannot be read
///
/// A missing or unreadable list is not fatal: the game can always start from the
/// bundled list.
pub fn load_or_builtin<P: AsRef<Path>>(path: P, builtin: &[&str]) -> Vec<String> {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(words) => words,
        Err(e) => {
            log::warn!(
                "Could not load {}: {e}; using the {} bundled words",
                path.display(),
                builtin.len()
            );
            words_from_slice(builtin)
        }
    }
}

/// Split newline-delimited text into normalized words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}
