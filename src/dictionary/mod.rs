//! Dictionary membership
//!
//! The realness check asks a [`Dictionary`] whether a token is a correctly spelled
//! word. Any lookup backend can be plugged in; [`WordSet`] is an in-memory list.

mod word_set;

pub use word_set::WordSet;

use thiserror::Error;

/// Language the bundled dictionary is written in
pub const ENGLISH: &str = "en";

/// Failure of the dictionary capability itself (as opposed to "not a word")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary has no words for language '{requested}' (it serves '{available}')")]
    UnsupportedLanguage { requested: String, available: String },
    #[error("dictionary lookup failed: {0}")]
    Unavailable(String),
}

/// A source of truth for "is this a real word?"
pub trait Dictionary {
    /// Look `token` up in `language`
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if the lookup could not be answered.
    fn lookup(&self, token: &str, language: &str) -> Result<bool, DictionaryError>;

    /// Whether `token` is a correctly spelled word in `language`
    ///
    /// A failed lookup counts as "not a real word".
    fn is_real_word(&self, token: &str, language: &str) -> bool {
        match self.lookup(token, language) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("Treating '{token}' as unknown: {e}");
                false
            }
        }
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn lookup(&self, token: &str, language: &str) -> Result<bool, DictionaryError> {
        (**self).lookup(token, language)
    }
}
