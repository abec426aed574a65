//! Candidate word validation and scoring

use super::Session;
use crate::core::{MIN_WORD_LENGTH, Rejection, letter_count, normalize};
use crate::dictionary::{Dictionary, ENGLISH};

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing happened
    Ignored,
    /// The word was added to the session
    Accepted { word: String, score: usize },
}

/// Decides whether candidate words are acceptable for a session
///
/// Checks run in a fixed order and the first failure wins:
/// 1. blank input is ignored
/// 2. already accepted → [`Rejection::AlreadyUsed`]
/// 3. not spellable from the root's letters → [`Rejection::NotPossibleFromRoot`]
/// 4. unknown to the dictionary → [`Rejection::NotARealWord`]
/// 5. fewer than [`MIN_WORD_LENGTH`] letters → [`Rejection::TooShort`]
/// 6. the root word itself → [`Rejection::IsRootWord`]
///
/// The root word always counts as a real word, so submitting it reaches the last
/// check even if the dictionary does not list it.
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> WordValidator<D> {
    /// Validator that checks realness against `dictionary` in English
    pub fn new(dictionary: D) -> Self {
        Self::with_language(dictionary, ENGLISH)
    }

    pub fn with_language(dictionary: D, language: &str) -> Self {
        Self {
            dictionary,
            language: language.to_string(),
        }
    }

    /// Run every check without touching the session
    ///
    /// Returns the normalized word if it would be accepted, or `None` for blank input.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    pub fn check(&self, candidate: &str, session: &Session) -> Result<Option<String>, Rejection> {
        let word = normalize(candidate);
        if word.is_empty() {
            return Ok(None);
        }

        if session.is_used(&word) {
            return Err(Rejection::AlreadyUsed);
        }

        if !session.root_letters().can_spell(&word) {
            return Err(Rejection::NotPossibleFromRoot);
        }

        if !self.is_real(&word, session.root_word()) {
            return Err(Rejection::NotARealWord);
        }

        if letter_count(&word) < MIN_WORD_LENGTH {
            return Err(Rejection::TooShort);
        }

        if word == session.root_word() {
            return Err(Rejection::IsRootWord);
        }

        Ok(Some(word))
    }

    /// Validate `candidate` and, if acceptable, add it to the session
    ///
    /// Rejected and blank submissions leave the session untouched.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Rejection;
    /// use word_scramble::dictionary::{WordSet, ENGLISH};
    /// use word_scramble::game::{Session, Submission, WordValidator};
    ///
    /// let validator = WordValidator::new(WordSet::from_words(["silk", "silky"], ENGLISH));
    /// let mut session = Session::new("silkworm");
    ///
    /// assert_eq!(
    ///     validator.submit("Silk ", &mut session),
    ///     Ok(Submission::Accepted { word: "silk".to_string(), score: 4 })
    /// );
    /// assert_eq!(validator.submit("silky", &mut session), Err(Rejection::NotPossibleFromRoot));
    /// ```
    pub fn submit(&self, candidate: &str, session: &mut Session) -> Result<Submission, Rejection> {
        match self.check(candidate, session) {
            Ok(Some(word)) => {
                let score = session.accept(word.clone());
                log::debug!("Accepted '{word}' for '{}', score {score}", session.root_word());
                Ok(Submission::Accepted { word, score })
            }
            Ok(None) => Ok(Submission::Ignored),
            Err(rejection) => {
                log::debug!("Rejected '{}': {}", candidate.trim(), rejection.title());
                Err(rejection)
            }
        }
    }

    fn is_real(&self, word: &str, root_word: &str) -> bool {
        word == root_word || self.dictionary.is_real_word(word, &self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreTally;
    use crate::dictionary::{DictionaryError, WordSet};

    fn validator() -> WordValidator<WordSet> {
        WordValidator::new(WordSet::from_words(
            [
                "silk", "silky", "worm", "worms", "milk", "slim", "swirl", "or", "is", "so",
                "kiss", "i",
            ],
            ENGLISH,
        ))
    }

    fn accepted(word: &str, score: usize) -> Result<Submission, Rejection> {
        Ok(Submission::Accepted {
            word: word.to_string(),
            score,
        })
    }

    #[test]
    fn accepts_silk() {
        let v = validator();
        let mut session = Session::new("silkworm");

        assert_eq!(v.submit("silk", &mut session), accepted("silk", 4));
        assert_eq!(session.used_words().collect::<Vec<_>>(), vec!["silk"]);
        assert_eq!(session.score(), 4);
        assert_eq!(session.tally().count(4), 1);
    }

    #[test]
    fn two_words_score_their_lengths() {
        let v = validator();
        let mut session = Session::new("silkworm");

        v.submit("silk", &mut session).unwrap();
        assert_eq!(v.submit("worms", &mut session), accepted("worms", 9));

        let mut expected = ScoreTally::new();
        expected.record(4);
        expected.record(5);
        assert_eq!(session.tally(), &expected);
        assert_eq!(session.tally().count(3), 0);
        assert_eq!(session.tally().count(6), 0);
    }

    #[test]
    fn most_recent_word_first() {
        let v = validator();
        let mut session = Session::new("silkworm");
        for word in ["silk", "worm", "milk"] {
            v.submit(word, &mut session).unwrap();
        }
        assert_eq!(
            session.used_words().collect::<Vec<_>>(),
            vec!["milk", "worm", "silk"]
        );
    }

    #[test]
    fn candidate_is_normalized() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("  SiLK\n", &mut session), accepted("silk", 4));
    }

    #[test]
    fn blank_input_is_ignored() {
        let v = validator();
        let mut session = Session::new("silkworm");
        let before = session.clone();

        assert_eq!(v.submit("", &mut session), Ok(Submission::Ignored));
        assert_eq!(v.submit(" \t\n", &mut session), Ok(Submission::Ignored));
        assert_eq!(session, before);
    }

    #[test]
    fn duplicate_is_already_used() {
        let v = validator();
        let mut session = Session::new("silkworm");
        v.submit("silk", &mut session).unwrap();

        assert_eq!(v.submit("silk", &mut session), Err(Rejection::AlreadyUsed));
        assert_eq!(v.submit(" SILK ", &mut session), Err(Rejection::AlreadyUsed));
        assert_eq!(session.word_count(), 1);
    }

    #[test]
    fn missing_letter_is_not_possible() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(
            v.submit("silky", &mut session),
            Err(Rejection::NotPossibleFromRoot)
        );
    }

    #[test]
    fn reused_letter_is_not_possible() {
        let v = validator();
        let mut session = Session::new("silkworm");
        // "kiss" is a real word but needs two 's'
        assert_eq!(
            v.submit("kiss", &mut session),
            Err(Rejection::NotPossibleFromRoot)
        );
    }

    #[test]
    fn unknown_word_is_not_real() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("rows", &mut session), Err(Rejection::NotARealWord));
        assert_eq!(v.submit("sk", &mut session), Err(Rejection::NotARealWord));
    }

    #[test]
    fn short_real_word_is_too_short() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("or", &mut session), Err(Rejection::TooShort));
        assert_eq!(v.submit("is", &mut session), Err(Rejection::TooShort));
        assert_eq!(v.submit("i", &mut session), Err(Rejection::TooShort));
    }

    #[test]
    fn root_word_is_rejected() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("silkworm", &mut session), Err(Rejection::IsRootWord));
        assert_eq!(v.submit("SILKWORM ", &mut session), Err(Rejection::IsRootWord));
    }

    #[test]
    fn root_word_is_rejected_even_if_dictionary_lacks_it() {
        let v = WordValidator::new(WordSet::from_words(["silk"], ENGLISH));
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("silkworm", &mut session), Err(Rejection::IsRootWord));
    }

    // Check order is fixed: each pair below fails two checks and the earlier one wins.

    #[test]
    fn already_used_wins_over_everything() {
        let v = validator();
        let mut session = Session::new("silkworm");
        session.accept("zz".to_string());
        assert_eq!(v.submit("zz", &mut session), Err(Rejection::AlreadyUsed));
    }

    #[test]
    fn not_possible_wins_over_not_real() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(
            v.submit("xyzzy", &mut session),
            Err(Rejection::NotPossibleFromRoot)
        );
    }

    #[test]
    fn not_real_wins_over_too_short() {
        let v = validator();
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("ml", &mut session), Err(Rejection::NotARealWord));
    }

    #[test]
    fn too_short_wins_over_root_word() {
        let v = WordValidator::new(WordSet::default());
        let mut session = Session::new("is");
        assert_eq!(v.submit("is", &mut session), Err(Rejection::TooShort));
    }

    #[test]
    fn rejection_is_idempotent() {
        let v = validator();
        let mut session = Session::new("silkworm");
        v.submit("silk", &mut session).unwrap();
        let before = session.clone();

        for candidate in ["silk", "silky", "rows", "or", "silkworm"] {
            let first = v.submit(candidate, &mut session);
            let second = v.submit(candidate, &mut session);
            assert!(first.is_err());
            assert_eq!(first, second, "'{candidate}' changed verdict");
        }
        assert_eq!(session, before);
    }

    #[test]
    fn check_does_not_mutate() {
        let v = validator();
        let session = Session::new("silkworm");
        assert_eq!(v.check("silk", &session), Ok(Some("silk".to_string())));
        assert_eq!(v.check("silk", &session), Ok(Some("silk".to_string())));
        assert_eq!(session.word_count(), 0);
    }

    #[test]
    fn dictionary_failure_counts_as_not_real() {
        struct Offline;
        impl Dictionary for Offline {
            fn lookup(&self, _: &str, _: &str) -> Result<bool, DictionaryError> {
                Err(DictionaryError::Unavailable("no spellchecker".to_string()))
            }
        }

        let v = WordValidator::new(Offline);
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("silk", &mut session), Err(Rejection::NotARealWord));
    }

    #[test]
    fn language_mismatch_counts_as_not_real() {
        let v = WordValidator::with_language(WordSet::from_words(["silk"], ENGLISH), "fr");
        let mut session = Session::new("silkworm");
        assert_eq!(v.submit("silk", &mut session), Err(Rejection::NotARealWord));
    }

    #[test]
    fn score_matches_tally_after_many_words() {
        let v = validator();
        let mut session = Session::new("silkworm");
        for word in ["silk", "worm", "worms", "milk", "slim", "swirl"] {
            v.submit(word, &mut session).unwrap();
        }
        assert_eq!(session.score(), 4 + 4 + 5 + 4 + 4 + 5);
        assert_eq!(session.score(), session.tally().total());
        assert_eq!(session.tally().count(4), 4);
        assert_eq!(session.tally().count(5), 2);
    }
}
