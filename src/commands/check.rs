//! Batch word checking command
//!
//! Submits a list of candidates, in order, to a single session and records each verdict.

use crate::core::Rejection;
use crate::dictionary::Dictionary;
use crate::game::{Session, Submission, WordValidator};

/// The outcome of one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub candidate: String,
    pub outcome: Result<Submission, Rejection>,
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.outcome, Ok(Submission::Accepted { .. }))
    }
}

/// Result of checking a batch of candidates
pub struct CheckResult {
    pub session: Session,
    pub verdicts: Vec<Verdict>,
}

impl CheckResult {
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_accepted()).count()
    }

    #[must_use]
    pub fn rejected(&self) -> usize {
        self.verdicts.iter().filter(|v| v.outcome.is_err()).count()
    }
}

/// Submit each candidate to `session` in order
///
/// Later candidates see the words accepted before them, so repeats are reported
/// as [`Rejection::AlreadyUsed`].
pub fn check_words<D: Dictionary, S: AsRef<str>>(
    validator: &WordValidator<D>,
    mut session: Session,
    candidates: &[S],
) -> CheckResult {
    let verdicts = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            Verdict {
                candidate: candidate.to_string(),
                outcome: validator.submit(candidate, &mut session),
            }
        })
        .collect();

    CheckResult { session, verdicts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{ENGLISH, WordSet};

    fn validator() -> WordValidator<WordSet> {
        WordValidator::new(WordSet::from_words(
            ["silk", "silky", "worm", "or"],
            ENGLISH,
        ))
    }

    #[test]
    fn verdicts_follow_submission_order() {
        let result = check_words(
            &validator(),
            Session::new("silkworm"),
            &["silk", "silk", "silky", "or", "", "silkworm", "worm"],
        );

        let outcomes: Vec<_> = result.verdicts.iter().map(|v| v.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                Ok(Submission::Accepted {
                    word: "silk".to_string(),
                    score: 4
                }),
                Err(Rejection::AlreadyUsed),
                Err(Rejection::NotPossibleFromRoot),
                Err(Rejection::TooShort),
                Ok(Submission::Ignored),
                Err(Rejection::IsRootWord),
                Ok(Submission::Accepted {
                    word: "worm".to_string(),
                    score: 8
                }),
            ]
        );
        assert_eq!(result.accepted(), 2);
        assert_eq!(result.rejected(), 4);
        assert_eq!(result.session.score(), 8);
    }

    #[test]
    fn verdict_keeps_raw_candidate() {
        let result = check_words(&validator(), Session::new("silkworm"), &[" Silk "]);
        assert_eq!(result.verdicts[0].candidate, " Silk ");
        assert!(result.verdicts[0].is_accepted());
    }

    #[test]
    fn no_candidates() {
        let result = check_words::<_, &str>(&validator(), Session::new("silkworm"), &[]);
        assert!(result.verdicts.is_empty());
        assert_eq!(result.session.score(), 0);
    }
}
