//! Reasons a candidate word can be turned down

use thiserror::Error;

/// Why a submitted word was not accepted
///
/// Every rejection is recoverable: the player simply tries another word.
/// The `Display` text is the message shown under [`Rejection::title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Be more original")]
    AlreadyUsed,
    #[error("You can't spell that word from the letters you were given!")]
    NotPossibleFromRoot,
    #[error("You can't just make them up, you know!")]
    NotARealWord,
    #[error("You can only type words with 3 or more letters.")]
    TooShort,
    #[error("You can't use the title word.")]
    IsRootWord,
}

impl Rejection {
    /// Every rejection kind, in the order the checks run
    pub const ALL: [Self; 5] = [
        Self::AlreadyUsed,
        Self::NotPossibleFromRoot,
        Self::NotARealWord,
        Self::TooShort,
        Self::IsRootWord,
    ];

    /// Short heading for an alert
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossibleFromRoot => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::TooShort => "Word is too small",
            Self::IsRootWord => "This is the title word",
        }
    }

    /// Explanatory body text for an alert
    #[must_use]
    pub fn message(self) -> String {
        self.to_string()
    }
}
