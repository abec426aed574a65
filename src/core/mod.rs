//! Core domain types for Word Scramble
//!
//! Pure types with no I/O: letter pools, score tallies, rejection reasons and
//! input normalization.

mod letters;
mod rejection;
mod tally;
mod word;

pub use letters::LetterPool;
pub use rejection::Rejection;
pub use tally::{ScoreTally, TRACKED_LENGTHS};
pub use word::{DEFAULT_ROOT_WORD, MIN_WORD_LENGTH, letter_count, normalize};
