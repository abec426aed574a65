//! Word-finding algorithms
//!
//! Enumerates what can be scored from a root word, used for hints, progress and
//! surveys of the root-word list.

mod finder;

pub use finder::{Solution, solve};
