//! Word Scramble
//!
//! A word-forming game: build as many words as you can from the letters of a root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::{WordSet, ENGLISH};
//! use word_scramble::game::{Session, Submission, WordValidator};
//!
//! let validator = WordValidator::new(WordSet::from_words(["silk", "worm"], ENGLISH));
//! let mut session = Session::new("silkworm");
//!
//! let result = validator.submit("silk", &mut session);
//! assert_eq!(result, Ok(Submission::Accepted { word: "silk".to_string(), score: 4 }));
//! assert_eq!(session.tally().count(4), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary membership
pub mod dictionary;

// Sessions and validation
pub mod game;

// Attainable-word search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logger setup
pub mod logging;
