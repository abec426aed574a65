//! Game rules: sessions and word validation
//!
//! A [`Session`] holds the state of one game; a [`WordValidator`] decides which
//! submissions it accepts.

mod session;
mod validator;

pub use session::{Session, pick_root};
pub use validator::{Submission, WordValidator};
