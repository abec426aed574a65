//! Command implementations

pub mod check;
pub mod reveal;
pub mod simple;
pub mod survey;

pub use check::{CheckResult, Verdict, check_words};
pub use reveal::reveal_root;
pub use simple::{run_simple, run_simple_with};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
