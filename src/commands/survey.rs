//! Survey the root-word list
//!
//! Solves every root word and reports how much each one offers the player.

use crate::dictionary::WordSet;
use crate::solver::solve;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of weakest roots kept in the statistics
const POOREST_KEPT: usize = 5;

/// What one root word offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub words: usize,
    pub max_score: usize,
}

/// Statistics across the surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub average_words: f64,
    pub average_max_score: f64,
    /// Root with the highest attainable score
    pub best: Option<RootSummary>,
    /// Roots with the fewest attainable words, fewest first
    pub poorest: Vec<RootSummary>,
    pub total_time: Duration,
}

/// Solve every root (or the first `limit`) against `dictionary`
///
/// Roots are solved in parallel. A progress bar is drawn when `show_progress` is set.
#[must_use]
pub fn run_survey(
    roots: &[String],
    dictionary: &WordSet,
    limit: Option<usize>,
    show_progress: bool,
) -> SurveyStatistics {
    let roots = &roots[..limit.unwrap_or(roots.len()).min(roots.len())];
    let words: Vec<&str> = dictionary.iter().collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .map_or_else(|_| ProgressStyle::default_bar(), |style| {
                style.progress_chars("█▓▒░")
            }),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let mut summaries: Vec<RootSummary> = roots
        .par_iter()
        .map(|root| {
            let solution = solve(root, &words);
            pb.inc(1);
            RootSummary {
                root: solution.root,
                words: solution.words.len(),
                max_score: solution.max_score,
            }
        })
        .collect();

    pb.finish_with_message("done");
    let total_time = start.elapsed();

    let total_roots = summaries.len();
    let (average_words, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let words: usize = summaries.iter().map(|s| s.words).sum();
        let score: usize = summaries.iter().map(|s| s.max_score).sum();
        (
            words as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    };

    let best = summaries
        .iter()
        .max_by(|a, b| a.max_score.cmp(&b.max_score).then_with(|| b.root.cmp(&a.root)))
        .cloned();

    summaries.sort_by(|a, b| a.words.cmp(&b.words).then_with(|| a.root.cmp(&b.root)));
    summaries.truncate(POOREST_KEPT);

    log::info!("Surveyed {total_roots} roots in {:.2}s", total_time.as_secs_f64());

    SurveyStatistics {
        total_roots,
        average_words,
        average_max_score,
        best,
        poorest: summaries,
        total_time,
    }
}
