//! Display functions for command results

use super::formatters::{breakdown_line, create_progress_bar, length_glyph};
use crate::commands::{CheckResult, SurveyStatistics};
use crate::core::letter_count;
use crate::game::Submission;
use crate::solver::Solution;
use colored::Colorize;

/// Print the verdict for every checked word and the final session
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        result.session.root_word().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for verdict in &result.verdicts {
        match &verdict.outcome {
            Ok(Submission::Accepted { word, score }) => println!(
                "  {} {:<12} {}  (score {score})",
                "✓".green().bold(),
                word,
                length_glyph(letter_count(word))
            ),
            Ok(Submission::Ignored) => println!(
                "  {} {:<12} {}",
                "·".bright_black(),
                format!("{:?}", verdict.candidate),
                "ignored".bright_black()
            ),
            Err(rejection) => println!(
                "  {} {:<12} {}: {}",
                "✗".red().bold(),
                verdict.candidate.trim(),
                rejection.title().red(),
                rejection.message()
            ),
        }
    }

    println!();
    println!(
        "Accepted {} of {} | Score: {}",
        result.accepted(),
        result.verdicts.len(),
        result.session.score().to_string().bright_yellow().bold()
    );
    let breakdown = breakdown_line(result.session.tally());
    if !breakdown.is_empty() {
        println!("  {breakdown}");
    }
}

/// Print every attainable word for a root, grouped by length
pub fn print_solution(solution: &Solution) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN:".bright_cyan().bold(),
        solution.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if solution.words.is_empty() {
        println!("\nNo attainable words in the dictionary.");
        return;
    }

    for (len, words) in solution.by_length() {
        println!(
            "\n{} {}",
            length_glyph(len).bright_cyan(),
            format!("{} letters ({})", len, words.len()).bright_cyan().bold()
        );
        for chunk in words.chunks(8) {
            println!("   {}", chunk.join("  "));
        }
    }

    println!(
        "\n📊 {} words, maximum score {}",
        solution.word_count(),
        solution.max_score.to_string().bright_yellow().bold()
    );
    println!("   {}", breakdown_line(&solution.tally));
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Root Words".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.total_roots);
    println!(
        "  Words per root:      {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!(
        "  Max score per root:  {}",
        format!("{:.1}", stats.average_max_score)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if let Some(best) = &stats.best {
        println!("\n✨ {}", "Richest Root".green().bold());
        println!(
            "  {} offers {} words worth {} points",
            best.root.to_uppercase().bright_green(),
            best.words,
            best.max_score
        );
    }

    if !stats.poorest.is_empty() {
        println!("\n⚠️  {}", "Poorest Roots".yellow().bold());
        let most = stats
            .poorest
            .iter()
            .map(|s| s.words)
            .max()
            .unwrap_or(0)
            .max(1);
        for summary in &stats.poorest {
            println!(
                "  {:<10} {} {:3} words",
                summary.root.to_uppercase(),
                create_progress_bar(summary.words as f64, most as f64, 20).yellow(),
                summary.words
            );
        }
    }
    println!();
}
