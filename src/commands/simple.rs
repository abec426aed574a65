//! Simple interactive CLI mode
//!
//! Text-based game on stdin/stdout without the TUI.

use crate::core::{Rejection, letter_count};
use crate::dictionary::Dictionary;
use crate::game::{Session, Submission, WordValidator};
use crate::output::formatters::{breakdown_line, found_bar, length_glyph};
use crate::solver::{Solution, solve};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, R: Rng + ?Sized>(
    validator: &WordValidator<D>,
    roots: &[String],
    dictionary_words: &[&str],
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(
        stdin.lock(),
        stdout.lock(),
        validator,
        roots,
        dictionary_words,
        rng,
    )
}

/// Run the game loop on arbitrary input and output streams
///
/// The loop ends on `/quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<I, O, D, R>(
    mut input: I,
    mut out: O,
    validator: &WordValidator<D>,
    roots: &[String],
    dictionary_words: &[&str],
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    D: Dictionary,
    R: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make words of 3 or more letters from the root word.")?;
    writeln!(out, "Each letter of the root can be used once per word.")?;
    writeln!(out, "Commands: /new for the next word, /words to review, /quit to exit\n")?;

    let mut session = Session::start(roots, rng);
    let mut solution = solve(session.root_word(), dictionary_words);
    write_round_header(&mut out, &session, &solution)?;

    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "/quit" | "/q" | "/exit" => break,
            "/new" | "/next" | "/n" => {
                session.reset(roots, rng);
                solution = solve(session.root_word(), dictionary_words);
                writeln!(out, "\n🔄 New game started!")?;
                write_round_header(&mut out, &session, &solution)?;
                continue;
            }
            "/words" | "/w" => {
                write_found_words(&mut out, &session, &solution)?;
                continue;
            }
            cmd if cmd.starts_with('/') => {
                writeln!(out, "Unknown command '{cmd}'. Try /new, /words or /quit\n")?;
                continue;
            }
            _ => {}
        }

        match validator.submit(&line, &mut session) {
            Ok(Submission::Ignored) => {}
            Ok(Submission::Accepted { word, score }) => {
                writeln!(
                    out,
                    "{} {} {}   score: {}   found {} of {}\n",
                    "✓".green().bold(),
                    length_glyph(letter_count(&word)),
                    word.bright_white().bold(),
                    score.to_string().bright_yellow().bold(),
                    solution.found_in(&session),
                    solution.word_count()
                )?;
            }
            Err(rejection) => write_rejection(&mut out, rejection)?,
        }
    }

    writeln!(out, "\n👋 Thanks for playing! Final score: {}\n", session.score())?;
    Ok(())
}

fn write_round_header<O: Write>(out: &mut O, session: &Session, solution: &Solution) -> Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Root word: {}   ({} words to find)",
        session.root_word().to_uppercase().bright_cyan().bold(),
        solution.word_count()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────\n")?;
    Ok(())
}

fn write_rejection<O: Write>(out: &mut O, rejection: Rejection) -> Result<()> {
    writeln!(
        out,
        "{} {}: {}\n",
        "✗".red().bold(),
        rejection.title().red().bold(),
        rejection.message()
    )?;
    Ok(())
}

fn write_found_words<O: Write>(out: &mut O, session: &Session, solution: &Solution) -> Result<()> {
    writeln!(
        out,
        "\nRoot word: {}",
        session.root_word().to_uppercase().bright_cyan().bold()
    )?;

    if session.word_count() == 0 {
        writeln!(out, "  No words yet.")?;
    }
    for word in session.used_words() {
        writeln!(out, "  {} {word}", length_glyph(letter_count(word)))?;
    }

    let found = solution.found_in(session);
    writeln!(out, "\nScore: {}", session.score().to_string().bright_yellow().bold())?;
    let breakdown = breakdown_line(session.tally());
    if !breakdown.is_empty() {
        writeln!(out, "  {breakdown}")?;
    }
    writeln!(
        out,
        "  [{}] {found}/{}\n",
        found_bar(found, solution.word_count(), 20),
        solution.word_count()
    )?;
    Ok(())
}
