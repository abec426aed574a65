//! Word Scramble - CLI
//!
//! Word-forming game with TUI and CLI modes: make words from the letters of a root word.

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::{
    commands::{check_words, reveal_root, run_simple, run_survey},
    dictionary::WordSet,
    game::{Session, WordValidator, pick_root},
    logging,
    output::{print_check_result, print_solution, print_survey_statistics},
    wordlists::{self, ListSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Dictionary: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Seed for picking root words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Submit words against one root and print each verdict
    Check {
        /// Words to submit, in order
        #[arg(required = true)]
        candidates: Vec<String>,

        /// Root word to play against (random if omitted)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// List every word that can be made from a root word
    Reveal {
        /// Root word (random if omitted)
        root: Option<String>,
    },

    /// Solve every root word and summarize how much each offers
    Survey {
        /// Limit number of roots to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let roots = wordlists::root_words(&ListSource::from_arg(&cli.wordlist));
    let dictionary = wordlists::dictionary(&ListSource::from_arg(&cli.dictionary));
    log::info!(
        "{} root words, {} dictionary words",
        roots.len(),
        dictionary.len()
    );
    if dictionary.is_empty() {
        log::warn!("Dictionary is empty: no word will be accepted");
    }

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &roots, rng),
        Commands::Simple => run_simple_command(&dictionary, &roots, &mut rng),
        Commands::Check { candidates, root } => {
            run_check_command(&dictionary, &roots, &candidates, root.as_deref(), &mut rng);
            Ok(())
        }
        Commands::Reveal { root } => {
            let root = root.unwrap_or_else(|| pick_root(&roots, &mut rng));
            run_reveal_command(&root, &dictionary)
        }
        Commands::Survey { limit } => {
            run_survey_command(&roots, &dictionary, limit);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &WordSet, roots: &[String], rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(dictionary, roots, rng);
    run_tui(app)
}

fn run_simple_command(dictionary: &WordSet, roots: &[String], rng: &mut StdRng) -> Result<()> {
    let words: Vec<&str> = dictionary.iter().collect();
    let validator = WordValidator::new(dictionary);
    run_simple(&validator, roots, &words, rng)
}

fn run_check_command(
    dictionary: &WordSet,
    roots: &[String],
    candidates: &[String],
    root: Option<&str>,
    rng: &mut StdRng,
) {
    let session = root.map_or_else(|| Session::start(roots, rng), Session::new);
    let validator = WordValidator::new(dictionary);
    let result = check_words(&validator, session, candidates);
    print_check_result(&result);
}

fn run_reveal_command(root: &str, dictionary: &WordSet) -> Result<()> {
    let solution = reveal_root(root, dictionary).map_err(|e| anyhow!(e))?;
    print_solution(&solution);
    Ok(())
}

fn run_survey_command(roots: &[String], dictionary: &WordSet, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" Word Scramble Root Survey ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSurveying {} root words against {} dictionary words\n",
        limit.map_or(roots.len(), |n| n.min(roots.len())),
        dictionary.len()
    );

    let stats = run_survey(roots, dictionary, limit, true);
    print_survey_statistics(&stats);
}
