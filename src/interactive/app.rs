//! TUI application state and logic

use crate::core::letter_count;
use crate::dictionary::WordSet;
use crate::game::{Session, Submission, WordValidator};
use crate::output::formatters::length_glyph;
use crate::solver::{Solution, solve};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<'a> {
    pub validator: WordValidator<&'a WordSet>,
    pub roots: &'a [String],
    pub dictionary_words: Vec<&'a str>,
    pub session: Session,
    pub solution: Solution,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub games_played: usize,
    pub should_quit: bool,
    rng: StdRng,
}

/// Modal shown when a word is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    #[must_use]
    pub fn new(dictionary: &'a WordSet, roots: &'a [String], mut rng: StdRng) -> Self {
        let dictionary_words: Vec<&str> = dictionary.iter().collect();
        let session = Session::start(roots, &mut rng);
        let solution = solve(session.root_word(), &dictionary_words);

        let mut app = Self {
            validator: WordValidator::new(dictionary),
            roots,
            dictionary_words,
            session,
            solution,
            input_buffer: String::new(),
            alert: None,
            messages: Vec::new(),
            games_played: 1,
            should_quit: false,
            rng,
        };
        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app.announce_root();
        app
    }

    /// Submit the current input as a word
    pub fn submit(&mut self) {
        match self.validator.submit(&self.input_buffer, &mut self.session) {
            Ok(Submission::Accepted { word, score }) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!(
                        "{} {} (+{}) → {score} points",
                        length_glyph(letter_count(&word)),
                        word,
                        letter_count(&word)
                    ),
                    MessageStyle::Success,
                );
                if self.found() == self.solution.word_count() {
                    self.add_message(
                        "Every word found! Press Ctrl-N for the next root.",
                        MessageStyle::Success,
                    );
                }
            }
            Ok(Submission::Ignored) => {}
            Err(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                });
            }
        }
    }

    /// Start the next game on a fresh root word
    pub fn new_game(&mut self) {
        self.session.reset(self.roots, &mut self.rng);
        self.solution = solve(self.session.root_word(), &self.dictionary_words);
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.games_played += 1;
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_root();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Words of the current root found so far
    #[must_use]
    pub fn found(&self) -> usize {
        self.solution.found_in(&self.session)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn announce_root(&mut self) {
        let text = format!(
            "Root word: {} ({} words to find)",
            self.session.root_word().to_uppercase(),
            self.solution.word_count()
        );
        self.add_message(&text, MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with an error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!(
        "Quit after {} game(s), last score {}",
        app.games_played,
        app.session.score()
    );
    Ok(())
}
