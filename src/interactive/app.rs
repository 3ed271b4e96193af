//! TUI application state and logic

use crate::game::{GameError, Outcome, Session, WordProvider};
use crate::output::formatters::{GUESS_PROMPT, round_over_message};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input accepted into the buffer; longer than a word so "too long" can be reported
pub const MAX_INPUT_LENGTH: usize = 8;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<P: WordProvider> {
    pub session: Session<P>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub show_statistics: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// Round finished; input is disabled until a new round starts
    RoundOver,
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

impl<P: WordProvider> App<P> {
    #[must_use]
    pub fn new(session: Session<P>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: GUESS_PROMPT.to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Guessing,
            show_statistics: false,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Ok(_) => {}
            Err(GameError::Rejected(reason)) => {
                // Keep the text so it can be corrected
                self.input_buffer = input;
                self.add_message(&reason.to_string(), MessageStyle::Error);
                return;
            }
            Err(e) => {
                self.add_message(
                    &format!("Could not save statistics: {e}"),
                    MessageStyle::Error,
                );
            }
        }

        let round = self.session.round();
        if !round.is_over() {
            self.add_message(GUESS_PROMPT, MessageStyle::Info);
            return;
        }

        let outcome = round.outcome();
        let text = round_over_message(outcome, round.secret()).unwrap_or_default();
        let style = if outcome == Outcome::Won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&text, style);
        self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::RoundOver;
    }

    pub fn new_round(&mut self) {
        if let Err(e) = self.session.new_round() {
            self.add_message(&format!("Could not start a new round: {e}"), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message(GUESS_PROMPT, MessageStyle::Info);
    }

    /// Show or hide the statistics panel, reloading the counts when shown
    pub fn toggle_statistics(&mut self) {
        self.show_statistics = !self.show_statistics;
        if self.show_statistics
            && let Err(e) = self.session.reload_statistics()
        {
            self.add_message(&format!("Could not update statistics: {e}"), MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) | (InputMode::RoundOver, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (_, KeyCode::Tab) => self.toggle_statistics(),
            (InputMode::RoundOver, KeyCode::Char('n')) => self.new_round(),
            (InputMode::Guessing, KeyCode::Char(c)) => {
                if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_INPUT_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guessing, KeyCode::Enter) => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordProvider>(app: App<P>) -> Result<()> {
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

    res
}

fn run_app<B: ratatui::backend::Backend, P: WordProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
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

    Ok(())
}
