//! TUI rendering with ratatui
//!
//! The board, the statistics panel and the message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{FeedbackClass, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Outcome, WordProvider};
use crate::output::formatters::{create_progress_bar, statistics_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const BAR_WIDTH: usize = 12;

/// Main UI rendering function
pub fn ui<P: WordProvider>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(15),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Statistics / messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(class: FeedbackClass) -> Style {
    let style = match class {
        FeedbackClass::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        FeedbackClass::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        FeedbackClass::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

/// A row of tiles separated by single spaces
fn tile_row<'a>(tiles: impl Iterator<Item = (String, Style)>) -> Line<'a> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (i, (text, style)) in tiles.enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn render_board<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let round = app.session.round();
    let guesses = round.guesses();
    let empty = Style::default().fg(Color::DarkGray);
    let mut lines = vec![Line::from("")];

    for row in 0..usize::from(MAX_ATTEMPTS) {
        let line = if let Some(guess) = guesses.get(row) {
            tile_row(
                guess
                    .word
                    .text()
                    .chars()
                    .zip(guess.feedback.classes())
                    .map(|(letter, &class)| (format!(" {letter} "), tile_style(class))),
            )
        } else if row == guesses.len() && app.input_mode == InputMode::Guessing {
            // Letters being typed, only the first five fit on the board
            let typed: Vec<char> = app.input_buffer.chars().take(WORD_LENGTH).collect();
            let current = Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD);
            tile_row((0..WORD_LENGTH).map(|i| match typed.get(i) {
                Some(letter) => (format!("[{letter}]"), current),
                None => ("[ ]".to_string(), empty),
            }))
        } else {
            tile_row((0..WORD_LENGTH).map(|_| ("[ ]".to_string(), empty)))
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    if app.show_statistics {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Statistics
                Constraint::Length(7), // Messages
            ])
            .split(area);

        render_statistics(f, app, chunks[0]);
        render_messages(f, app, chunks[1]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_statistics<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let stats = app.session.statistics();
    let max = f64::from(stats.max_completions());
    let mut lines = Vec::new();

    for (i, (label, count)) in statistics_rows(stats).into_iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(
                    count.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
            continue;
        }
        lines.push(Line::from(vec![
            Span::raw(format!("{label:<24} ")),
            Span::styled(
                create_progress_bar(f64::from(count), max, BAR_WIDTH),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let (title, content, color) = match (app.input_mode, app.session.round().outcome()) {
        (InputMode::RoundOver, Outcome::Won) => (
            " You won! | Press 'n' for a new word or 'q' to quit ",
            "",
            Color::Green,
        ),
        (InputMode::RoundOver, _) => (
            " Round over | Press 'n' for a new word or 'q' to quit ",
            "",
            Color::Red,
        ),
        (InputMode::Guessing, _) => (
            " Enter a 5-letter word | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<P: WordProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let round = app.session.round();
    let attempt = (round.attempts_used() + 1).min(MAX_ATTEMPTS);
    let attempt_text = format!("Attempt {attempt}/{MAX_ATTEMPTS}");
    f.render_widget(
        Paragraph::new(attempt_text).alignment(Alignment::Center),
        chunks[0],
    );

    let games_text = format!("Completed: {}", app.session.statistics().total_completed);
    f.render_widget(
        Paragraph::new(games_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "Tab: Statistics | Esc: Quit",
        InputMode::RoundOver => "n: New word | Tab: Statistics | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Session;
    use crate::stats::MemoryStore;
    use crate::wordlists::WordList;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App<WordList> {
        let session = Session::new(
            WordList::from_strs(&["crane"], &["slate"]),
            Box::new(MemoryStore::default()),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        App::new(session)
    }

    fn render(app: &App<WordList>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_board_and_status() {
        let screen = render(&app());
        assert!(screen.contains("WORDLE"));
        assert!(screen.contains("Board"));
        assert!(screen.contains("Attempt 1/6"));
        assert!(screen.contains("Take a guess!"));
    }

    #[test]
    fn renders_submitted_guess_letters() {
        let mut app = app();
        app.session.submit("slate").unwrap();
        let screen = render(&app);
        assert!(screen.contains(" S   L   A   T   E "));
        assert!(screen.contains("Attempt 2/6"));
    }

    #[test]
    fn statistics_panel_on_demand() {
        let mut app = app();
        assert!(!render(&app).contains("Total games completed"));

        app.show_statistics = true;
        let screen = render(&app);
        assert!(screen.contains("Total games completed"));
        assert!(screen.contains("1st attempt completions"));
    }
}
