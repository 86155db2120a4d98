//! TUI (Terminal User Interface) module for Evil Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringGuess`: letter keys submit a guess, `Esc` quits
//! - `GameOver`: `N` starts a new game, `Esc` quits

use crate::error::HangmanError;
use crate::game_state::{GameInterface, GameResult, GameSettings, TurnView, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const PATTERN_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    /// Game has ended - outcome stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: Option<&'a TurnView>,
    max_guesses: u32,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: Option<TurnView>,
    max_guesses: u32,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: None,
            max_guesses: 0,
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            max_guesses: self.max_guesses,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Pattern
                Constraint::Length(3), // Remaining guesses
                Constraint::Min(5),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_pattern(f, chunks[1], ctx.view);
        Self::render_remaining(f, chunks[2], ctx.view, ctx.max_guesses);
        Self::render_info(f, chunks[3], ctx);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("EVIL HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_pattern(f: &mut Frame, area: Rect, view: Option<&TurnView>) {
        let pattern = view.map_or("", |v| v.pattern.as_str());
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {pattern}"), PATTERN_STYLE)),
        ];
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_remaining(f: &mut Frame, area: Rect, view: Option<&TurnView>, max_guesses: u32) {
        let remaining = view.map_or(0, |v| v.remaining);
        let ratio = if max_guesses == 0 {
            0.0
        } else {
            (f64::from(remaining) / f64::from(max_guesses)).clamp(0.0, 1.0)
        };
        let color = if ratio > 0.5 {
            Color::Green
        } else if ratio > 0.2 {
            Color::Yellow
        } else {
            Color::Red
        };
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Guesses left")
                    .borders(Borders::ALL),
            )
            .gauge_style(Style::default().fg(color))
            .ratio(ratio)
            .label(format!("{remaining} / {max_guesses}"));
        f.render_widget(gauge, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = Vec::new();

        if let Some(view) = ctx.view {
            let guessed: Vec<String> = view.guessed.iter().map(char::to_string).collect();
            lines.push(Line::from(vec![
                Span::styled("Guessed: ", INFO_STYLE),
                Span::raw(guessed.join(" ")),
            ]));
            if let Some(count) = view.candidate_count {
                lines.push(Line::from(vec![
                    Span::styled("Candidate words: ", INFO_STYLE),
                    Span::raw(count.to_string()),
                ]));
            }
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            let style = if ctx.state == TuiState::GameOver {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type a letter to guess | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(match self.state {
                    TuiState::EnteringGuess => self.handle_guess_input(key),
                    TuiState::GameOver => self.handle_game_over_input(key),
                })
            }
            _other => {
                debug_log!("handle_input() - Ignoring event: {:?}", _other);
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let letter = c.to_ascii_lowercase();
                info_log!("handle_guess_input() - Guess '{}'", letter);
                Some(UserAction::Guess(letter))
            }
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            _ => None,
        }
    }

    fn handle_game_over_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => {
                self.error_message = "The game is over. Press N for a new game.".to_string();
                None
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_intro(&mut self, settings: &GameSettings, word_count: usize) {
        self.max_guesses = u32::try_from(settings.max_guesses).unwrap_or(0);
        self.message = format!(
            "Guess the {}-letter word. You may miss {} times.",
            settings.length, settings.max_guesses
        );
        if settings.show_candidates {
            self.status = format!("Loaded {word_count} candidate words");
        }
        self.draw_or_log();
    }

    fn display_turn(&mut self, view: &TurnView) {
        self.view = Some(view.clone());
        self.state = TuiState::EnteringGuess;
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Error handling input: {}", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_guess_result(&mut self, letter: char, occurrences: usize) {
        let upper = letter.to_ascii_uppercase();
        self.status = match occurrences {
            0 => format!("Sorry, there are no {upper}'s"),
            1 => format!("Yes, there is one {upper}"),
            n => format!("Yes, there are {n} {upper}'s"),
        };
        self.draw_or_log();
    }

    fn display_rejection(&mut self, error: &HangmanError) {
        self.error_message = match error {
            HangmanError::DuplicateGuess(letter) => {
                format!("You already guessed '{}'", letter.to_ascii_uppercase())
            }
            other => other.to_string(),
        };
        self.draw_or_log();
    }

    fn display_game_over(&mut self, result: &GameResult) {
        self.state = TuiState::GameOver;
        let (message, status) = match result {
            GameResult::Won { word } => (format!("✓ You beat me! The word was {word}"), "You win"),
            GameResult::Lost { word } => (format!("The word was {word}"), "Out of guesses"),
        };
        self.message = message;
        self.status = format!("Game Over - {status}");
        self.draw_or_log();
    }

    fn display_no_words_message(&mut self, length: usize) {
        self.state = TuiState::GameOver;
        self.message = format!("The dictionary has no {length}-letter words.");
        self.status = "Error: No candidate words".to_string();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, word_count: usize) {
        self.view = None;
        self.state = TuiState::EnteringGuess;
        self.error_message.clear();
        self.message = "New game started.".to_string();
        self.status = if word_count == 0 {
            "New game - no candidate words".to_string()
        } else {
            "New game - guess a letter".to_string()
        };
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
