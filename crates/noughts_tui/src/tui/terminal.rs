//! Ratatui-backed [`Display`] and [`Input`].

use crate::frontend::{Display, Input, MessageSlot};
use crate::tui::input::{KeySource, move_cursor, parse_coordinates, parse_yes_no};
use crate::tui::ui::{self, Screen, Theme};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use derive_more::{Display as DisplayDerive, Error};
use noughts_core::{Board, Coord, Mark, Score};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, instrument};

/// Asked until the human picks a mark.
pub const MARK_PROMPT: &str = "Cross or zero? (c / z): ";
/// Asked on every human turn.
pub const MOVE_PROMPT: &str = "Choose position (x y): ";
/// Asked after every game.
pub const REPLAY_PROMPT: &str = "Would you like to play again? (y / n): ";

/// The human pressed Ctrl-C at a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
#[display("Interrupted by Ctrl-C")]
pub struct Interrupted;

/// One submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Typed text, submitted with Enter.
    Text(String),
    /// Enter pressed on the highlighted cell with nothing typed.
    Cursor(Coord),
}

/// Terminal front end: draws the [`Screen`] and reads keys.
pub struct TerminalUi<B: Backend, K> {
    terminal: Terminal<B>,
    keys: K,
    screen: Screen,
    theme: Theme,
    cursor: Coord,
}

impl<B, K> TerminalUi<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    /// Wraps a terminal and a key source.
    pub fn new(terminal: Terminal<B>, keys: K, theme: Theme) -> Self {
        Self {
            terminal,
            keys,
            screen: Screen::default(),
            theme,
            cursor: Coord::new(1, 1),
        }
    }

    /// What is currently on screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Redraws the screen at the terminal's current size.
    pub fn render(&mut self) -> Result<()> {
        let screen = &self.screen;
        let theme = &self.theme;
        self.terminal.draw(|frame| ui::draw(frame, screen, theme))?;
        Ok(())
    }

    /// Shows `prompt` and collects keys until Enter.
    ///
    /// With `pick_cell` set the arrow keys move a highlighted cell, and Enter
    /// on an empty line submits that cell.
    pub fn read_entry(&mut self, prompt: &str, pick_cell: bool) -> Result<Entry> {
        self.screen.set_message(MessageSlot::Prompt, prompt);
        self.screen.input.clear();
        self.screen.cursor = pick_cell.then_some(self.cursor);

        let entry = self.collect_entry(pick_cell);

        self.screen.set_message(MessageSlot::Prompt, "");
        self.screen.input.clear();
        self.screen.cursor = None;
        entry
    }

    fn collect_entry(&mut self, pick_cell: bool) -> Result<Entry> {
        loop {
            self.render()?;

            let Event::Key(key) = self.keys.next_event()? else {
                continue;
            };

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    debug!("Ctrl-C at prompt");
                    return Err(Interrupted.into());
                }
                KeyCode::Enter => {
                    if pick_cell && self.screen.input.trim().is_empty() {
                        return Ok(Entry::Cursor(self.cursor));
                    }
                    return Ok(Entry::Text(std::mem::take(&mut self.screen.input)));
                }
                KeyCode::Backspace => {
                    self.screen.input.pop();
                }
                KeyCode::Char(c) => self.screen.input.push(c),
                code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down)
                    if pick_cell =>
                {
                    self.cursor = move_cursor(self.cursor, code);
                    self.screen.cursor = Some(self.cursor);
                }
                _ => {}
            }
        }
    }

    fn reject(&mut self, notice: &str) {
        debug!(notice, "Rejected input");
        self.screen.set_message(MessageSlot::Notice, notice);
    }

    fn accept(&mut self) {
        self.screen.set_message(MessageSlot::Notice, "");
    }
}

impl<B, K> Display for TerminalUi<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    fn show_board(&mut self, board: &Board) -> Result<()> {
        self.screen.board = *board;
        self.render()
    }

    fn show_message(&mut self, text: &str, slot: MessageSlot) -> Result<()> {
        self.screen.set_message(slot, text);
        self.render()
    }

    fn show_score(&mut self, score: &Score) -> Result<()> {
        self.screen.score = *score;
        self.render()
    }
}

impl<B, K> Input for TerminalUi<B, K>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    K: KeySource,
{
    #[instrument(skip(self))]
    fn ask_mark_choice(&mut self) -> Result<Mark> {
        loop {
            let Entry::Text(text) = self.read_entry(MARK_PROMPT, false)? else {
                continue;
            };

            match Mark::from_choice(&text) {
                Ok(mark) => {
                    self.accept();
                    return Ok(mark);
                }
                Err(err) => self.reject(&err.to_string()),
            }
        }
    }

    #[instrument(skip(self, board))]
    fn ask_move_coordinates(&mut self, board: &Board) -> Result<Coord> {
        loop {
            let coord = match self.read_entry(MOVE_PROMPT, true)? {
                Entry::Cursor(coord) => coord,
                Entry::Text(text) => match parse_coordinates(&text) {
                    Some(coord) => coord,
                    None => {
                        self.reject("Enter two numbers from 1 to 3, column first");
                        continue;
                    }
                },
            };

            if board.get(coord).is_some_and(|cell| cell.is_empty()) {
                self.cursor = coord;
                self.accept();
                return Ok(coord);
            }
            self.reject(&format!(
                "Cell {} {} is already taken",
                coord.col + 1,
                coord.row + 1
            ));
        }
    }

    #[instrument(skip(self))]
    fn ask_replay(&mut self) -> Result<bool> {
        loop {
            let Entry::Text(text) = self.read_entry(REPLAY_PROMPT, false)? else {
                continue;
            };

            match parse_yes_no(&text) {
                Some(answer) => {
                    self.accept();
                    return Ok(answer);
                }
                None => self.reject("Please answer y or n"),
            }
        }
    }
}
