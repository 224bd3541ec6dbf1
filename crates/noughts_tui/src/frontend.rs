//! Collaborator traits the game loop talks to.
//!
//! The loop never touches the terminal itself. It hands state to a
//! [`Display`] and asks an [`Input`] for decisions. Input implementations
//! own their validation loop: they only return marks and cells that are
//! legal at the time of asking.

use anyhow::Result;
use noughts_core::{Board, Coord, Mark, Score};

/// Where a message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageSlot {
    /// Game title, top-left.
    Title,
    /// Whose turn it is, or how the game ended.
    Status,
    /// Rejected input and other short notices.
    Notice,
    /// Question being asked, bottom line.
    Prompt,
}

/// Presents game state.
pub trait Display {
    /// Shows the board.
    fn show_board(&mut self, board: &Board) -> Result<()>;

    /// Shows `text` in `slot`, replacing what was there. Empty text clears it.
    fn show_message(&mut self, text: &str, slot: MessageSlot) -> Result<()>;

    /// Shows the running score.
    fn show_score(&mut self, score: &Score) -> Result<()>;
}

/// Supplies the human's decisions.
pub trait Input {
    /// Asks until the human names one of the two marks.
    fn ask_mark_choice(&mut self) -> Result<Mark>;

    /// Asks until the human names an empty cell of `board`.
    fn ask_move_coordinates(&mut self, board: &Board) -> Result<Coord>;

    /// Asks whether to play another game.
    fn ask_replay(&mut self) -> Result<bool>;
}
