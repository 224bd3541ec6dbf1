//! Core domain types for tic-tac-toe.

use crate::error::InvalidMarkChoice;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// A mark a side places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Mark {
    /// Cross (moves first).
    #[display("cross")]
    Cross,
    /// Zero (moves second).
    #[display("zero")]
    Zero,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Zero,
            Mark::Zero => Mark::Cross,
        }
    }

    /// Whether the side holding this mark makes the first move of a game.
    pub fn moves_first(self) -> bool {
        matches!(self, Mark::Cross)
    }

    /// Key the human types to pick this mark.
    pub fn choice_key(self) -> char {
        match self {
            Mark::Cross => 'c',
            Mark::Zero => 'z',
        }
    }

    /// Parses a mark choice typed by the human (`c` or `z`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMarkChoice`] for anything other than a single
    /// recognized key.
    #[instrument]
    pub fn from_choice(input: &str) -> Result<Self, InvalidMarkChoice> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let key = chars.next().map(|c| c.to_ascii_lowercase());

        match (key, chars.next()) {
            (Some(key), None) => Mark::iter()
                .find(|mark| mark.choice_key() == key)
                .ok_or_else(|| InvalidMarkChoice::new(trimmed)),
            _ => Err(InvalidMarkChoice::new(trimmed)),
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Whether the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A 0-based board coordinate.
///
/// Coordinates are not validated on construction; the board rejects
/// anything outside `[0, 3)` when a move is applied.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("({}, {})", row, col)]
pub struct Coord {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Coord {
    /// Every cell in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Whether the coordinate lies on the board.
    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Translates the 1-based `x y` pair the human types (column first).
    ///
    /// Returns `None` when either value is outside `1..=3`.
    pub fn from_one_based(x: usize, y: usize) -> Option<Self> {
        let coord = Self::new(y.checked_sub(1)?, x.checked_sub(1)?);
        coord.is_on_board().then_some(coord)
    }

    /// Whether this cell is one of the four corners.
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }
}

/// Which participant a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// The person at the keyboard.
    #[display("human")]
    Human,
    /// The minimax opponent.
    #[display("computer")]
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Assignment of marks to sides for one game.
///
/// Built from the human's choice alone, so the two marks are always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seats {
    human: Mark,
    computer: Mark,
}

impl Seats {
    /// Seats the human with `human` and the computer with the other mark.
    pub fn new(human: Mark) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    /// The human's mark.
    pub fn human(self) -> Mark {
        self.human
    }

    /// The computer's mark.
    pub fn computer(self) -> Mark {
        self.computer
    }

    /// Returns the seats with the sides exchanged.
    ///
    /// Lets the solver evaluate a position from the human's point of view.
    pub fn swapped(self) -> Self {
        Self::new(self.computer)
    }

    /// Returns the side that plays `mark`.
    pub fn side_of(self, mark: Mark) -> Side {
        if mark == self.human {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// The side that makes the first move.
    pub fn first_mover(self) -> Side {
        if self.human.moves_first() {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// Maps a mark-level outcome onto the two sides.
    pub fn result_of(self, outcome: Outcome) -> GameResult {
        match outcome {
            Outcome::InProgress => GameResult::InProgress,
            Outcome::Draw => GameResult::Draw,
            Outcome::Won(mark) => match self.side_of(mark) {
                Side::Human => GameResult::HumanWin,
                Side::Computer => GameResult::ComputerWin,
            },
        }
    }
}

/// State of the board in terms of marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board is full with no completed line.
    Draw,
}

/// State of the game in terms of sides.
///
/// Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameResult {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// The human completed a line.
    #[display("human win")]
    HumanWin,
    /// The computer completed a line.
    #[display("computer win")]
    ComputerWin,
    /// Full board, no line.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// Whether the game has ended.
    pub fn is_finished(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::HumanWin => Some(Side::Human),
            GameResult::ComputerWin => Some(Side::Computer),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }
}
