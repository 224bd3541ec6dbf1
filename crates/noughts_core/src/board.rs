//! The 3x3 board and its move operations.

use crate::error::IllegalMove;
use crate::rules;
use crate::types::{Cell, Coord, GameResult, Mark, Outcome, SIZE, Seats};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The only mutation is [`Board::apply_move`], which refuses occupied or
/// off-board cells. [`Board::with_move`] is the non-mutating variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows, top to bottom.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Gets the cell at `coord`, or `None` off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Checks if the cell at `coord` is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Every empty cell in row-major order.
    ///
    /// Computed fresh on each call.
    pub fn legal_moves(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// Places `mark` at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfBounds`] if `coord` is off the board and
    /// [`IllegalMove::Occupied`] if the cell already holds a mark. The board
    /// is unchanged on error.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, coord: Coord, mark: Mark) -> Result<(), IllegalMove> {
        *self.empty_cell_mut(coord)? = Cell::Marked(mark);
        Ok(())
    }

    /// Returns a copy of the board with `mark` placed at `coord`.
    ///
    /// `self` is left untouched, so callers exploring hypothetical moves
    /// never need to undo anything.
    ///
    /// # Errors
    ///
    /// Same as [`Board::apply_move`].
    pub fn with_move(&self, coord: Coord, mark: Mark) -> Result<Self, IllegalMove> {
        let mut next = *self;
        *next.empty_cell_mut(coord)? = Cell::Marked(mark);
        Ok(next)
    }

    fn empty_cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, IllegalMove> {
        let cell = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(IllegalMove::OutOfBounds(coord))?;

        if cell.is_empty() {
            Ok(cell)
        } else {
            Err(IllegalMove::Occupied(coord))
        }
    }

    /// Win, draw or in-progress in terms of marks.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = rules::check_winner(self) {
            Outcome::Won(mark)
        } else if rules::is_full(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Win, draw or in-progress in terms of the human and the computer.
    pub fn evaluate(&self, seats: Seats) -> GameResult {
        seats.result_of(self.outcome())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.cells.iter().enumerate() {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Marked(Mark::Cross) => 'X',
                    Cell::Marked(Mark::Zero) => 'O',
                })
                .collect();
            f.write_str(&line)?;
            if idx + 1 < SIZE {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

/// A board string that is not three rows of three cells.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot parse board {:?}: {}", input, reason)]
pub struct ParseBoardError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the compact form produced by `Display`: rows separated by `/`,
    /// `x`/`X` for cross, `o`/`O` for zero, `.` or `_` for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseBoardError {
            input: s.to_string(),
            reason,
        };

        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(err("expected three rows"));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != SIZE {
                return Err(err("expected three cells per row"));
            }
            for (c, ch) in chars.into_iter().enumerate() {
                cells[r][c] = match ch.to_ascii_lowercase() {
                    'x' => Cell::Marked(Mark::Cross),
                    'o' => Cell::Marked(Mark::Zero),
                    '.' | '_' => Cell::Empty,
                    _ => return Err(err("unknown cell symbol")),
                };
            }
        }

        Ok(Self::from_rows(cells))
    }
}
