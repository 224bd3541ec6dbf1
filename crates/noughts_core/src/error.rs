//! Error types for the game engine.

use crate::session::Phase;
use crate::types::Coord;
use derive_more::{Display, Error, From};

/// A move the board refused to apply.
///
/// The board is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// Row or column is outside `[0, 3)`.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(Coord),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Coord),
}

impl IllegalMove {
    /// The coordinate that was rejected.
    pub fn coord(self) -> Coord {
        match self {
            IllegalMove::OutOfBounds(coord) | IllegalMove::Occupied(coord) => coord,
        }
    }
}

impl std::error::Error for IllegalMove {}

/// Input that does not name one of the two marks.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{:?} is not a mark, expected 'c' or 'z'", input)]
pub struct InvalidMarkChoice {
    /// The rejected input, trimmed.
    pub input: String,
}

impl InvalidMarkChoice {
    /// Creates a new invalid mark choice error.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Anything the engine can refuse.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The move was out of range or onto an occupied cell.
    #[from]
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// The mark choice was not recognized.
    #[from]
    #[display("Invalid mark choice: {}", _0)]
    InvalidMarkChoice(InvalidMarkChoice),

    /// The operation is not allowed in the session's current phase.
    #[display("Expected phase '{}' but session is in '{}'", expected, actual)]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session was in.
        actual: Phase,
    },

    /// The opponent was asked to move on a full board.
    #[display("No legal moves left on the board")]
    NoLegalMoves,
}
