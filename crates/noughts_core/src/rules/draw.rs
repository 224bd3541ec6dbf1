//! Draw detection logic for tic-tac-toe.

use crate::{Board, Coord};

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    Coord::ALL.iter().all(|&coord| !board.is_empty(coord))
}
