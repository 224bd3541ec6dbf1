//! Exhaustive minimax search for the computer's move.
//!
//! The search walks the whole remaining game tree. A 3x3 board never needs
//! pruning beyond stopping at terminal positions.
//!
//! Scores are from the computer's point of view:
//!
//! | terminal position  | score         |
//! |--------------------|---------------|
//! | computer wins      | `10 - depth`  |
//! | human wins         | `depth - 10`  |
//! | draw               | `0`           |
//!
//! The depth term makes the solver take the fastest win and put off a loss
//! as long as possible.

use crate::rules::{check_winner, is_full};
use crate::{Board, Coord, Seats};
use derive_new::new;
use tracing::{debug, instrument, warn};

/// Base score of a won position before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Something that can pick the computer's move.
pub trait Opponent {
    /// Returns the opponent's display name.
    fn name(&self) -> &str;

    /// Picks a move for `seats.computer()`.
    ///
    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&mut self, board: &Board, seats: Seats) -> Option<Coord>;
}

/// A root move together with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ScoredMove {
    /// The candidate cell.
    pub coord: Coord,
    /// Score of the position after playing it, assuming best play after.
    pub score: i32,
}

/// Perfect-play tic-tac-toe opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxSolver;

impl MinimaxSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Returns the optimal move for the computer.
    ///
    /// Among equally scored moves the first in row-major order wins. The
    /// board is only borrowed, so it is identical before and after the call.
    /// Returns `None` if the board is full.
    #[instrument(skip(self, board), fields(board = %board, computer = %seats.computer()))]
    pub fn best_move(&self, board: &Board, seats: Seats) -> Option<Coord> {
        let (scored, nodes) = self.search_root(board, seats);

        let mut best: Option<ScoredMove> = None;
        for candidate in scored {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        match best {
            Some(choice) => {
                debug!(coord = %choice.coord, score = choice.score, nodes, "Solver chose move");
            }
            None => warn!("Solver asked to move on a full board"),
        }

        best.map(|choice| choice.coord)
    }

    /// Scores every legal move for the computer, in row-major order.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn score_moves(&self, board: &Board, seats: Seats) -> Vec<ScoredMove> {
        self.search_root(board, seats).0
    }

    fn search_root(&self, board: &Board, seats: Seats) -> (Vec<ScoredMove>, u64) {
        let mut search = Search::new(seats);

        let scored = board
            .legal_moves()
            .into_iter()
            .filter_map(|coord| {
                let next = board.with_move(coord, seats.computer()).ok()?;
                Some(ScoredMove::new(coord, search.minimax(&next, 0, false)))
            })
            .collect();

        (scored, search.nodes)
    }
}

impl Opponent for MinimaxSolver {
    fn name(&self) -> &str {
        "Enemy"
    }

    fn choose_move(&mut self, board: &Board, seats: Seats) -> Option<Coord> {
        self.best_move(board, seats)
    }
}

/// Counters and seats for one search.
///
/// Positions are passed down by value; the caller's board is never touched.
struct Search {
    seats: Seats,
    nodes: u64,
}

impl Search {
    fn new(seats: Seats) -> Self {
        Self { seats, nodes: 0 }
    }

    fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(winner) = check_winner(board) {
            return if winner == self.seats.computer() {
                WIN_SCORE - depth
            } else {
                depth - WIN_SCORE
            };
        }

        if is_full(board) {
            return 0;
        }

        let mark = if maximizing {
            self.seats.computer()
        } else {
            self.seats.human()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for coord in Coord::ALL {
            let Ok(next) = board.with_move(coord, mark) else {
                continue;
            };

            let score = self.minimax(&next, depth + 1, !maximizing);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
