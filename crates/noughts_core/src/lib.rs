//! Noughts core - tic-tac-toe rules and a perfect-play opponent
//!
//! This crate holds everything about the game that does not touch a
//! terminal.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, move application and win/draw evaluation
//! - **Rules**: pure line and fullness checks over a board
//! - **Minimax**: exhaustive search picking the computer's move
//! - **Session**: mark choice, turn order, game end and the running score
//!
//! # Example
//!
//! ```
//! use noughts_core::{Mark, MinimaxSolver, Phase, Session};
//!
//! let mut session = Session::new();
//! assert_eq!(session.start(Mark::Zero)?, Phase::ComputerTurn);
//!
//! let mut solver = MinimaxSolver::new();
//! let coord = session.play_computer(&mut solver)?;
//! assert!(coord.is_corner());
//! # Ok::<(), noughts_core::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod minimax;
pub mod rules;
mod score;
mod session;
mod types;

// Crate-level exports - Board
pub use board::{Board, ParseBoardError};

// Crate-level exports - Errors
pub use error::{EngineError, IllegalMove, InvalidMarkChoice};

// Crate-level exports - Solver
pub use minimax::{MinimaxSolver, Opponent, ScoredMove, WIN_SCORE};

// Crate-level exports - Session and score
pub use score::Score;
pub use session::{Phase, Session};

// Crate-level exports - Game types
pub use types::{Cell, Coord, GameResult, Mark, Outcome, SIZE, Seats, Side};
