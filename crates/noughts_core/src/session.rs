//! Game session state machine.
//!
//! ```text
//! AwaitingMarkChoice ──start──▶ HumanTurn ⇄ ComputerTurn ──▶ Finished
//!          ▲                                                    │
//!          └──────────────────────── restart ───────────────────┘
//! ```
//!
//! The score survives restarts. The result of a game is always read off
//! the board.

use crate::error::EngineError;
use crate::minimax::Opponent;
use crate::score::Score;
use crate::types::{Coord, GameResult, Mark, Seats, Side};
use crate::Board;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Waiting for the human to pick cross or zero.
    #[default]
    #[display("awaiting mark choice")]
    AwaitingMarkChoice,
    /// The human is to move.
    #[display("human turn")]
    HumanTurn,
    /// The computer is to move.
    #[display("computer turn")]
    ComputerTurn,
    /// The game is over; see [`Session::result`].
    #[display("finished")]
    Finished,
}

impl Phase {
    /// The side to move, if a game is under way.
    pub fn to_move(self) -> Option<Side> {
        match self {
            Phase::HumanTurn => Some(Side::Human),
            Phase::ComputerTurn => Some(Side::Computer),
            Phase::AwaitingMarkChoice | Phase::Finished => None,
        }
    }

    fn turn_of(side: Side) -> Self {
        match side {
            Side::Human => Phase::HumanTurn,
            Side::Computer => Phase::ComputerTurn,
        }
    }
}

/// One player's sitting at the terminal: a sequence of games sharing a score.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    seats: Option<Seats>,
    phase: Phase,
    score: Score,
}

impl Session {
    /// Creates a session waiting for a mark choice, score at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the seat assignment, once a mark has been chosen.
    pub fn seats(&self) -> Option<Seats> {
        self.seats
    }

    /// Returns the score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Result of the current game, recomputed from the board.
    pub fn result(&self) -> GameResult {
        self.seats
            .map_or(GameResult::InProgress, |seats| self.board.evaluate(seats))
    }

    /// Seats the human with `human` and starts a game on an empty board.
    ///
    /// The human moves first iff they chose cross.
    ///
    /// # Errors
    ///
    /// [`EngineError::WrongPhase`] unless the session is awaiting a mark.
    #[instrument(skip(self))]
    pub fn start(&mut self, human: Mark) -> Result<Phase, EngineError> {
        self.require(Phase::AwaitingMarkChoice)?;

        let seats = Seats::new(human);
        self.board.reset();
        self.seats = Some(seats);
        self.phase = Phase::turn_of(seats.first_mover());

        info!(human = %seats.human(), computer = %seats.computer(), phase = %self.phase, "Game started");
        Ok(self.phase)
    }

    /// Applies the human's move.
    ///
    /// # Errors
    ///
    /// [`EngineError::WrongPhase`] outside the human's turn, or
    /// [`EngineError::IllegalMove`] for an occupied or off-board cell. The
    /// session is unchanged on error.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, coord: Coord) -> Result<Phase, EngineError> {
        self.require(Phase::HumanTurn)?;
        let seats = self.active_seats()?;

        self.board.apply_move(coord, seats.human())?;
        debug!(%coord, board = %self.board, "Human moved");

        Ok(self.advance(seats))
    }

    /// Asks `opponent` for the computer's move and applies it.
    ///
    /// # Errors
    ///
    /// [`EngineError::WrongPhase`] outside the computer's turn,
    /// [`EngineError::NoLegalMoves`] if the opponent has nothing to play, or
    /// [`EngineError::IllegalMove`] if it names a bad cell.
    #[instrument(skip(self, opponent), fields(opponent = opponent.name()))]
    pub fn play_computer<O>(&mut self, opponent: &mut O) -> Result<Coord, EngineError>
    where
        O: Opponent + ?Sized,
    {
        self.require(Phase::ComputerTurn)?;
        let seats = self.active_seats()?;

        let coord = opponent
            .choose_move(&self.board, seats)
            .ok_or(EngineError::NoLegalMoves)?;
        self.board.apply_move(coord, seats.computer())?;
        debug!(%coord, board = %self.board, "Computer moved");

        self.advance(seats);
        Ok(coord)
    }

    /// Clears the board and waits for a new mark choice. The score is kept.
    ///
    /// # Errors
    ///
    /// [`EngineError::WrongPhase`] unless the current game is finished.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.require(Phase::Finished)?;

        self.board.reset();
        self.seats = None;
        self.phase = Phase::AwaitingMarkChoice;

        info!(human = self.score.human(), computer = self.score.computer(), "Session restarted");
        Ok(())
    }

    fn require(&self, expected: Phase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn active_seats(&self) -> Result<Seats, EngineError> {
        self.seats.ok_or(EngineError::WrongPhase {
            expected: Phase::AwaitingMarkChoice,
            actual: self.phase,
        })
    }

    /// Moves to the next phase after a successful move.
    ///
    /// This is the only place the score changes, and it only runs on a
    /// move, which `Finished` never accepts.
    fn advance(&mut self, seats: Seats) -> Phase {
        let result = self.board.evaluate(seats);

        self.phase = if result.is_finished() {
            self.score.record(result);
            info!(%result, board = %self.board, "Game finished");
            Phase::Finished
        } else {
            match self.phase.to_move() {
                Some(side) => Phase::turn_of(side.opponent()),
                None => self.phase,
            }
        };

        self.phase
    }
}
