//! Game orchestration between the human and the computer.

use crate::frontend::{Display, Input, MessageSlot};
use anyhow::{Result, bail};
use noughts_core::{EngineError, GameResult, Opponent, Phase, Score, Session};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Title shown at the top-left of every screen.
pub const TITLE: &str = "Tic Tac Toe!";

/// Drives a [`Session`] through mark choice, turns, results and replays.
pub struct Orchestrator<F, O> {
    session: Session,
    frontend: F,
    opponent: O,
    think_delay: Duration,
}

impl<F, O> Orchestrator<F, O>
where
    F: Display + Input,
    O: Opponent,
{
    /// Creates an orchestrator with a fresh session.
    pub fn new(frontend: F, opponent: O) -> Self {
        Self {
            session: Session::new(),
            frontend,
            opponent,
            think_delay: Duration::ZERO,
        }
    }

    /// Pauses for `delay` before each computer move is applied.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Returns the frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Plays games until the human declines a replay.
    ///
    /// Returns the final score.
    #[instrument(skip(self), fields(opponent = self.opponent.name()))]
    pub fn run(&mut self) -> Result<Score> {
        info!("Starting game orchestration");

        loop {
            self.choose_mark()?;
            let result = self.play_game()?;
            self.announce(result)?;

            if !self.frontend.ask_replay()? {
                info!(
                    human = self.session.score().human(),
                    computer = self.session.score().computer(),
                    "Player left"
                );
                return Ok(*self.session.score());
            }

            self.session.restart()?;
        }
    }

    /// Redraws everything that changes between turns.
    fn refresh(&mut self) -> Result<()> {
        self.frontend.show_message(TITLE, MessageSlot::Title)?;
        self.frontend.show_score(self.session.score())?;
        self.frontend.show_board(self.session.board())
    }

    fn choose_mark(&mut self) -> Result<()> {
        self.refresh()?;
        self.frontend.show_message("", MessageSlot::Status)?;

        let mark = self.frontend.ask_mark_choice()?;
        let phase = self.session.start(mark)?;
        debug!(%mark, %phase, "Mark chosen");
        Ok(())
    }

    fn play_game(&mut self) -> Result<GameResult> {
        loop {
            self.refresh()?;

            match self.session.phase() {
                Phase::HumanTurn => self.human_turn()?,
                Phase::ComputerTurn => self.computer_turn()?,
                Phase::Finished => return Ok(self.session.result()),
                Phase::AwaitingMarkChoice => bail!("Game loop entered before a mark was chosen"),
            }
        }
    }

    fn human_turn(&mut self) -> Result<()> {
        self.frontend.show_message("Your turn...", MessageSlot::Status)?;
        let coord = self.frontend.ask_move_coordinates(self.session.board())?;

        match self.session.play_human(coord) {
            Ok(_) => self.frontend.show_message("", MessageSlot::Notice),
            Err(EngineError::IllegalMove(err)) => {
                // Input should have caught this; ask again.
                warn!(%err, "Input returned an illegal move");
                self.frontend.show_message(&err.to_string(), MessageSlot::Notice)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn computer_turn(&mut self) -> Result<()> {
        self.frontend.show_message("Enemy's turn...", MessageSlot::Status)?;

        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }

        let coord = self.session.play_computer(&mut self.opponent)?;
        debug!(%coord, "Computer played");
        Ok(())
    }

    fn announce(&mut self, result: GameResult) -> Result<()> {
        self.refresh()?;

        let text = match result {
            GameResult::HumanWin => "You won!",
            GameResult::ComputerWin => "Enemy won!",
            GameResult::Draw => "Draw!",
            GameResult::InProgress => bail!("Announcing a game that is still running"),
        };

        info!(%result, "Game over");
        self.frontend.show_message(text, MessageSlot::Status)
    }
}
