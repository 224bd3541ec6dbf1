//! Running win counters for one process.

use crate::types::{GameResult, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Wins per side since the process started.
///
/// Only the session updates it, once per finished game. Draws leave both
/// counters alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Games won by the human.
    human: u32,
    /// Games won by the computer.
    computer: u32,
}

impl Score {
    /// Both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A score with the given counters, e.g. for display tests.
    pub fn from_wins(human: u32, computer: u32) -> Self {
        Self { human, computer }
    }

    pub(crate) fn record(&mut self, result: GameResult) {
        match result.winner() {
            Some(Side::Human) => self.human = self.human.saturating_add(1),
            Some(Side::Computer) => self.computer = self.computer.saturating_add(1),
            None => {}
        }
        debug!(human = self.human, computer = self.computer, %result, "Score updated");
    }
}
