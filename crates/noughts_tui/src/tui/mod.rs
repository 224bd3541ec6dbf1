//! Terminal UI for noughts.

pub mod context;
pub mod input;
pub mod terminal;
pub mod ui;

use crate::config::UiConfig;
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::CrosstermKeys;
use noughts_core::{MinimaxSolver, Score};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use terminal::TerminalUi;
use tracing::{error, info, instrument, warn};
use ui::Theme;

pub use terminal::Interrupted;

type TerminalStep = fn() -> io::Result<()>;

/// Restores the terminal when dropped, however the run ends.
struct RawModeGuard {
    restore: TerminalStep,
}

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        Self::enter_with(enable_raw_mode, enter_alternate_screen, restore_terminal)
    }

    /// Runs `enable`, then `setup`. Once `enable` succeeds, `restore` runs on
    /// drop even if `setup` fails.
    fn enter_with(
        enable: TerminalStep,
        setup: TerminalStep,
        restore: TerminalStep,
    ) -> io::Result<Self> {
        enable()?;
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

fn enter_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)
}

fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    raw
}

/// Runs games in the alternate screen until the human stops.
///
/// The terminal is restored whether the games end normally or not.
#[instrument(skip(config))]
pub fn run(config: &UiConfig) -> Result<Score> {
    info!("Starting noughts TUI");

    let _guard = RawModeGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let frontend = TerminalUi::new(terminal, CrosstermKeys, Theme::from_config(config));
    let mut orchestrator = Orchestrator::new(frontend, MinimaxSolver::new())
        .with_think_delay(config.think_delay());

    let res = orchestrator.run();

    if let Err(err) = &res {
        if err.downcast_ref::<Interrupted>().is_some() {
            info!("Interrupted by user");
        } else {
            error!(error = ?err, "Game loop error");
        }
    }

    res
}
