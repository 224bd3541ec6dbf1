//! Noughts TUI - terminal front end for the noughts engine
//!
//! The game loop in [`orchestrator`] only talks to the [`frontend`]
//! traits; [`tui`] implements them on a ratatui terminal.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod frontend;
pub mod orchestrator;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, UiConfig};

// Crate-level exports - Game loop and collaborators
pub use frontend::{Display, Input, MessageSlot};
pub use orchestrator::{Orchestrator, TITLE};
