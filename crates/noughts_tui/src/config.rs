//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Mark;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Glyph drawn for cross.
    #[serde(default = "default_cross_glyph")]
    cross_glyph: char,

    /// Glyph drawn for zero.
    #[serde(default = "default_zero_glyph")]
    zero_glyph: char,

    /// Pause before the computer's move is shown, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_cross_glyph() -> char {
    'X'
}

fn default_zero_glyph() -> char {
    'O'
}

fn default_think_delay_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cross_glyph: default_cross_glyph(),
            zero_glyph: default_zero_glyph(),
            think_delay_ms: default_think_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl UiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            cross = %config.cross_glyph,
            zero = %config.zero_glyph,
            think_delay_ms = config.think_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Pause before the computer's move.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Glyph drawn for `mark`.
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::Cross => self.cross_glyph,
            Mark::Zero => self.zero_glyph,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for glyph in [self.cross_glyph, self.zero_glyph] {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::new(format!(
                    "Glyph {:?} would be invisible on the board",
                    glyph
                )));
            }
        }
        if self.cross_glyph == self.zero_glyph {
            return Err(ConfigError::new(format!(
                "Both marks use the glyph {:?}",
                self.cross_glyph
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
