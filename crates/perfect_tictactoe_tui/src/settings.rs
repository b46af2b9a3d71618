//! Controller settings loaded from TOML.

use clap::ValueEnum;
use derive_more::{Display, Error};
use perfect_tictactoe::{Player, SearchConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::cli::Cli;

/// Which side takes the first move in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FirstPlayer {
    /// The person at the keyboard opens.
    #[default]
    Human,
    /// The engine opens.
    Computer,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Computer => Player::Computer,
        }
    }
}

/// User-configurable settings for the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Who takes the first move in each game.
    pub first_player: FirstPlayer,
    /// Pause before the computer replies, in milliseconds.
    pub computer_delay_ms: u64,
    /// Search settings for the computer.
    pub search: SearchConfig,
    /// Where log output goes while the terminal UI is up.
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            computer_delay_ms: 400,
            search: SearchConfig::default(),
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?settings, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path`, or returns defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(first) = cli.first {
            self.first_player = first;
        }
        if let Some(delay) = cli.delay_ms {
            self.computer_delay_ms = delay;
        }
        if let Some(scoring) = cli.scoring {
            self.search.scoring = scoring;
        }
        if let Some(strategy) = cli.strategy {
            self.search.strategy = strategy;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
