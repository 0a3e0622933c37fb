//! Simulation configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ludo::{BoardConfig, PlayerId};
use tracing::{debug, info, instrument};

/// How a computer player picks among its legal moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    /// Uniformly random legal move.
    #[default]
    Random,
    /// Captures first, then home entry, then leaving base, then the leader.
    Eager,
}

/// Configuration for a run of simulated games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct SimConfig {
    /// Board geometry.
    board: BoardConfig,

    /// Seed for dice and computer players; random when absent.
    seed: Option<u64>,

    /// Player turns after which a game is abandoned without a winner.
    max_turns: u32,

    /// Strategy per seat, in seat order. Missing seats play [`Strategy::default`].
    strategies: Vec<Strategy>,

    /// Keep a per-roll event log in each report.
    record_events: bool,
}

#[instrument]
fn default_max_turns() -> u32 {
    2_000
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            seed: None,
            max_turns: default_max_turns(),
            strategies: Vec::new(),
            record_events: false,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(players = config.board.players(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the board geometry and the strategy list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board
            .validate()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        if self.strategies.len() > usize::from(self.board.players()) {
            return Err(ConfigError::new(format!(
                "{} strategies given for {} players",
                self.strategies.len(),
                self.board.players()
            )));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::new("max_turns must be positive"));
        }
        Ok(())
    }

    /// Strategy for a seated player.
    pub fn strategy_for(&self, player: PlayerId) -> Strategy {
        usize::from(player.get())
            .checked_sub(1)
            .and_then(|seat| self.strategies.get(seat))
            .copied()
            .unwrap_or_default()
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimConfig::from_toml("").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(*config.max_turns(), 2_000);
    }

    #[test]
    fn test_strategy_per_seat() {
        let config = SimConfig::from_toml(
            r#"
            strategies = ["eager", "random", "eager"]

            [board]
            players = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy_for(PlayerId::new(1)), Strategy::Eager);
        assert_eq!(config.strategy_for(PlayerId::new(2)), Strategy::Random);
        assert_eq!(config.strategy_for(PlayerId::new(3)), Strategy::Eager);
        assert_eq!(config.strategy_for(PlayerId::new(4)), Strategy::Random);
    }

    #[test]
    fn test_too_many_strategies() {
        let err = SimConfig::from_toml(
            r#"
            strategies = ["eager", "eager", "eager"]
            [board]
            players = 2
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("strategies"));
    }

    #[test]
    fn test_bad_board_rejected() {
        let err = SimConfig::from_toml("[board]\nplayers = 3\ntrack_length = 40\n").unwrap_err();
        assert!(err.message.contains("multiple"));
    }

    #[test]
    fn test_strategy_names_round_trip() {
        for strategy in Strategy::iter() {
            assert_eq!(Strategy::from_str(&strategy.to_string()).unwrap(), strategy);
        }
    }

    #[test]
    fn test_setters_chain() {
        let config = SimConfig::default().with_seed(Some(9)).with_max_turns(50);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.max_turns(), 50);
    }
}
