//! Arena configuration loaded from TOML.

use alpha_beta_engine::EngineConfig;
use isolation_core::{GameState, IsolationError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    /// Wall-clock budget for each decision
    pub time_per_move_ms: u64,
    /// Print the board after every move
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            time_per_move_ms: 150,
            verbose: true,
        }
    }
}

impl GameConfig {
    pub fn time_per_move(&self) -> Duration {
        Duration::from_millis(self.time_per_move_ms)
    }

    pub fn validate(self) -> Result<Self> {
        GameState::new(self.width, self.height)?;
        if self.time_per_move_ms == 0 {
            return Err(IsolationError::Configuration(
                "time_per_move_ms must be positive".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Full arena file: `[game]` and `[engine]` tables.
///
/// ```toml
/// [game]
/// width = 5
/// height = 5
/// time_per_move_ms = 300
///
/// [engine]
/// strategy = "offensive"
/// max_depth = 8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub game: GameConfig,
    pub engine: EngineConfig,
}

impl ArenaConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| IsolationError::Configuration(e.to_string()))?;
        Ok(Self {
            game: config.game.validate()?,
            engine: config.engine.validate()?,
        })
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            IsolationError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alpha_beta_engine::Strategy;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::from_toml_str("").unwrap();
        assert_eq!(config.game.width, 7);
        assert_eq!(config.game.height, 7);
        assert_eq!(config.game.time_per_move(), Duration::from_millis(150));
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_both_tables() {
        let toml = r#"
            [game]
            width = 5
            height = 4
            verbose = false

            [engine]
            strategy = "standard"
            prune = false
        "#;
        let config = ArenaConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.game.width, 5);
        assert_eq!(config.game.height, 4);
        assert!(!config.game.verbose);
        assert_eq!(config.engine.strategy, Strategy::Standard);
        assert!(!config.engine.prune);
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let err = ArenaConfig::from_toml_str("[game]\nwidth = 12\nheight = 11").unwrap_err();
        assert!(matches!(err, IsolationError::Configuration(_)));
    }

    #[test]
    fn test_zero_time_is_rejected() {
        assert!(ArenaConfig::from_toml_str("[game]\ntime_per_move_ms = 0").is_err());
    }
}
