use isolation_core::{IsolationError, Result, DEFAULT_CHECK_INTERVAL};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::eval::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation
    pub strategy: Strategy,

    // Search
    pub max_depth: u8, // Iterative deepening ceiling
    pub prune: bool,   // false runs plain depth-limited minimax
    pub check_interval: u64,

    // Opening move RNG (None = seeded from the OS)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Dynamic,
            max_depth: 32,
            prune: true,
            check_interval: DEFAULT_CHECK_INTERVAL,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| IsolationError::Configuration(e.to_string()))?;
        config.validate()
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            IsolationError::Configuration(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(self) -> Result<Self> {
        if self.max_depth == 0 {
            return Err(IsolationError::Configuration(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}
