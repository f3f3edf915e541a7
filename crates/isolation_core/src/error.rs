use thiserror::Error;

use crate::types::{Action, Player};

/// Errors raised by the game model and by engine setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsolationError {
    /// `GameState::result` was handed an action outside `actions()`.
    #[error("illegal move {action} for {player}")]
    IllegalMove { action: Action, player: Player },

    /// Invalid board dimensions, strategy names or config files.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An agent ran out of time without publishing a single decision.
    #[error("agent published no decision before the time budget expired")]
    NoDecision,
}

/// Convenience Result type for Isolation operations
pub type Result<T> = std::result::Result<T, IsolationError>;
