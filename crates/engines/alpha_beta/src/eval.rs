//! Liberty-difference evaluation.

use isolation_core::{GameState, IsolationError, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How own mobility is weighed against the opponent's.
///
/// The evaluator returns `m * own - (1 - m) * opp`; each strategy picks `m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// m = 0.5
    Standard,
    /// m = 0.25: denying the opponent counts more than own mobility
    Offensive,
    /// m = 0.75: own mobility counts more than denying the opponent
    Defensive,
    /// m = ply_count / board_size: offensive early, defensive late
    #[default]
    Dynamic,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Standard,
        Strategy::Offensive,
        Strategy::Defensive,
        Strategy::Dynamic,
    ];

    /// Weight `m` on own liberties for this state.
    pub fn own_weight(self, state: &GameState) -> f64 {
        match self {
            Strategy::Standard => 0.5,
            Strategy::Offensive => 0.25,
            Strategy::Defensive => 0.75,
            Strategy::Dynamic => f64::from(state.ply_count()) / state.board_size() as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::Offensive => "offensive",
            Strategy::Defensive => "defensive",
            Strategy::Dynamic => "dynamic",
        }
    }
}

impl FromStr for Strategy {
    type Err = IsolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                IsolationError::Configuration(format!(
                    "unknown strategy `{s}` (expected standard, offensive, defensive or dynamic)"
                ))
            })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateless heuristic over non-terminal states.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    strategy: Strategy,
}

impl Evaluator {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Scores `state` from `player`'s point of view.
    ///
    /// Only meaningful on non-terminal states; search checks
    /// `terminal_test` before it ever gets here.
    pub fn score(&self, state: &GameState, player: Player) -> f64 {
        let own = state.liberty_count(state.location(player)) as f64;
        let opp = state.liberty_count(state.location(player.other())) as f64;
        let m = self.strategy.own_weight(state);
        m * own - (1.0 - m) * opp
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
