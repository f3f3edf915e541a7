//! Arbiter for playing one game between two agents

use isolation_core::{
    timed_decision, Action, Agent, Context, GameState, Player, Result, SearchLimits,
};
use std::fmt;
use tracing::{info, warn};

use crate::config::GameConfig;

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// A player has no liberties
    Isolated,
    /// The loser published nothing within its budget
    NoDecision,
    /// The loser published an action that is not legal
    IllegalMove(Action),
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Isolated => write!(f, "isolation"),
            EndReason::NoDecision => write!(f, "forfeit (no move in time)"),
            EndReason::IllegalMove(action) => write!(f, "forfeit (illegal move {action})"),
        }
    }
}

/// Outcome and move list of a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Player,
    pub reason: EndReason,
    /// Every applied action, player one first
    pub history: Vec<Action>,
    pub final_state: GameState,
}

/// Runs games under a [`GameConfig`].
pub struct Arbiter {
    config: GameConfig,
}

impl Arbiter {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game, `first` moving as player one.
    ///
    /// Each turn gets a fresh clock of `time_per_move`. A player who
    /// publishes nothing, or an illegal action, loses on the spot.
    ///
    /// # Errors
    /// Fails only if the configured board cannot be built.
    pub fn play_game(&self, first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord> {
        let mut state = GameState::new(self.config.width, self.config.height)?;
        let mut contexts: [Context; 2] = [None, None];
        let mut history = Vec::new();
        first.new_game();
        second.new_game();

        info!(
            first = first.name(),
            second = second.name(),
            width = self.config.width,
            height = self.config.height,
            "game started"
        );

        while !state.terminal_test() {
            let player = state.player();
            let agent: &mut dyn Agent = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };

            let limits = SearchLimits::time(self.config.time_per_move());
            let context = contexts[player.idx()].take();
            let report = timed_decision(agent, &state, limits, context);
            contexts[player.idx()] = report.context;

            let Some(decision) = report.decision else {
                warn!(%player, agent = agent.name(), "no move published in time");
                return Ok(self.finish(player.other(), EndReason::NoDecision, history, state));
            };

            let next = match state.result(decision.action) {
                Ok(next) => next,
                Err(e) => {
                    warn!(%player, agent = agent.name(), "forfeit: {e}");
                    let reason = EndReason::IllegalMove(decision.action);
                    return Ok(self.finish(player.other(), reason, history, state));
                }
            };

            info!(
                ply = state.ply_count() + 1,
                %player,
                action = %decision.action,
                depth = decision.depth,
                score = decision.score,
                elapsed_ms = report.elapsed.as_millis() as u64,
                interrupted = report.interrupted,
                "move applied"
            );
            history.push(decision.action);
            state = next;

            if self.config.verbose {
                println!("{} plays {} (depth {})", player, decision.action, decision.depth);
                println!("{state}");
            }
        }

        // Terminal states always have a winner.
        let winner = state.winner().unwrap_or(state.player().other());
        Ok(self.finish(winner, EndReason::Isolated, history, state))
    }

    fn finish(
        &self,
        winner: Player,
        reason: EndReason,
        history: Vec<Action>,
        final_state: GameState,
    ) -> GameRecord {
        info!(%winner, %reason, plies = history.len(), "game over");
        GameRecord {
            winner,
            reason,
            history,
            final_state,
        }
    }
}

#[cfg(test)]
#[path = "arbiter_tests.rs"]
mod arbiter_tests;
