//! Alpha-Beta Isolation Agent
//!
//! Iterative-deepening minimax with alpha-beta pruning and a
//! liberty-difference evaluation. Each completed depth publishes its move,
//! so the arbiter always has the deepest finished answer when time runs out.

mod config;
mod eval;
mod search;

use isolation_core::{
    ActionSlot, Agent, Context, Decision, GameState, SearchLimits, TimeControl,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use config::EngineConfig;
pub use eval::{Evaluator, Strategy};
pub use search::{alpha_beta_search, SearchOutcome, SearchStats};

/// What the engine leaves in its context between turns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMemo {
    /// Turns this engine has played in the current game
    pub turns: u32,
    /// Deepest completed depth on the last turn
    pub last_depth: u8,
    /// Nodes searched over all turns
    pub total_nodes: u64,
}

/// Isolation agent using iterative deepening over alpha-beta search.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    config: EngineConfig,
    rng: StdRng,
    /// Statistics of the most recent turn
    stats: SearchStats,
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches depth 1, 2, ... publishing every completed depth into `slot`.
    ///
    /// The ceiling is the smallest of `limits.depth`, the configured
    /// `max_depth` and the number of open cells. Returns the deepest
    /// completed depth, or None if not even depth 1 finished.
    pub fn iterative_deepening(
        &mut self,
        state: &GameState,
        limits: &SearchLimits,
        slot: &ActionSlot,
    ) -> Option<u8> {
        self.stats = SearchStats::default();
        let tc: TimeControl = limits
            .time_control
            .clone()
            .with_check_interval(self.config.check_interval);

        let open = u8::try_from(state.open_cells()).unwrap_or(u8::MAX);
        let ceiling = limits.depth.min(self.config.max_depth).min(open).max(1);

        let mut completed = None;
        for depth in 1..=ceiling {
            let outcome = alpha_beta_search(state, depth, &self.config, &mut self.stats, &tc);
            if outcome.stopped {
                debug!(depth, nodes = self.stats.nodes, "depth interrupted");
                break;
            }
            let Some((action, score)) = outcome.best_move else {
                break;
            };

            slot.publish(Decision::new(action, depth, score));
            self.stats.completed_depth = depth;
            completed = Some(depth);
            debug!(
                depth,
                %action,
                score,
                nodes = self.stats.nodes,
                cutoffs = self.stats.cutoffs,
                "depth completed"
            );

            // A won or lost position does not change with more depth.
            if score.is_infinite() {
                break;
            }
        }
        completed
    }

    fn update_memo(&self, context: &mut Context) {
        let mut memo = context
            .take()
            .and_then(|value| match serde_json::from_value::<SearchMemo>(value) {
                Ok(memo) => Some(memo),
                Err(e) => {
                    warn!("discarding unreadable context: {e}");
                    None
                }
            })
            .unwrap_or_default();

        memo.turns += 1;
        memo.last_depth = self.stats.completed_depth;
        memo.total_nodes += self.stats.nodes;

        match serde_json::to_value(memo) {
            Ok(value) => *context = Some(value),
            Err(e) => warn!("failed to store context: {e}"),
        }
    }
}

impl Agent for AlphaBetaEngine {
    fn get_action(
        &mut self,
        state: &GameState,
        limits: &SearchLimits,
        slot: &ActionSlot,
        context: &mut Context,
    ) {
        if state.ply_count() < 2 {
            self.stats = SearchStats::default();
            if let Some(&action) = state.actions().choose(&mut self.rng) {
                slot.publish(Decision::new(action, 0, 0.0));
            }
        } else {
            self.iterative_deepening(state, limits, slot);
        }
        self.update_memo(context);
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn new_game(&mut self) {
        self.stats = SearchStats::default();
    }
}
