//! Depth-limited minimax with alpha-beta pruning

use isolation_core::{Action, GameState, Player, TimeControl};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::eval::Evaluator;

/// Counters for one or more searches. Owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Successor states visited
    pub nodes: u64,
    /// Evaluator calls at the depth cutoff
    pub evaluations: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Deepest fully searched depth (set by the iterative-deepening driver)
    pub completed_depth: u8,
}

/// Result from alpha_beta_search indicating whether search completed or was stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    /// Best root move and its score (None if there are no legal moves)
    pub best_move: Option<(Action, f64)>,
    /// True if search was stopped early due to time
    pub stopped: bool,
}

/// Searches `state` to `depth` plies for the player to move.
///
/// Root moves are tried in `actions()` order and the first move is replaced
/// only by a strictly better one, so ties go to the earliest move.
///
/// # Arguments
/// * `state` - The state to search
/// * `depth` - Search depth in plies
/// * `config` - Evaluation strategy and pruning switch
/// * `stats` - Counters for nodes, evaluations and cutoffs
/// * `tc` - Time control for aborting search when time expires
///
/// # Returns
/// `SearchOutcome` with the best move (if any) and whether search was stopped.
/// A stopped outcome must not be trusted as a completed search.
pub fn alpha_beta_search(
    state: &GameState,
    depth: u8,
    config: &EngineConfig,
    stats: &mut SearchStats,
    tc: &TimeControl,
) -> SearchOutcome {
    let mut searcher = Searcher {
        player: state.player(),
        evaluator: Evaluator::new(config.strategy),
        prune: config.prune,
        stats,
        tc,
    };

    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best: Option<(Action, f64)> = None;

    for (action, next) in state.successors() {
        if searcher.should_stop() {
            return SearchOutcome {
                best_move: best,
                stopped: true,
            };
        }
        searcher.stats.nodes += 1;

        let (score, stopped) = searcher.min_value(&next, alpha, beta, depth.saturating_sub(1));
        if stopped {
            return SearchOutcome {
                best_move: best,
                stopped: true,
            };
        }

        alpha = alpha.max(score);
        // The first move is kept even when every move loses.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((action, score));
        }
    }

    SearchOutcome {
        best_move: best,
        stopped: false,
    }
}

/// Mutually recursive min/max evaluation for one searching player.
struct Searcher<'a> {
    player: Player,
    evaluator: Evaluator,
    prune: bool,
    stats: &'a mut SearchStats,
    tc: &'a TimeControl,
}

impl Searcher<'_> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.tc.is_stopped()
            || (self.tc.should_check_time(self.stats.nodes) && self.tc.check_time())
    }

    /// Opponent to move. Returns (score, stopped).
    fn min_value(&mut self, state: &GameState, alpha: f64, mut beta: f64, depth: u8) -> (f64, bool) {
        if self.should_stop() {
            return (0.0, true);
        }
        if state.terminal_test() {
            return (state.utility(self.player), false);
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return (self.evaluator.score(state, self.player), false);
        }

        let mut v = f64::INFINITY;
        for (_, next) in state.successors() {
            self.stats.nodes += 1;
            let (score, stopped) = self.max_value(&next, alpha, beta, depth - 1);
            if stopped {
                return (v, true);
            }

            v = v.min(score);
            if self.prune && v <= alpha {
                self.stats.cutoffs += 1;
                return (v, false);
            }
            beta = beta.min(v);
        }
        (v, false)
    }

    /// Searching player to move. Returns (score, stopped).
    fn max_value(&mut self, state: &GameState, mut alpha: f64, beta: f64, depth: u8) -> (f64, bool) {
        if self.should_stop() {
            return (0.0, true);
        }
        if state.terminal_test() {
            return (state.utility(self.player), false);
        }
        if depth == 0 {
            self.stats.evaluations += 1;
            return (self.evaluator.score(state, self.player), false);
        }

        let mut v = f64::NEG_INFINITY;
        for (_, next) in state.successors() {
            self.stats.nodes += 1;
            let (score, stopped) = self.min_value(&next, alpha, beta, depth - 1);
            if stopped {
                return (v, true);
            }

            v = v.max(score);
            if self.prune && v >= beta {
                self.stats.cutoffs += 1;
                return (v, false);
            }
            alpha = alpha.max(v);
        }
        (v, false)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
