//! Greedy Isolation Agent
//!
//! One-ply lookahead: moves to the cell that leaves it the most liberties.
//! Stronger than random play, still far weaker than a real search.

use isolation_core::{Action, ActionSlot, Agent, Context, Decision, GameState, SearchLimits};

#[cfg(test)]
mod lib_tests;

/// An agent that maximizes its own liberty count after the move.
///
/// Ties go to the first action in generation order, so play is
/// deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    /// Best action for the player to move and the liberties it leaves.
    pub fn best_action(state: &GameState) -> Option<(Action, usize)> {
        let me = state.player();
        let mut best: Option<(Action, usize)> = None;
        for (action, next) in state.successors() {
            let mobility = next.liberty_count(next.location(me));
            if best.map_or(true, |(_, m)| mobility > m) {
                best = Some((action, mobility));
            }
        }
        best
    }
}

impl Agent for GreedyEngine {
    fn get_action(
        &mut self,
        state: &GameState,
        _limits: &SearchLimits,
        slot: &ActionSlot,
        _context: &mut Context,
    ) {
        if let Some((action, mobility)) = Self::best_action(state) {
            slot.publish(Decision::new(action, 1, mobility as f64));
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
