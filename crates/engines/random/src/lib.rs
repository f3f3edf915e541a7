//! Random Isolation Agent
//!
//! Picks uniformly at random from the legal actions. Useful for:
//! - Baseline comparisons (any searching agent should easily beat this)
//! - Stress testing the arbiter and move generation

use isolation_core::{ActionSlot, Agent, Context, Decision, GameState, SearchLimits};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// An agent that plays random legal moves.
///
/// It never looks ahead and ignores the time budget; it publishes exactly
/// once unless it has no legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomEngine {
    fn get_action(
        &mut self,
        state: &GameState,
        _limits: &SearchLimits,
        slot: &ActionSlot,
        _context: &mut Context,
    ) {
        if let Some(&action) = state.actions().choose(&mut thread_rng()) {
            slot.publish(Decision::new(action, 0, 0.0));
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
