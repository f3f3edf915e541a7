//! Single-slot channel holding an agent's latest decision.

use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

use crate::types::Action;

/// A move an agent is prepared to play.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    /// Search depth that produced the action (0 for unsearched picks)
    pub depth: u8,
    /// Score of the action from the deciding player's perspective
    pub score: f64,
}

impl Decision {
    pub fn new(action: Action, depth: u8, score: f64) -> Self {
        Self {
            action,
            depth,
            score,
        }
    }
}

/// Shared "latest answer wins" slot between a searching thread and the
/// arbiter timing it.
///
/// Each publish replaces the previous decision. Nothing but `publish`
/// writes to the slot, so an interrupted search can never clear it.
#[derive(Debug, Clone, Default)]
pub struct ActionSlot {
    latest: Arc<Mutex<Option<Decision>>>,
}

impl ActionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, decision: Decision) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(decision);
    }

    /// The most recently published decision, if any.
    pub fn latest(&self) -> Option<Decision> {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
