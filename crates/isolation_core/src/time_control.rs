//! Per-move limits and the stop flag shared between an agent and its arbiter.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Default number of nodes between clock checks.
pub const DEFAULT_CHECK_INTERVAL: u64 = 1024;

/// How deep and how long an agent may think about one move.
///
/// Agents stop at whichever limit comes first. Once time runs out the agent
/// returns immediately; whatever it already published stays published.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Wall-clock budget for the move (None = unlimited)
    pub move_time: Option<Duration>,
    /// Stop flag and deadline polled during search
    pub time_control: TimeControl,
}

impl SearchLimits {
    pub fn new(depth: u8, move_time: Option<Duration>) -> Self {
        Self {
            depth,
            move_time,
            time_control: TimeControl::new(move_time),
        }
    }

    /// Depth-bounded search with no clock.
    pub fn depth(depth: u8) -> Self {
        Self::new(depth, None)
    }

    /// Clock-bounded search; depth is left to the agent.
    pub fn time(move_time: Duration) -> Self {
        Self::new(u8::MAX, Some(move_time))
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Arm the clock. Call once when the turn begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

/// Stop flag plus an optional deadline, shared by every clone.
///
/// The arbiter keeps one copy and raises the flag when the budget expires;
/// the searching thread polls another. `is_stopped` is a relaxed atomic
/// load, cheap enough for every node. The clock itself is only read every
/// `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    /// Set by `start` when there is a budget
    deadline: Arc<RwLock<Option<Instant>>>,
    budget: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(RwLock::new(None)),
            budget,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }

    /// Override how many nodes pass between clock reads (at least 1).
    pub fn with_check_interval(mut self, nodes: u64) -> Self {
        self.check_interval = nodes.max(1);
        self
    }

    /// Clear the stop flag and fix the deadline from now.
    pub fn start(&self) {
        let deadline = self.budget.map(|budget| Instant::now() + budget);
        *self.deadline.write().unwrap_or_else(PoisonError::into_inner) = deadline;
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock, raising the stop flag once the deadline has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        let deadline = *self.deadline.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            self.stop();
            return true;
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(self.check_interval)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
