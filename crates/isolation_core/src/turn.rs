//! Running one agent decision under a wall-clock budget.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{IsolationError, Result};
use crate::slot::{ActionSlot, Decision};
use crate::state::GameState;
use crate::time_control::SearchLimits;
use crate::types::Action;
use crate::{Agent, Context};

/// What came out of one timed decision.
#[derive(Debug, Clone)]
pub struct TurnReport {
    /// Latest decision published within the budget (None if there was none)
    pub decision: Option<Decision>,
    /// The agent's context after the turn
    pub context: Context,
    /// Wall-clock time until the decision was taken
    pub elapsed: Duration,
    /// Whether the budget expired before the agent returned
    pub interrupted: bool,
}

/// Runs `agent` on a worker thread and waits at most `limits.move_time` for
/// it to return.
///
/// When the budget expires the shared stop flag is raised and the slot is
/// read at that moment: anything the agent publishes afterwards, while it
/// unwinds, is ignored.
pub fn timed_decision(
    agent: &mut dyn Agent,
    state: &GameState,
    limits: SearchLimits,
    mut context: Context,
) -> TurnReport {
    let slot = ActionSlot::new();
    let started = Instant::now();
    limits.start();

    let (decision, elapsed, interrupted) = thread::scope(|scope| {
        let (done_tx, done_rx) = mpsc::channel();
        let worker_limits = &limits;
        let worker_slot = &slot;
        let worker_context = &mut context;

        scope.spawn(move || {
            agent.get_action(state, worker_limits, worker_slot, worker_context);
            // After a timeout the receiver is already dropped.
            let _ = done_tx.send(());
        });

        let interrupted = match limits.move_time {
            Some(budget) => done_rx.recv_timeout(budget).is_err(),
            None => done_rx.recv().is_err(),
        };
        if interrupted {
            limits.time_control.stop();
        }
        // The scope still joins a late worker; its later publishes don't count.
        (slot.latest(), started.elapsed(), interrupted)
    });

    TurnReport {
        decision,
        context,
        elapsed,
        interrupted,
    }
}

/// Per-turn entry point: ask `agent` for a move within `time_budget`,
/// threading its opaque `context` through.
///
/// # Errors
/// Returns `IsolationError::NoDecision` if nothing was published in time.
pub fn decide_move(
    agent: &mut dyn Agent,
    state: &GameState,
    time_budget: Duration,
    context: Context,
) -> Result<(Action, Context)> {
    let report = timed_decision(agent, state, SearchLimits::time(time_budget), context);
    match report.decision {
        Some(decision) => Ok((decision.action, report.context)),
        None => Err(IsolationError::NoDecision),
    }
}

#[cfg(test)]
#[path = "turn_tests.rs"]
mod turn_tests;
