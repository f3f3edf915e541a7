//! Isolation Core - game model shared by every agent
//!
//! Queen's Isolation: two tokens on a small grid, each move slides the active
//! token along an open straight or diagonal ray and blocks the landing cell.
//! The player who has to move but cannot loses.
//!
//! This crate holds the immutable [`GameState`], time control, the
//! single-slot [`ActionSlot`] agents publish into, and the [`Agent`] trait.

pub mod bitboard;
pub mod error;
pub mod perft;
pub mod rays;
pub mod slot;
pub mod state;
pub mod time_control;
pub mod turn;
pub mod types;

pub use bitboard::{Bitboard, MAX_CELLS};
pub use error::{IsolationError, Result};
pub use perft::perft;
pub use rays::{queen_rays, Ray, RAYS};
pub use slot::{ActionSlot, Decision};
pub use state::GameState;
pub use time_control::*;
pub use turn::{decide_move, timed_decision, TurnReport};
pub use types::*;

// =============================================================================
// Agent trait: implemented by every player
// =============================================================================

/// Opaque per-player value the arbiter hands back to the same agent on its
/// next turn. Agents may store anything serializable here.
pub type Context = Option<serde_json::Value>;

/// Trait that all Isolation players must implement.
pub trait Agent: Send {
    /// Decide a move for the active player of `state`.
    ///
    /// Implementations publish into `slot` at least once and may publish
    /// again whenever they find something better; the caller reads the slot
    /// when the agent returns or when `limits` expire, whichever comes first.
    /// Long-running agents must poll `limits.time_control` and return once it
    /// reports stopped.
    fn get_action(
        &mut self,
        state: &GameState,
        limits: &SearchLimits,
        slot: &ActionSlot,
        context: &mut Context,
    );

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
