//! Isolation Arena
//!
//! Plays single games between two agents under a per-move time budget.
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against the random baseline on the default 7x7 board
//! cargo run -p arena -- play alphabeta random
//!
//! # Smaller board, longer think time, offensive evaluation
//! cargo run -p arena -- play alphabeta greedy --width 5 --height 5 --time-ms 500 --strategy offensive
//! ```

mod arbiter;
mod config;

pub use arbiter::*;
pub use config::*;
