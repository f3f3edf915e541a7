//! Immutable game state for queen's Isolation.

use std::fmt;

use crate::bitboard::{Bitboard, MAX_CELLS};
use crate::error::{IsolationError, Result};
use crate::rays::queen_rays;
use crate::types::{Action, Cell, Player};

/// Board width used by `GameState::default()`.
pub const DEFAULT_WIDTH: u8 = 3;
/// Board height used by `GameState::default()`.
pub const DEFAULT_HEIGHT: u8 = 2;

/// A snapshot of an Isolation game.
///
/// States are values: the only way to advance one is [`GameState::result`],
/// which returns a fresh state and leaves the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    width: u8,
    height: u8,
    blocked: Bitboard,
    active: Player,
    locations: [Option<Cell>; 2],
    ply_count: u32,
}

impl GameState {
    /// Empty `width` x `height` board with the bottom-right corner blocked.
    pub fn new(width: u8, height: u8) -> Result<Self> {
        let cells = usize::from(width) * usize::from(height);
        if width == 0 || height == 0 || !(2..=MAX_CELLS).contains(&cells) {
            return Err(IsolationError::Configuration(format!(
                "board {width}x{height} must have between 2 and {MAX_CELLS} cells"
            )));
        }

        let mut state = Self {
            width,
            height,
            blocked: Bitboard::EMPTY,
            active: Player::One,
            locations: [None, None],
            ply_count: 0,
        };
        let corner = state.index(Cell::new(width - 1, height - 1));
        state.blocked.set(corner);
        Ok(state)
    }

    /// Build a state by playing `moves` from the empty board.
    pub fn replay(width: u8, height: u8, moves: &[Action]) -> Result<Self> {
        moves
            .iter()
            .try_fold(Self::new(width, height)?, |state, &action| state.result(action))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells, including the pre-blocked corner.
    pub fn board_size(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    /// The player to move.
    pub fn player(&self) -> Player {
        self.active
    }

    /// Where `player` last moved, or `None` before their first move.
    pub fn location(&self, player: Player) -> Option<Cell> {
        self.locations[player.idx()]
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked.contains(self.index(cell))
    }

    /// Number of open cells left on the board.
    pub fn open_cells(&self) -> usize {
        self.open_mask().popcount() as usize
    }

    /// Legal moves for the active player.
    pub fn actions(&self) -> Vec<Action> {
        self.liberties(self.location(self.active))
    }

    /// Open cells reachable from `loc` along the eight queen rays, walking
    /// each ray until the edge or the first blocked cell. With no location,
    /// every open cell in row-major scan order.
    pub fn liberties(&self, loc: Option<Cell>) -> Vec<Action> {
        match loc {
            None => self.open_mask().map(|idx| self.cell_at(idx)).collect(),
            Some(origin) => queen_rays(origin, self.width, self.height)
                .flat_map(|ray| ray.take_while(|&cell| self.is_open(cell)))
                .collect(),
        }
    }

    /// `liberties(loc).len()` without allocating.
    pub fn liberty_count(&self, loc: Option<Cell>) -> usize {
        match loc {
            None => self.open_cells(),
            Some(origin) => queen_rays(origin, self.width, self.height)
                .map(|ray| ray.take_while(|&cell| self.is_open(cell)).count())
                .sum(),
        }
    }

    /// Whether `player` can move at all from their current location.
    pub fn has_liberties(&self, player: Player) -> bool {
        match self.location(player) {
            None => !self.open_mask().is_empty(),
            Some(origin) => queen_rays(origin, self.width, self.height)
                .any(|mut ray| ray.next().is_some_and(|cell| self.is_open(cell))),
        }
    }

    /// Apply a legal action, returning the successor state.
    ///
    /// # Errors
    /// Returns `IsolationError::IllegalMove` if `action` is not in `actions()`.
    pub fn result(&self, action: Action) -> Result<GameState> {
        if !self.actions().contains(&action) {
            return Err(IsolationError::IllegalMove {
                action,
                player: self.active,
            });
        }
        Ok(self.apply(action))
    }

    /// Every `(action, successor)` pair in `actions()` order.
    ///
    /// Actions come straight from move generation, so they are not checked
    /// again the way [`GameState::result`] checks caller-supplied moves.
    pub fn successors(&self) -> impl Iterator<Item = (Action, GameState)> + '_ {
        self.actions()
            .into_iter()
            .map(move |action| (action, self.apply(action)))
    }

    /// True iff either player has no liberties, whoever is to move.
    pub fn terminal_test(&self) -> bool {
        !self.has_liberties(self.active) || !self.has_liberties(self.active.other())
    }

    /// The winner of a terminal state: the player to move wins iff they
    /// can still move. `None` while the game is running.
    pub fn winner(&self) -> Option<Player> {
        if !self.terminal_test() {
            return None;
        }
        if self.has_liberties(self.active) {
            Some(self.active)
        } else {
            Some(self.active.other())
        }
    }

    /// `+inf` if `player` won, `-inf` if they lost, `0` if not terminal.
    pub fn utility(&self, player: Player) -> f64 {
        match self.winner() {
            None => 0.0,
            Some(winner) if winner == player => f64::INFINITY,
            Some(_) => f64::NEG_INFINITY,
        }
    }

    fn apply(&self, action: Action) -> GameState {
        let mut next = self.clone();
        next.blocked.set(self.index(action));
        next.locations[self.active.idx()] = Some(action);
        next.active = self.active.other();
        next.ply_count += 1;
        next
    }

    fn open_mask(&self) -> Bitboard {
        !self.blocked & Bitboard::first_n(self.board_size())
    }

    #[inline]
    fn index(&self, cell: Cell) -> u8 {
        cell.y * self.width + cell.x
    }

    #[inline]
    fn cell_at(&self, idx: u8) -> Cell {
        Cell::new(idx % self.width, idx / self.width)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: Bitboard::from_index(DEFAULT_WIDTH * DEFAULT_HEIGHT - 1),
            active: Player::One,
            locations: [None, None],
            ply_count: 0,
        }
    }
}

/// Renders the board one row per line: `.` open, `#` blocked, `1`/`2` tokens.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: Vec<&str> = (0..self.width)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    if self.location(Player::One) == Some(cell) {
                        "1"
                    } else if self.location(Player::Two) == Some(cell) {
                        "2"
                    } else if self.is_open(cell) {
                        "."
                    } else {
                        "#"
                    }
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
