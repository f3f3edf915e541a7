//! Bitboard representation of the blocked cells of an Isolation board.
//!
//! A bitboard is a 128-bit integer where each bit represents a cell.
//! Bit `y * width + x` is cell `(x, y)`, so ascending bit order is the
//! row-major scan order used when listing open cells.

use std::ops::{BitAnd, BitOr, Not};

/// Largest board (in cells) a bitboard can describe.
pub const MAX_CELLS: usize = 128;

/// A set of cell indices on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(pub u128);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// Create a bitboard with a single cell set.
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Self {
        Bitboard(1u128 << idx)
    }

    /// Mask covering the first `n` cells (the whole board for `n` cells).
    #[inline(always)]
    pub const fn first_n(n: usize) -> Self {
        if n >= MAX_CELLS {
            Self::ALL
        } else {
            Bitboard((1u128 << n) - 1)
        }
    }

    /// Check if the bitboard is empty.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if a specific cell is set.
    #[inline(always)]
    pub const fn contains(self, idx: u8) -> bool {
        (self.0 & (1u128 << idx)) != 0
    }

    /// Set a cell in the bitboard.
    #[inline(always)]
    pub fn set(&mut self, idx: u8) {
        self.0 |= 1u128 << idx;
    }

    /// Count the number of set bits (population count).
    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the least significant bit. Returns the cell index.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(idx)
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

/// Iterator over set bits in ascending (scan) order.
impl Iterator for Bitboard {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

#[cfg(test)]
#[path = "bitboard_tests.rs"]
mod bitboard_tests;
