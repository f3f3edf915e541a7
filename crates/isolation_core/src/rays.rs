//! Queen rays over a bounded grid.
//!
//! Rays ignore occupancy; callers stop walking at the first blocked cell.

use crate::types::Cell;

/// The eight queen directions as `(dx, dy)`, in the order liberties are
/// generated. This order fixes root tie-breaking in search.
pub const RAYS: [(i8, i8); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Walks from (but excluding) `origin` in one direction until the board edge.
#[derive(Clone, Debug)]
pub struct Ray {
    x: i16,
    y: i16,
    dx: i16,
    dy: i16,
    width: i16,
    height: i16,
    done: bool,
}

impl Ray {
    pub fn new(origin: Cell, (dx, dy): (i8, i8), width: u8, height: u8) -> Self {
        Self {
            x: i16::from(origin.x),
            y: i16::from(origin.y),
            dx: i16::from(dx),
            dy: i16::from(dy),
            width: i16::from(width),
            height: i16::from(height),
            done: false,
        }
    }
}

impl Iterator for Ray {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.done {
            return None;
        }
        let x = self.x + self.dx;
        let y = self.y + self.dy;
        if !(0..self.width).contains(&x) || !(0..self.height).contains(&y) {
            self.done = true;
            return None;
        }
        self.x = x;
        self.y = y;
        Some(Cell::new(x as u8, y as u8))
    }
}

impl std::iter::FusedIterator for Ray {}

/// All eight rays from `origin`, in [`RAYS`] order.
pub fn queen_rays(origin: Cell, width: u8, height: u8) -> impl Iterator<Item = Ray> {
    RAYS.into_iter()
        .map(move |dir| Ray::new(origin, dir, width, height))
}

#[cfg(test)]
#[path = "rays_tests.rs"]
mod rays_tests;
