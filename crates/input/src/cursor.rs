//! Cursor tracking over the tile grid.

use crate::types::Direction;

/// Position of the selection cursor, clamped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one tile in `dir`, stopping at the grid edge.
    pub fn step(&mut self, dir: Direction, rows: usize, cols: usize) {
        match dir {
            Direction::North => self.row = self.row.saturating_sub(1),
            Direction::South => self.row = (self.row + 1).min(rows.saturating_sub(1)),
            Direction::West => self.col = self.col.saturating_sub(1),
            Direction::East => self.col = (self.col + 1).min(cols.saturating_sub(1)),
        }
    }

    /// Pull the cursor back inside the grid after a level change.
    pub fn clamp(&mut self, rows: usize, cols: usize) {
        self.row = self.row.min(rows.saturating_sub(1));
        self.col = self.col.min(cols.saturating_sub(1));
    }
}
