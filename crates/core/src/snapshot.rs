//! Snapshot module - read-only view of one game frame
//!
//! Frontends render from a snapshot instead of reaching into live state.
//! The snapshot is plain data, refilled in place each frame so render
//! loops do not churn allocations.

use crate::types::{Rotation, Tile, TileKind};

/// One tile as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileView {
    pub kind: TileKind,
    pub rotation: Rotation,
    pub powered: bool,
}

impl From<Tile> for TileView {
    fn from(value: Tile) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            powered: value.powered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, rows * cols entries.
    pub tiles: Vec<TileView>,
    pub moves: u32,
    pub powered: usize,
    pub live: usize,
    pub sources: usize,
    pub completed: bool,
}

impl GameSnapshot {
    /// Reset to an empty frame, keeping the tile buffer's capacity.
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.tiles.clear();
        self.moves = 0;
        self.powered = 0;
        self.live = 0;
        self.sources = 0;
        self.completed = false;
    }

    /// Tile view at (row, col), if in range.
    pub fn tile(&self, row: usize, col: usize) -> Option<TileView> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            tiles: Vec::new(),
            moves: 0,
            powered: 0,
            live: 0,
            sources: 0,
            completed: false,
        }
    }
}
