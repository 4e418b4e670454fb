//! Grid module - the authoritative tile grid for one level
//!
//! Tiles live in a flat row-major `Vec` (index = row * cols + col) for
//! cache-friendly scans. A grid is built once per level and replaced
//! wholesale on level change; afterwards no tile is added or removed, only
//! rotations and the derived `powered` flags change.

use crate::codec;
use crate::level::{LevelData, LevelError};
use crate::rng::SimpleRng;
use crate::tiles::active_ports;
use crate::types::{Direction, Ports, Rotation, Tile, TileKind};

/// Why a grid operation was refused. The grid is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinates outside `[0, rows) x [0, cols)`.
    OutOfRange,
    /// The addressed tile is fixed in place (empty or source).
    NotRotatable,
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::OutOfRange => "out_of_range",
            GridError::NotRotatable => "not_rotatable",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::OutOfRange => "coordinates are outside the grid",
            GridError::NotRotatable => "this tile is fixed and cannot be rotated",
        }
    }
}

/// The tile grid of one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat tile storage, row-major order (row * cols + col).
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from raw level data
    ///
    /// Strict: dimensions must be at least 1x1, the cell list must match
    /// them exactly, and every cell must decode. All tiles start unpowered;
    /// run a propagation pass before reading `powered` flags.
    pub fn from_level(level: &LevelData) -> Result<Self, LevelError> {
        if level.rows == 0 || level.cols == 0 {
            return Err(LevelError::BadDimensions {
                rows: level.rows,
                cols: level.cols,
            });
        }
        if level.cells.len() != level.expected_len() {
            return Err(LevelError::CellCountMismatch {
                expected: level.expected_len(),
                actual: level.cells.len(),
            });
        }

        let mut tiles = Vec::with_capacity(level.cells.len());
        for (index, &value) in level.cells.iter().enumerate() {
            let (kind, rotation) = codec::decode(value)
                .map_err(|err| LevelError::UnknownTile {
                    index,
                    value: err.value,
                })?;
            tiles.push(Tile::new(kind, rotation));
        }

        Ok(Self {
            rows: level.rows,
            cols: level.cols,
            tiles,
        })
    }

    /// Calculate flat index from (row, col) coordinates.
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Read the tile at (row, col).
    pub fn tile_at(&self, row: usize, col: usize) -> Result<Tile, GridError> {
        match self.index(row, col) {
            Some(idx) => Ok(self.tiles[idx]),
            None => Err(GridError::OutOfRange),
        }
    }

    /// Port set the tile at (row, col) currently presents.
    pub fn active_ports_at(&self, row: usize, col: usize) -> Result<Ports, GridError> {
        let tile = self.tile_at(row, col)?;
        Ok(active_ports(tile.kind, tile.rotation))
    }

    /// Rotate the tile at (row, col) one quarter-turn clockwise
    ///
    /// Returns the new rotation. The kind never changes and the `powered`
    /// flags are left alone; callers decide when to re-propagate. Refuses
    /// fixed tiles and out-of-range coordinates without touching anything.
    pub fn rotate_tile(&mut self, row: usize, col: usize) -> Result<Rotation, GridError> {
        let idx = self.index(row, col).ok_or(GridError::OutOfRange)?;
        let tile = &mut self.tiles[idx];
        if !tile.kind.is_rotatable() {
            return Err(GridError::NotRotatable);
        }
        tile.rotation = tile.rotation.rotate_cw();
        Ok(tile.rotation)
    }

    /// Flat index of the neighboring tile one step in `dir`, if any.
    pub(crate) fn neighbor(&self, idx: usize, dir: Direction) -> Option<usize> {
        let row = idx / self.cols;
        let col = idx % self.cols;
        let (dr, dc) = dir.offset();
        let nrow = row as i64 + dr;
        let ncol = col as i64 + dc;
        if nrow < 0 || ncol < 0 || nrow >= self.rows as i64 || ncol >= self.cols as i64 {
            return None;
        }
        Some(nrow as usize * self.cols + ncol as usize)
    }

    pub(crate) fn reset_power(&mut self) {
        for tile in &mut self.tiles {
            tile.powered = false;
        }
    }

    /// Win check: every non-empty tile is powered
    ///
    /// Only meaningful after a propagation pass; a grid with nothing but
    /// empty tiles is trivially complete.
    pub fn is_complete(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.kind == TileKind::Empty || tile.powered)
    }

    /// Number of tiles currently powered.
    pub fn powered_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.powered).count()
    }

    /// Number of non-empty tiles (the ones that must be powered to win).
    pub fn live_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.kind != TileKind::Empty)
            .count()
    }

    /// Number of source tiles.
    pub fn source_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.kind == TileKind::Source)
            .count()
    }

    /// Deal fresh rotations to every non-source tile
    ///
    /// Sources keep their authored rotation so the puzzle stays anchored.
    /// Empty tiles are rotated too; it is invisible, and skipping them
    /// would shift the random sequence for everything after them.
    pub fn scramble(&mut self, rng: &mut SimpleRng) {
        for tile in &mut self.tiles {
            if tile.kind == TileKind::Source {
                continue;
            }
            tile.rotation = Rotation::from_steps(rng.next_range(4) as u8);
        }
    }

    /// Re-encode the current kinds and rotations as level data
    ///
    /// This is everything needed to resume the level later; `powered` is
    /// derived and deliberately not part of it.
    pub fn to_level_data(&self) -> LevelData {
        LevelData {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .tiles
                .iter()
                .map(|tile| codec::encode(tile.kind, tile.rotation))
                .collect(),
        }
    }

    /// Build a grid straight from tiles for testing.
    #[cfg(test)]
    pub fn from_tiles(rows: usize, cols: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), rows * cols);
        Self { rows, cols, tiles }
    }
}
