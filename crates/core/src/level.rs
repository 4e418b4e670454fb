//! Level data - the raw description a grid is built from
//!
//! A level is just dimensions plus one encoded integer per cell, row-major.
//! Loading into a [`crate::Grid`] is strict: bad dimensions, a wrong cell
//! count, or an unknown cell value abort the load. [`LevelData::normalized`]
//! is the explicit repair path for editor-style tooling: it clamps
//! dimensions and pads or truncates the cell list, but it never invents
//! meaning for unknown cell values.

use crate::codec;
use crate::types::{Rotation, TileKind};

/// Padding value for short cell lists: an empty cell in canonical
/// orientation.
const EMPTY_CELL: i64 = codec::encode(TileKind::Empty, Rotation::R0);

/// Raw level description: dimensions and encoded cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<i64>,
}

/// Why a level failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    /// Rows or columns are zero.
    BadDimensions { rows: usize, cols: usize },
    /// The cell list length is not rows x cols.
    CellCountMismatch { expected: usize, actual: usize },
    /// A cell value does not decode to a tile.
    UnknownTile { index: usize, value: i64 },
}

impl LevelError {
    pub fn code(self) -> &'static str {
        match self {
            LevelError::BadDimensions { .. } => "bad_dimensions",
            LevelError::CellCountMismatch { .. } => "cell_count_mismatch",
            LevelError::UnknownTile { .. } => "unknown_tile",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            LevelError::BadDimensions { .. } => "level dimensions must be at least 1x1",
            LevelError::CellCountMismatch { .. } => "cell list length does not match rows x cols",
            LevelError::UnknownTile { .. } => "cell value does not encode a known tile kind",
        }
    }
}

impl LevelData {
    pub fn new(rows: usize, cols: usize, cells: Vec<i64>) -> Self {
        Self { rows, cols, cells }
    }

    /// Number of cells the dimensions call for.
    pub fn expected_len(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the level invariants without building a grid
    ///
    /// Dimensions must be at least 1x1, the cell list must match them
    /// exactly, and every cell must decode.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LevelError::BadDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cells.len() != self.expected_len() {
            return Err(LevelError::CellCountMismatch {
                expected: self.expected_len(),
                actual: self.cells.len(),
            });
        }
        for (index, &value) in self.cells.iter().enumerate() {
            if codec::decode(value).is_err() {
                return Err(LevelError::UnknownTile { index, value });
            }
        }
        Ok(())
    }

    /// Editor-style repair: clamp dimensions to 1 and pad or truncate the
    /// cell list to fit
    ///
    /// Unknown cell values are left in place; only [`Self::validate`]
    /// rejects those.
    pub fn normalized(&self) -> LevelData {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);
        let mut cells = self.cells.clone();
        cells.resize(rows * cols, EMPTY_CELL);
        LevelData { rows, cols, cells }
    }
}
