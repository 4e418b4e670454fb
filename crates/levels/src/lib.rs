//! Level catalog - built-in puzzles and JSON level packs
//!
//! Levels are authored in their solved arrangement and scrambled when a
//! game starts, so a pack is easy to write: lay the circuit out finished
//! and the game makes a puzzle of it. Cells use the integer encoding from
//! the core codec, which keeps packs hand-editable:
//!
//! ```json
//! { "levels": [ { "rows": 1, "cols": 3, "cells": [11, 13, 32] } ] }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Result};
use serde::Deserialize;

pub use tui_circuit_core as core;

use tui_circuit_core::LevelData;

/// An ordered catalog of levels, easiest first.
#[derive(Debug, Clone, Default)]
pub struct LevelSet {
    levels: Vec<LevelData>,
}

impl LevelSet {
    pub fn new(levels: Vec<LevelData>) -> Self {
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&LevelData> {
        self.levels.get(index)
    }
}

/// On-disk shape of one level. Kept separate from [`LevelData`] so the
/// file format can only change here.
#[derive(Debug, Deserialize)]
struct RawLevel {
    rows: usize,
    cols: usize,
    cells: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct RawLevelSet {
    levels: Vec<RawLevel>,
}

/// Parse a level pack from JSON text
///
/// Every level is validated; a pack with one bad level is rejected whole,
/// with the failing level named in the error.
pub fn from_json(text: &str) -> Result<LevelSet> {
    let raw: RawLevelSet =
        serde_json::from_str(text).map_err(|err| anyhow!("malformed level pack: {}", err))?;
    if raw.levels.is_empty() {
        bail!("level pack contains no levels");
    }

    let mut levels = Vec::with_capacity(raw.levels.len());
    for (index, raw_level) in raw.levels.into_iter().enumerate() {
        let level = LevelData::new(raw_level.rows, raw_level.cols, raw_level.cells);
        if let Err(err) = level.validate() {
            bail!("level {} is invalid: {}", index + 1, err.message());
        }
        levels.push(level);
    }

    Ok(LevelSet::new(levels))
}

/// Read and parse a level pack file.
pub fn load_file(path: &Path) -> Result<LevelSet> {
    let text = fs::read_to_string(path)
        .map_err(|err| anyhow!("cannot read level pack {}: {}", path.display(), err))?;
    from_json(&text)
}

/// The built-in level ramp
///
/// Hand-authored, ordered easiest first. Each one is laid out solved;
/// scrambling happens when the level is loaded into a game.
pub fn builtin() -> LevelSet {
    LevelSet::new(vec![
        // One straight between source and bulb.
        LevelData::new(1, 3, vec![11, 13, 32]),
        // A closed 2x2 loop.
        LevelData::new(2, 2, vec![11, 24, 12, 34]),
        // A tee splits one source between a bulb and a corner run.
        LevelData::new(3, 3, vec![22, 0, 0, 5, 31, 0, 4, 13, 32]),
        // Cross and tee fan one source out to four bulbs.
        LevelData::new(3, 4, vec![0, 22, 22, 0, 11, 6, 35, 32, 0, 2, 0, 0]),
        // Two sources share one chain down to a single bulb.
        LevelData::new(
            4,
            4,
            vec![21, 0, 21, 0, 4, 13, 35, 24, 0, 0, 0, 3, 0, 0, 0, 2],
        ),
        // A ring with two sources on it and bulbs hung inside.
        LevelData::new(
            5,
            5,
            vec![
                14, 13, 15, 13, 24,
                 3,  0,  2,  0,  3,
                 5, 31,  0, 11, 25,
                 3,  0, 22,  0,  3,
                 4, 13, 35, 13, 34,
            ],
        ),
    ])
}
