//! Cell codec - the integer encoding shared with the level format
//!
//! Each cell of a level is one integer: the ones digit selects the tile
//! kind, the tens digit the rotation in quarter-turn steps. `34` is a
//! straight wire turned 270° clockwise; `2` is a bulb in canonical
//! orientation.

use crate::types::{Rotation, TileKind, ENCODING_BASE};

/// A cell value that does not decode to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The raw cell value that was rejected.
    pub value: i64,
}

impl DecodeError {
    pub fn message(self) -> &'static str {
        "cell value does not encode a known tile kind"
    }
}

/// Decode a raw cell value into kind and rotation
///
/// Fails on negative values and on kind digits outside the catalog. The
/// rotation digit wraps modulo 4: four quarter-turns are a full circle, so
/// `43` and `3` decode to the same tile.
pub fn decode(encoded: i64) -> Result<(TileKind, Rotation), DecodeError> {
    if encoded < 0 {
        return Err(DecodeError { value: encoded });
    }
    let kind = match TileKind::from_code(encoded % ENCODING_BASE) {
        Some(kind) => kind,
        None => return Err(DecodeError { value: encoded }),
    };
    let steps = (encoded / ENCODING_BASE) % 4;
    Ok((kind, Rotation::from_steps(steps as u8)))
}

/// Encode kind and rotation back into a cell value
///
/// Inverse of [`decode`] for every kind and in-range rotation.
pub const fn encode(kind: TileKind, rotation: Rotation) -> i64 {
    kind.code() as i64 + rotation.steps() as i64 * ENCODING_BASE
}
