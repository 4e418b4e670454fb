//! Tile catalog - canonical port sets and rotation-aware resolution
//!
//! The catalog is the single authority on which directions each tile kind
//! connects toward in its canonical orientation. Everything else (matching,
//! rendering, tests) derives from these tables plus the tile's rotation.

use arrayvec::ArrayVec;

use crate::types::{Direction, Ports, Rotation, TileKind};

/// Canonical (rotation 0) port set for a tile kind
///
/// | Kind | Ports |
/// |------|-------|
/// | `Empty` | none |
/// | `Source` | N |
/// | `Bulb` | N |
/// | `Straight` | N, S |
/// | `Corner` | N, E |
/// | `TJunction` | N, E, S |
/// | `Cross` | N, E, S, W |
pub const fn canonical_ports(kind: TileKind) -> Ports {
    match kind {
        TileKind::Empty => Ports::EMPTY,
        TileKind::Source => Ports::EMPTY.with(Direction::North),
        TileKind::Bulb => Ports::EMPTY.with(Direction::North),
        TileKind::Straight => Ports::EMPTY.with(Direction::North).with(Direction::South),
        TileKind::Corner => Ports::EMPTY.with(Direction::North).with(Direction::East),
        TileKind::TJunction => Ports::EMPTY
            .with(Direction::North)
            .with(Direction::East)
            .with(Direction::South),
        TileKind::Cross => Ports::EMPTY
            .with(Direction::North)
            .with(Direction::East)
            .with(Direction::South)
            .with(Direction::West),
    }
}

/// Port set a tile presents after applying its rotation
///
/// Pure function of its arguments; the grid is not consulted.
pub const fn active_ports(kind: TileKind, rotation: Rotation) -> Ports {
    canonical_ports(kind).rotated(rotation.steps())
}

/// Active port directions as a bounded list (at most four entries)
///
/// Directions come out in clockwise order starting at North, which keeps
/// propagation order deterministic.
pub fn port_directions(kind: TileKind, rotation: Rotation) -> ArrayVec<Direction, 4> {
    let ports = active_ports(kind, rotation);
    let mut out = ArrayVec::new();
    for dir in Direction::ALL {
        if ports.contains(dir) {
            out.push(dir);
        }
    }
    out
}
