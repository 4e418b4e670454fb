//! Shared types module - tile, rotation, and direction primitives
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, level tooling).
//!
//! # Tile Encoding
//!
//! Levels store each cell as a single integer: `kind + rotation * 10`.
//! The kind codes are part of the on-disk level format and must never be
//! renumbered:
//!
//! | Code | Kind | Canonical ports |
//! |------|------|-----------------|
//! | 0 | `Empty` | none |
//! | 1 | `Source` | N |
//! | 2 | `Bulb` | N |
//! | 3 | `Straight` | N, S |
//! | 4 | `Corner` | N, E |
//! | 5 | `TJunction` | N, E, S |
//! | 6 | `Cross` | N, E, S, W |
//!
//! Rotation is stored in quarter-turn steps (0-3), each 90° clockwise from
//! the canonical orientation. The canonical port sets live in the core tile
//! catalog; this crate only defines the carriers.
//!
//! # Grid Orientation
//!
//! Coordinates are `(row, col)` with row 0 at the top of the screen:
//! North is `row - 1`, South is `row + 1`, East is `col + 1`, West is
//! `col - 1`. Rotating a tile clockwise maps North → East → South → West.
//!
//! # Examples
//!
//! ```
//! use tui_circuit_types::{Direction, Ports, Rotation, TileKind};
//!
//! // Kind codes round-trip
//! assert_eq!(TileKind::from_code(4), Some(TileKind::Corner));
//! assert_eq!(TileKind::Corner.code(), 4);
//!
//! // Rotations advance clockwise and wrap
//! assert_eq!(Rotation::R270.rotate_cw(), Rotation::R0);
//!
//! // Port sets rotate with the tile
//! let ports = Ports::EMPTY.with(Direction::North);
//! assert!(ports.rotated(1).contains(Direction::East));
//! ```

/// Base of the cell encoding: `encoded = kind + rotation * ENCODING_BASE`.
pub const ENCODING_BASE: i64 = 10;

/// Flat score awarded for completing a level.
pub const LEVEL_SCORE: u32 = 100;

/// Event poll timeout for the terminal loop in milliseconds.
///
/// The game is event-driven; this only bounds how quickly the view reacts
/// to terminal resizes.
pub const INPUT_POLL_MS: u64 = 120;

/// The seven tile kinds that can occupy a grid cell
///
/// `Empty` and `Source` are fixed in place; every other kind can be rotated
/// by the player. `Source` tiles emit power, `Bulb` tiles are the goals that
/// must all be lit, and the remaining kinds are plain wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Source,
    Bulb,
    Straight,
    Corner,
    TJunction,
    Cross,
}

impl TileKind {
    /// All kinds in persisted-code order.
    pub const ALL: [TileKind; 7] = [
        TileKind::Empty,
        TileKind::Source,
        TileKind::Bulb,
        TileKind::Straight,
        TileKind::Corner,
        TileKind::TJunction,
        TileKind::Cross,
    ];

    /// Persisted numeric code for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::TileKind;
    ///
    /// assert_eq!(TileKind::Empty.code(), 0);
    /// assert_eq!(TileKind::Cross.code(), 6);
    /// ```
    pub const fn code(self) -> u8 {
        match self {
            TileKind::Empty => 0,
            TileKind::Source => 1,
            TileKind::Bulb => 2,
            TileKind::Straight => 3,
            TileKind::Corner => 4,
            TileKind::TJunction => 5,
            TileKind::Cross => 6,
        }
    }

    /// Parse a kind from its persisted numeric code
    ///
    /// Returns `None` for anything outside 0..=6, including negatives.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_code(3), Some(TileKind::Straight));
    /// assert_eq!(TileKind::from_code(7), None);
    /// assert_eq!(TileKind::from_code(-1), None);
    /// ```
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TileKind::Empty),
            1 => Some(TileKind::Source),
            2 => Some(TileKind::Bulb),
            3 => Some(TileKind::Straight),
            4 => Some(TileKind::Corner),
            5 => Some(TileKind::TJunction),
            6 => Some(TileKind::Cross),
            _ => None,
        }
    }

    /// Whether the player may rotate tiles of this kind
    ///
    /// Sources stay as authored so a puzzle always has a fixed reference
    /// point; empty cells have nothing to rotate.
    pub const fn is_rotatable(self) -> bool {
        !matches!(self, TileKind::Empty | TileKind::Source)
    }
}

/// Tile orientation in clockwise quarter-turn steps
///
/// `R0` is the canonical orientation; each step turns the tile 90°
/// clockwise. The cycle goes R0 → R90 → R180 → R270 → R0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Number of clockwise quarter-turns from canonical (0-3).
    pub const fn steps(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Build a rotation from a step count, wrapping modulo 4
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_steps(2), Rotation::R180);
    /// assert_eq!(Rotation::from_steps(5), Rotation::R90);
    /// ```
    pub const fn from_steps(steps: u8) -> Self {
        match steps % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    /// Rotate clockwise by one quarter-turn
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R90);
    /// assert_eq!(Rotation::R270.rotate_cw(), Rotation::R0);
    /// ```
    pub const fn rotate_cw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

/// The four cardinal directions a port can face
///
/// Directions are in screen orientation: North points at the previous row,
/// South at the next row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Bit used to represent this direction inside a [`Ports`] set.
    pub const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    /// The direction pointing the opposite way
    ///
    /// A connection exists when one tile's port faces a neighbor whose port
    /// faces back, so matching always pairs a direction with its opposite.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row/column delta of the neighboring cell in this direction.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Set of directions a tile currently connects toward
///
/// Stored as a 4-bit mask (N=1, E=2, S=4, W=8). Rotating the set rotates
/// every member clockwise, which is a 4-bit rotate of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ports(u8);

impl Ports {
    /// The empty port set.
    pub const EMPTY: Ports = Ports(0);

    /// Build a set from a raw 4-bit mask (high bits ignored).
    pub const fn from_bits(bits: u8) -> Self {
        Ports(bits & 0x0F)
    }

    /// Raw 4-bit mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// This set with one more direction included.
    pub const fn with(self, dir: Direction) -> Self {
        Ports(self.0 | dir.bit())
    }

    /// Whether the set includes a direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::{Direction, Ports};
    ///
    /// let ports = Ports::EMPTY.with(Direction::North).with(Direction::South);
    /// assert!(ports.contains(Direction::North));
    /// assert!(!ports.contains(Direction::East));
    /// ```
    pub const fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Rotate every direction clockwise by `steps` quarter-turns
    ///
    /// Four steps are the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_circuit_types::{Direction, Ports};
    ///
    /// let north = Ports::EMPTY.with(Direction::North);
    /// assert!(north.rotated(1).contains(Direction::East));
    /// assert!(north.rotated(2).contains(Direction::South));
    /// assert_eq!(north.rotated(4), north);
    /// ```
    pub const fn rotated(self, steps: u8) -> Self {
        let k = (steps % 4) as u32;
        Ports(((self.0 << k) | (self.0 >> (4 - k))) & 0x0F)
    }

    /// Number of directions in the set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether the set has no directions.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A single grid cell: what it is, how it is turned, and whether power
/// currently reaches it
///
/// `powered` is derived state. Propagation recomputes it from scratch on
/// every pass; rotation never touches it, and it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub kind: TileKind,
    pub rotation: Rotation,
    pub powered: bool,
}

impl Tile {
    /// Create an unpowered tile.
    pub const fn new(kind: TileKind, rotation: Rotation) -> Self {
        Self {
            kind,
            rotation,
            powered: false,
        }
    }
}

/// Player intents produced by the input layer
///
/// The terminal loop maps keys to these and dispatches them against the
/// cursor and the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the grid cursor one cell.
    MoveCursor(Direction),
    /// Rotate the tile under the cursor clockwise.
    Rotate,
    /// Rescramble the current level.
    Restart,
    /// Advance to the next level (if unlocked).
    NextLevel,
    /// Go back to the previous level.
    PrevLevel,
}
