//! Core puzzle logic module - pure, deterministic, and testable
//!
//! This module contains the complete rules of the wire-rotation puzzle.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same level and seed always produce the same game
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: can run in any environment (terminal, headless, tooling)
//!
//! # Module Structure
//!
//! - [`codec`]: integer cell encoding shared with the level format
//! - [`tiles`]: canonical port catalog and rotation-aware port resolution
//! - [`level`]: raw level data with validation and normalization
//! - [`grid`]: the tile grid, bounds-checked access, and the rotation rule
//! - [`propagate`]: breadth-first power propagation from all sources
//! - [`rng`]: small deterministic RNG used to scramble levels
//! - [`game`]: one level in play, sequencing rotate → propagate → win check
//! - [`snapshot`]: render-friendly copies of the game state
//!
//! # Game Rules
//!
//! - Every tile has a fixed kind and a rotation in quarter-turn steps.
//! - A tile's active ports are its canonical ports rotated clockwise.
//! - Power flows between neighbors only when **both** tiles present a port
//!   at the shared edge.
//! - Power starts at every `Source` tile and floods outward; `Empty` tiles
//!   never carry power.
//! - The level is complete when every non-empty tile is powered.
//!
//! # Example
//!
//! ```
//! use tui_circuit_core::{GameState, LevelData};
//!
//! // A 1x3 level: source facing east, a straight, a bulb facing west.
//! let level = LevelData::new(1, 3, vec![11, 13, 32]);
//! let mut game = GameState::from_level(&level).unwrap();
//! assert!(game.completed());
//!
//! // Turning the bulb breaks the circuit; three more turns restore it.
//! game.rotate_at(0, 2).unwrap();
//! assert!(!game.completed());
//! for _ in 0..3 {
//!     game.rotate_at(0, 2).unwrap();
//! }
//! assert!(game.completed());
//! ```

pub mod codec;
pub mod game;
pub mod grid;
pub mod level;
pub mod propagate;
pub mod rng;
pub mod snapshot;
pub mod tiles;

pub use tui_circuit_types as types;

// Re-export commonly used types for convenience
pub use codec::{decode, encode, DecodeError};
pub use game::{GameState, RotateOutcome};
pub use grid::{Grid, GridError};
pub use level::{LevelData, LevelError};
pub use propagate::{PropagationReport, Propagator};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, TileView};
pub use tiles::{active_ports, canonical_ports, port_directions};
