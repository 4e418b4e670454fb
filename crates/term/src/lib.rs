//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids TUI widget frameworks and instead renders into
//! a simple framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw wires with box glyphs so connectivity is visible at a glance
//! - Keep the view pure; only the renderer and cues touch stdout

pub mod cues;
pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use tui_circuit_core as core;
pub use tui_circuit_types as types;

pub use cues::Cues;
pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridView, HudView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
