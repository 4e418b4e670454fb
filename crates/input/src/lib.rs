//! Terminal input module
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values and
//! tracks the selection cursor. Nothing in here touches game state; the
//! main loop owns dispatch.

pub mod cursor;
pub mod map;

pub use tui_circuit_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
