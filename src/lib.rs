//! TUI Circuit (workspace facade crate).
//!
//! This package keeps one flat `tui_circuit::{core,levels,progress,input,term,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use tui_circuit_core as core;
pub use tui_circuit_input as input;
pub use tui_circuit_levels as levels;
pub use tui_circuit_progress as progress;
pub use tui_circuit_term as term;
pub use tui_circuit_types as types;
