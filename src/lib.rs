//! Plugin Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `plugin_tetris::{core,engine,input,term,types}`.
//! The game itself is host-agnostic: [`engine::Session`] drives a
//! [`core::GameState`] and produces [`core::Frame`]s that any host can paint.
//! The `term` and `input` crates are the terminal host used by the binary.

pub use plugin_tetris_core as core;
pub use plugin_tetris_engine as engine;
pub use plugin_tetris_input as input;
pub use plugin_tetris_term as term;
pub use plugin_tetris_types as types;
