//! Terminal input source.
//!
//! Maps `crossterm` key events to [`types::GameAction`]s. Every press is one
//! discrete action; auto-repeat is left to the terminal.

pub mod map;

pub use plugin_tetris_types as types;

pub use map::{handle_key_event, should_quit};
