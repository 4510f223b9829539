//! Event-loop binding for the game controller.
//!
//! The core never touches a clock. This crate supplies the timer service it
//! talks to through effects, and a [`Session`] that routes controller effects
//! to that timer and remembers when a repaint is due. Hosts only have to
//! deliver input actions and elapsed time.

pub mod session;
pub mod timer;

pub use plugin_tetris_core as core;
pub use plugin_tetris_types as types;

pub use session::Session;
pub use timer::{TickTimer, TimerService};
