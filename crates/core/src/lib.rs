//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules, the controller state machine and the
//! render model. It has no dependency on any UI, timer or I/O; hosts feed it
//! [`GameEvent`]s and carry out the returned [`Effect`]s.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino layouts and the quarter-turn rotation
//! - [`board`]: 10x22 grid with collision testing and row clearing
//! - [`rng`]: uniform, seedable piece generation
//! - [`scoring`]: line-clear points, level and gravity interval
//! - [`game_state`]: the controller (running / paused / game over)
//! - [`snapshot`]: read-only copy of the controller state
//! - [`render`]: snapshot to draw-instruction list
//!
//! # Example
//!
//! ```
//! use plugin_tetris_core::{Effect, GameEvent, GameState};
//! use plugin_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! let effects = game.handle(GameEvent::Start);
//! assert!(effects.contains(&Effect::ArmTimer { interval_ms: 400 }));
//!
//! game.handle(GameEvent::Action(GameAction::MoveRight));
//! game.handle(GameEvent::Tick);
//! game.handle(GameEvent::Action(GameAction::HardDrop));
//!
//! let frame = plugin_tetris_core::render::render(&game.snapshot());
//! assert_eq!(frame.title, "Tetris");
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use plugin_tetris_types as types;

pub use board::Board;
pub use game_state::{ActivePiece, Effect, Effects, GameEvent, GameState, GameStatus};
pub use pieces::{coordinates_for, rotate, Piece};
pub use render::{render, Area, DrawCommand, Frame, Layout, PixelRect};
pub use rng::PieceGenerator;
pub use scoring::{level_for_lines, line_clear_score, tick_interval_ms};
pub use snapshot::GameSnapshot;
