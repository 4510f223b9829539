//! Terminal display sink.
//!
//! Paints render-model [`Frame`](core::Frame)s into a character framebuffer
//! and flushes that framebuffer to a real terminal with `crossterm`.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pixel-space draw instructions to terminal cells
//!   (one board cell is 2x1 characters)
//! - [`renderer`]: full and diff redraws, terminal title, raw mode

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use plugin_tetris_core as core;
pub use plugin_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{TerminalView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
