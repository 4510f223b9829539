//! Read-only copy of the controller state.
//!
//! The render model and hosts work from a snapshot instead of borrowing the
//! live [`GameState`](crate::game_state::GameState), so nothing outside the
//! controller can mutate the board.

use crate::board::Board;
use crate::game_state::{ActivePiece, GameStatus};
use crate::pieces::Piece;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActivePiece>,
    pub next: Piece,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub interval_ms: u32,
    pub status: GameStatus,
    pub started: bool,
}

impl GameSnapshot {
    /// Whether gravity and movement are currently live
    pub fn playable(&self) -> bool {
        self.started && self.status == GameStatus::Running
    }
}
