//! Game state module - the controller
//!
//! Owns the board, the active piece with its pivot position, the pre-generated
//! next piece and the session counters. Every external stimulus arrives as a
//! [`GameEvent`]; [`GameState::handle`] applies it and returns the side effects
//! the host has to carry out (arm/stop the gravity timer, repaint).
//!
//! Invalid moves are absorbed: the state stays as it was and no effect is
//! emitted. The only terminal state is [`GameStatus::GameOver`], which accepts
//! nothing but a restart.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{level_for_lines, line_clear_score, tick_interval_ms};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, SPAWN_X, SPAWN_Y};

/// Active falling piece and its pivot position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a piece at the mid-top spawn pivot
    pub fn spawn(piece: Piece) -> Self {
        Self {
            piece,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.piece.cells_at(self.x, self.y)
    }
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Window title shown for this status
    pub fn title(&self) -> &'static str {
        match self {
            GameStatus::Running => "Tetris",
            GameStatus::Paused => "Tetris - Paused",
            GameStatus::GameOver => "Tetris - Game Over",
        }
    }

    /// Caption of the pause button: what pressing it would do next
    pub fn pause_caption(&self) -> &'static str {
        match self {
            GameStatus::Paused => "Resume",
            _ => "Pause",
        }
    }
}

/// Something that happened to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Begin a fresh session
    Start,
    /// The gravity timer fired
    Tick,
    /// The player pressed a key
    Action(GameAction),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// (Re)start the periodic gravity timer with this interval
    ArmTimer { interval_ms: u32 },
    /// Stop the gravity timer
    StopTimer,
    /// State visible to the render model changed
    Redraw,
}

/// Effects of a single transition. At most one timer command plus a redraw
/// is produced, so this never allocates.
pub type Effects = ArrayVec<Effect, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    generator: PieceGenerator,
    board: Board,
    active: Option<ActivePiece>,
    next: Piece,
    score: u32,
    lines: u32,
    level: u32,
    status: GameStatus,
    started: bool,
}

impl GameState {
    /// Create a game whose piece sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_generator(PieceGenerator::new(seed))
    }

    /// Create a game with an OS-seeded piece sequence
    pub fn from_entropy() -> Self {
        Self::with_generator(PieceGenerator::from_entropy())
    }

    /// Fresh, not yet started session drawing pieces from `generator`
    pub fn with_generator(mut generator: PieceGenerator) -> Self {
        let next = generator.next_piece();
        Self {
            generator,
            board: Board::new(),
            active: None,
            next,
            score: 0,
            lines: 0,
            level: 1,
            status: GameStatus::Running,
            started: false,
        }
    }

    /// Apply one event and report the side effects the host must perform
    pub fn handle(&mut self, event: GameEvent) -> Effects {
        match event {
            GameEvent::Start => self.start(),
            GameEvent::Tick => self.tick(),
            GameEvent::Action(action) => self.apply_action(action),
        }
    }

    /// Start a fresh session from any state.
    ///
    /// The whole session is replaced; only the piece generator keeps its
    /// stream position.
    pub fn start(&mut self) -> Effects {
        let restart = self.started;
        *self = Self::with_generator(self.generator.clone());
        self.started = true;
        info!(restart, "session started");

        let mut effects = Effects::new();
        if self.spawn_piece() {
            effects.push(Effect::ArmTimer {
                interval_ms: self.interval_ms(),
            });
        } else {
            effects.push(Effect::StopTimer);
        }
        effects.push(Effect::Redraw);
        effects
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Lifecycle status.
    ///
    /// A game that was never started reports `Running` but ignores every
    /// event except `Start`/`Restart`; check [`GameState::started`] (or
    /// [`GameSnapshot::playable`]) to tell the two apart.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    fn is_running(&self) -> bool {
        self.started && self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Seed of the piece sequence, if one was given
    pub fn seed(&self) -> Option<u64> {
        self.generator.seed()
    }

    /// Gravity interval for the current level
    pub fn interval_ms(&self) -> u32 {
        tick_interval_ms(self.level)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> Piece {
        self.next
    }

    /// Copy of everything the render model and hosts need
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active,
            next: self.next,
            score: self.score,
            lines: self.lines,
            level: self.level,
            interval_ms: self.interval_ms(),
            status: self.status,
            started: self.started,
        }
    }

    /// Promote the next piece to active at the spawn pivot and draw a new
    /// next piece. Returns false (and ends the game) if the spawn cell is
    /// blocked.
    fn spawn_piece(&mut self) -> bool {
        let upcoming = self.generator.next_piece();
        let piece = std::mem::replace(&mut self.next, upcoming);
        let active = ActivePiece::spawn(piece);
        self.active = Some(active);

        if !self.board.is_valid_position(&piece, active.x, active.y) {
            self.status = GameStatus::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                level = self.level,
                "game over"
            );
            return false;
        }
        true
    }

    /// Swap in `piece` at `(x, y)` if it fits there
    fn try_place(&mut self, piece: Piece, x: i8, y: i8) -> bool {
        if !self.board.is_valid_position(&piece, x, y) {
            return false;
        }
        self.active = Some(ActivePiece { piece, x, y });
        true
    }

    /// Try to shift the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_place(active.piece, active.x + dx, active.y + dy)
    }

    /// Try to rotate the active piece in place (no kicks)
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_place(active.piece.rotated(), active.x, active.y)
    }

    /// Gravity: move down one row, or lock if blocked
    fn tick(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.is_running() {
            return effects;
        }

        if !self.try_move(0, 1) {
            self.drop_and_lock(&mut effects);
        }
        effects.push(Effect::Redraw);
        effects
    }

    /// Lock the active piece, clear rows, update counters, spawn the next piece
    fn drop_and_lock(&mut self, effects: &mut Effects) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.piece, active.x, active.y);
        let cleared = self.board.clear_full_rows();

        if cleared > 0 {
            let gained = line_clear_score(cleared);
            self.lines += cleared as u32;
            self.score = self.score.saturating_add(gained);

            let level = level_for_lines(self.lines);
            if level != self.level {
                info!(level, interval_ms = tick_interval_ms(level), "level up");
            }
            self.level = level;

            effects.push(Effect::ArmTimer {
                interval_ms: self.interval_ms(),
            });
        }

        debug!(
            kind = active.piece.kind().as_str(),
            x = active.x,
            y = active.y,
            cleared,
            score = self.score,
            "piece locked"
        );

        if !self.spawn_piece() {
            effects.push(Effect::StopTimer);
        }
    }

    /// Drop straight down until blocked, then lock immediately
    fn hard_drop(&mut self) -> Effects {
        let mut effects = Effects::new();
        while self.try_move(0, 1) {}
        self.drop_and_lock(&mut effects);
        effects.push(Effect::Redraw);
        effects
    }

    fn toggle_pause(&mut self) -> Effects {
        let mut effects = Effects::new();
        if !self.started {
            return effects;
        }

        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                effects.push(Effect::StopTimer);
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                effects.push(Effect::ArmTimer {
                    interval_ms: self.interval_ms(),
                });
            }
            GameStatus::GameOver => return effects,
        }
        effects.push(Effect::Redraw);
        effects
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> Effects {
        match action {
            GameAction::Restart => return self.start(),
            GameAction::Pause => return self.toggle_pause(),
            _ => {}
        }

        if !self.is_running() {
            return Effects::new();
        }

        let moved = match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => return self.hard_drop(),
            GameAction::Pause | GameAction::Restart => false,
        };

        let mut effects = Effects::new();
        if moved {
            effects.push(Effect::Redraw);
        }
        effects
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
