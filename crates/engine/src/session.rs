//! Session: a [`GameState`] wired to a timer service and a frame buffer.

use std::time::Duration;

use tracing::trace;

use crate::core::render::render_into;
use crate::core::{Effect, Effects, Frame, GameEvent, GameState};
use crate::timer::{TickTimer, TimerService};
use crate::types::GameAction;

/// Owns the controller, carries out its effects and caches the latest frame.
#[derive(Debug)]
pub struct Session<T = TickTimer> {
    game: GameState,
    timer: T,
    frame: Frame,
    dirty: bool,
}

impl<T: TimerService> Session<T> {
    pub fn new(game: GameState, timer: T) -> Self {
        Self {
            game,
            timer,
            frame: Frame::new(),
            dirty: true,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Begin (or restart) the game
    pub fn start(&mut self) {
        self.handle(GameEvent::Start);
    }

    /// Deliver a player action
    pub fn action(&mut self, action: GameAction) {
        self.handle(GameEvent::Action(action));
    }

    /// Feed one event to the controller and apply the resulting effects
    pub fn handle(&mut self, event: GameEvent) {
        let effects = self.game.handle(event);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Effects) {
        for effect in effects {
            match effect {
                Effect::ArmTimer { interval_ms } => {
                    trace!(interval_ms, "arm gravity timer");
                    self.timer.start(interval_ms);
                }
                Effect::StopTimer => {
                    trace!("stop gravity timer");
                    self.timer.stop();
                }
                Effect::Redraw => self.dirty = true,
            }
        }
    }

    /// Force the next [`Session::frame_if_dirty`] to produce a frame
    /// (e.g. after the host window was resized).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rebuild and return the frame if anything visible changed since the
    /// last call.
    pub fn frame_if_dirty(&mut self) -> Option<&Frame> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        render_into(&self.game.snapshot(), &mut self.frame);
        Some(&self.frame)
    }
}

impl Session<TickTimer> {
    /// Session with a fresh host-driven timer
    pub fn with_tick_timer(game: GameState) -> Self {
        Self::new(game, TickTimer::new())
    }

    /// Let `elapsed` pass and deliver every tick that came due.
    /// Returns the number of ticks delivered.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.timer.advance(elapsed);
        let mut delivered = 0;
        while self.timer.take_due() {
            self.handle(GameEvent::Tick);
            delivered += 1;
        }
        delivered
    }

    /// How long the host may wait for input before the next tick is due
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer.until_next()
    }
}
