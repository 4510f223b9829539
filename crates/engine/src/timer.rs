//! Gravity timer.

use std::time::Duration;

/// Periodic timer the controller arms and stops through effects.
pub trait TimerService {
    /// (Re)start the timer with a period of `interval_ms`, discarding any
    /// partially elapsed period.
    fn start(&mut self, interval_ms: u32);

    /// Stop the timer; no ticks are delivered until the next `start`.
    fn stop(&mut self);
}

/// A timer driven by the host's elapsed time rather than a wall clock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickTimer {
    /// Period, or `None` while stopped.
    interval: Option<Duration>,
    /// Time accumulated towards the next tick.
    elapsed: Duration,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Current period in milliseconds, if running
    pub fn interval_ms(&self) -> Option<u32> {
        self.interval.map(|iv| iv.as_millis() as u32)
    }

    /// Account for `elapsed` time. Ignored while stopped.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.interval.is_some() {
            self.elapsed += elapsed;
        }
    }

    /// Consume one due tick, if any.
    pub fn take_due(&mut self) -> bool {
        match self.interval {
            Some(interval) if self.elapsed >= interval => {
                self.elapsed -= interval;
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while stopped
    pub fn until_next(&self) -> Option<Duration> {
        self.interval
            .map(|interval| interval.saturating_sub(self.elapsed))
    }
}

impl TimerService for TickTimer {
    fn start(&mut self, interval_ms: u32) {
        self.interval = Some(Duration::from_millis(u64::from(interval_ms)));
        self.elapsed = Duration::ZERO;
    }

    fn stop(&mut self) {
        self.interval = None;
        self.elapsed = Duration::ZERO;
    }
}
