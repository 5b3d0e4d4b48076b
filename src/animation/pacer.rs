//! Fixed-interval frame pacing

use std::time::{Duration, Instant};

/// Default tick interval (~33 frames per second)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Schedules frames a fixed interval apart
///
/// [`time_left`](Self::time_left) answers "how long until the next tick". When
/// the tick is already due it returns zero and schedules the following tick
/// one interval from now, so a late frame never causes a burst of catch-up
/// frames.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is scheduled, if any has been
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Time remaining until the next tick, or zero if it is due
    pub fn time_left(&mut self, now: Instant) -> Duration {
        match self.next_tick {
            Some(next) if next > now => next - now,
            _ => {
                self.next_tick = Some(now + self.interval);
                Duration::ZERO
            }
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
