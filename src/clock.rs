use std::thread;
use std::time::{Duration, Instant};

/// Returns the time budget of one tick at `ticks_per_second`.
///
/// A rate of zero is treated as one tick per second.
#[must_use]
pub fn interval_for_rate(ticks_per_second: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(ticks_per_second.max(1)))
}

/// Fixed-rate pacing for the game loop.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl TickClock {
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            interval: interval_for_rate(ticks_per_second),
            last_tick: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until one interval has passed since the previous call.
    ///
    /// The first call returns immediately. A late call does not sleep and
    /// does not try to catch up on missed ticks.
    pub fn tick(&mut self) {
        if let Some(last) = self.last_tick {
            let remaining = remaining_budget(self.interval, last.elapsed());
            if !remaining.is_zero() {
                thread::sleep(remaining);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

fn remaining_budget(interval: Duration, elapsed: Duration) -> Duration {
    interval.saturating_sub(elapsed)
}
