use std::time::{Duration, Instant};

/// Countdown cadence: one tick per second
pub const COUNTDOWN_TICK_MS: u64 = 1000;

/// Default UI refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 250;

/// Get the countdown tick period
pub fn tick_duration() -> Duration {
    Duration::from_millis(COUNTDOWN_TICK_MS)
}

/// A cancellable periodic tick subscription.
///
/// The ticker does not run on its own: the owner polls it with the current
/// instant and gets back how many periods elapsed since the last poll.
/// Dropping the ticker cancels it; nothing fires after that.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    /// Arm a ticker whose first tick is due one period after `now`
    pub fn start(now: Instant, period: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Instant of the next pending tick
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Consume and return the number of ticks that have come due by `now`
    pub fn due(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        let mut count = 0;
        while self.next_due <= now {
            self.next_due += self.period;
            count += 1;
        }
        count
    }
}
