//! Fixed-rate frame clock.

use std::thread;
use std::time::{Duration, Instant};

use crate::types::FrameClock;

/// Sleeps away whatever is left of each tick's budget.
///
/// The first call returns immediately; each later call returns no earlier
/// than `1 / rate` after the previous one returned.
#[derive(Debug, Clone, Default)]
pub struct TickLimiter {
    last: Option<Instant>,
}

impl TickLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time still to wait at `now` for a tick at `ticks_per_second`.
    pub fn remaining(&self, now: Instant, ticks_per_second: u32) -> Duration {
        let budget = Duration::from_secs(1) / ticks_per_second.max(1);
        match self.last {
            Some(last) => budget.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl FrameClock for TickLimiter {
    fn tick(&mut self, ticks_per_second: u32) {
        let wait = self.remaining(Instant::now(), ticks_per_second);
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_does_not_wait() {
        let clock = TickLimiter::new();
        assert_eq!(clock.remaining(Instant::now(), 10), Duration::ZERO);
    }

    #[test]
    fn remaining_budget_shrinks_with_elapsed_time() {
        let start = Instant::now();
        let clock = TickLimiter { last: Some(start) };
        assert_eq!(clock.remaining(start, 10), Duration::from_millis(100));
        assert_eq!(
            clock.remaining(start + Duration::from_millis(30), 10),
            Duration::from_millis(70)
        );
        assert_eq!(
            clock.remaining(start + Duration::from_millis(250), 10),
            Duration::ZERO
        );
    }

    #[test]
    fn consecutive_ticks_are_spaced() {
        let mut clock = TickLimiter::new();
        clock.tick(50);
        let t0 = Instant::now();
        clock.tick(50);
        assert!(t0.elapsed() >= Duration::from_millis(15));
    }
}
