//! Fixed-interval task scheduling for the tick loop.
//!
//! Replaces free-running background coroutines: spawner and stats cadences
//! are advanced explicitly as part of each tick and fire zero or more times
//! depending on how much simulated time has elapsed.

/// Accumulating interval timer.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
        }
    }

    /// Advances the timer by `dt` and returns how many whole periods
    /// expired. Catch-up safe: a large `dt` yields multiple expiries.
    pub fn fire(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut count = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fire_before_period() {
        let mut timer = Interval::new(1.0);
        assert_eq!(timer.fire(0.4), 0);
        assert_eq!(timer.fire(0.4), 0);
        assert_eq!(timer.fire(0.4), 1);
    }

    #[test]
    fn test_large_dt_catches_up() {
        let mut timer = Interval::new(0.5);
        assert_eq!(timer.fire(2.1), 4);
        assert_eq!(timer.fire(0.4), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut timer = Interval::new(1.0);
        assert_eq!(timer.fire(0.9), 0);
        assert_eq!(timer.fire(0.2), 1);
    }
}
