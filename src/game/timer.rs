//! Level countdown
//!
//! Counts whole ticks instead of subtracting `1/tick_rate` from a float,
//! so a 60 s clock at 60 Hz expires after exactly 3600 ticks.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining_ticks: u64,
    tick_rate: u32,
}

impl Countdown {
    pub fn new(seconds: u32, tick_rate: u32) -> Self {
        Self {
            remaining_ticks: seconds as u64 * tick_rate as u64,
            tick_rate,
        }
    }

    /// Advance one tick. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.remaining_ticks == 0
    }

    #[cfg(test)]
    pub fn remaining_ticks(&self) -> u64 {
        self.remaining_ticks
    }

    /// Seconds left, for display
    pub fn seconds_left(&self) -> f32 {
        self.remaining_ticks as f32 / self.tick_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_exact_tick_count() {
        let mut c = Countdown::new(60, 60);
        assert_eq!(c.seconds_left(), 60.0);
        for _ in 0..3599 {
            c.tick();
        }
        assert!(!c.expired());
        c.tick();
        assert!(c.expired());
        assert_eq!(c.seconds_left(), 0.0);
    }

    #[test]
    fn test_saturates_at_zero() {
        let mut c = Countdown::new(0, 60);
        assert!(c.expired());
        c.tick();
        assert_eq!(c.remaining_ticks(), 0);
    }
}
