//! Wall-clock frame limiter

use std::time::{Duration, Instant};

use super::FrameClock;

/// Sleeps out the remainder of each frame, like a classic `clock.tick(fps)`
#[derive(Debug)]
pub struct FixedRateClock {
    last: Instant,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for FixedRateClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Target frame duration for a tick rate
pub fn frame_duration(rate: u32) -> Duration {
    Duration::from_secs(1) / rate.max(1)
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self, rate: u32) -> Duration {
        let target = frame_duration(rate);
        let spent = self.last.elapsed();
        if spent < target {
            std::thread::sleep(target - spent);
        }
        let now = Instant::now();
        let dt = now - self.last;
        self.last = now;
        dt
    }

    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
        // Don't count the delay against the next frame
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(12), Duration::from_nanos(83_333_333));
        assert_eq!(frame_duration(60), Duration::from_nanos(16_666_666));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_caps_rate() {
        let mut clock = FixedRateClock::new();
        let dt = clock.tick(100);
        assert!(dt >= Duration::from_millis(10));
    }
}
