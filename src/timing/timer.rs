/// Snapshot timer - accumulates frame delta and fires at most once per frame
/// when the configured interval has elapsed

/// Throttled interval timer driving pose snapshots
#[derive(Debug, Clone, Copy)]
pub struct SnapshotTimer {
    interval: f32,
    time_since_last: f32,
}

impl SnapshotTimer {
    /// Create timer with given interval; the first tick always fires
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            time_since_last: interval,
        }
    }

    /// Advance by delta, returns true if a snapshot is due.
    /// Leftover time is discarded, so a long frame yields a single fire.
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Change the interval without resetting accumulated time
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_fires_immediately() {
        let mut timer = SnapshotTimer::new(0.5);
        assert!(timer.try_tick(0.0));
        assert!(!timer.try_tick(0.1));
    }

    #[test]
    fn fires_at_interval() {
        let mut timer = SnapshotTimer::new(0.1);
        assert!(timer.try_tick(0.0));

        assert!(!timer.try_tick(0.05)); // Too soon
        assert!(timer.try_tick(0.06));  // Enough time
        assert!(!timer.try_tick(0.01));
    }

    #[test]
    fn long_frame_fires_once() {
        let mut timer = SnapshotTimer::new(0.02);
        assert!(timer.try_tick(0.0));

        assert!(timer.try_tick(1.0));
        // Backlog is dropped rather than replayed
        assert!(!timer.try_tick(0.001));
    }

    #[test]
    fn set_interval_keeps_accumulator() {
        let mut timer = SnapshotTimer::new(1.0);
        assert!(timer.try_tick(0.0));
        assert!(!timer.try_tick(0.3));

        timer.set_interval(0.4);
        assert_eq!(timer.interval(), 0.4);
        assert!(timer.try_tick(0.2));
    }
}
