use std::collections::VecDeque;

use super::sample::Sample;

/// Time-ordered ring of pose samples, oldest first.
///
/// Storage is allocated once up front. Pushing into a full window drops the
/// oldest sample instead of growing.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleWindow {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raise the bound to at least `capacity`; never shrinks
    pub fn grow_to(&mut self, capacity: usize) {
        if capacity > self.capacity {
            self.samples.reserve(capacity - self.samples.len());
            self.capacity = capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Sample> + '_ {
        self.samples.iter()
    }

    /// Append a sample, returns the sample dropped to make room, if any
    pub fn push(&mut self, sample: Sample) -> Option<Sample> {
        let dropped = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        dropped
    }

    /// Remove the oldest sample if its age strictly exceeds `duration`.
    ///
    /// At most one sample is removed per call; older stragglers behind it
    /// stay until later calls.
    pub fn evict_expired_head(&mut self, now: f64, duration: f32) -> Option<Sample> {
        match self.samples.front() {
            Some(oldest) if oldest.age(now) > f64::from(duration) => self.samples.pop_front(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Pose;
    use glam::Vec3;

    fn sample_at(x: f32, t: f64) -> Sample {
        Sample::new(Pose::from_position(Vec3::new(x, 0.0, 0.0)), t)
    }

    #[test]
    fn push_keeps_order() {
        let mut window = SampleWindow::with_capacity(4);
        window.push(sample_at(0.0, 0.0));
        window.push(sample_at(1.0, 0.1));
        window.push(sample_at(2.0, 0.2));

        assert_eq!(window.len(), 3);
        assert_eq!(window.oldest().unwrap().timestamp, 0.0);
        assert_eq!(window.newest().unwrap().timestamp, 0.2);
        assert_eq!(window.get(1).unwrap().position().x, 1.0);
    }

    #[test]
    fn full_window_drops_oldest() {
        let mut window = SampleWindow::with_capacity(2);
        assert!(window.push(sample_at(0.0, 0.0)).is_none());
        assert!(window.push(sample_at(1.0, 1.0)).is_none());

        let dropped = window.push(sample_at(2.0, 2.0)).unwrap();
        assert_eq!(dropped.timestamp, 0.0);
        assert_eq!(window.len(), 2);
        assert_eq!(window.oldest().unwrap().timestamp, 1.0);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let window = SampleWindow::with_capacity(0);
        assert_eq!(window.capacity(), 1);
    }

    #[test]
    fn eviction_is_strictly_greater_than_duration() {
        let mut window = SampleWindow::with_capacity(4);
        window.push(sample_at(0.0, 1.0));

        // Age exactly equal to duration stays
        assert!(window.evict_expired_head(1.5, 0.5).is_none());
        assert_eq!(window.len(), 1);

        assert!(window.evict_expired_head(1.75, 0.5).is_some());
        assert!(window.is_empty());
    }

    #[test]
    fn eviction_removes_only_one() {
        let mut window = SampleWindow::with_capacity(4);
        window.push(sample_at(0.0, 0.0));
        window.push(sample_at(1.0, 0.1));
        window.push(sample_at(2.0, 0.2));

        window.evict_expired_head(10.0, 0.5);
        assert_eq!(window.len(), 2);
        assert_eq!(window.oldest().unwrap().timestamp, 0.1);
    }

    #[test]
    fn grow_to_never_shrinks() {
        let mut window = SampleWindow::with_capacity(4);
        window.grow_to(2);
        assert_eq!(window.capacity(), 4);
        window.grow_to(10);
        assert_eq!(window.capacity(), 10);
    }

    #[test]
    fn eviction_on_empty_window() {
        let mut window = SampleWindow::with_capacity(4);
        assert!(window.evict_expired_head(100.0, 0.5).is_none());
    }
}
