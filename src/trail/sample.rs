use glam::{Mat3, Vec3};

use crate::math::Pose;

/// One recorded pose snapshot
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub pose: Pose,
    /// Emitter time at which the snapshot was taken
    pub timestamp: f64,
}

impl Sample {
    pub fn new(pose: Pose, timestamp: f64) -> Self {
        Self { pose, timestamp }
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn orientation(&self) -> Mat3 {
        self.pose.orientation
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.timestamp
    }
}
