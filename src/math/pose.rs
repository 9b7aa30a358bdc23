use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position and orientation of the tracked object
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Mat3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        position: Vec3::ZERO,
        orientation: Mat3::IDENTITY,
    };

    pub fn new(position: Vec3, orientation: Mat3) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Mat3::IDENTITY,
        }
    }

    /// Axis the ribbon edges are offset along
    pub fn up(&self) -> Vec3 {
        self.orientation.y_axis
    }

    /// Axis used as the ribbon surface normal
    pub fn forward(&self) -> Vec3 {
        self.orientation.z_axis
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
