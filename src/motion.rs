use glam::{Mat3, Vec3};

use crate::math::Pose;

/// Deterministic path for a tracked object
pub trait MotionPath {
    /// World pose at time `t`
    fn pose_at(&self, t: f32) -> Pose;

    /// Get path name for debugging
    fn name(&self) -> &str {
        "Path"
    }
}

/// Object that never moves
#[derive(Debug, Clone, Copy)]
pub struct Stationary {
    pub pose: Pose,
}

impl Stationary {
    pub fn at(position: Vec3) -> Self {
        Self {
            pose: Pose::from_position(position),
        }
    }
}

impl MotionPath for Stationary {
    fn pose_at(&self, _t: f32) -> Pose {
        self.pose
    }

    fn name(&self) -> &str {
        "stationary"
    }
}

/// Constant velocity along a straight line, orientation held fixed
#[derive(Debug, Clone, Copy)]
pub struct Linear {
    pub start: Vec3,
    pub velocity: Vec3,
    pub orientation: Mat3,
}

impl Linear {
    pub fn new(start: Vec3, velocity: Vec3) -> Self {
        Self {
            start,
            velocity,
            orientation: Mat3::IDENTITY,
        }
    }
}

impl MotionPath for Linear {
    fn pose_at(&self, t: f32) -> Pose {
        Pose::new(self.start + self.velocity * t, self.orientation)
    }

    fn name(&self) -> &str {
        "linear"
    }
}

/// Circle in the XZ plane, oriented along the direction of travel with +Y up
#[derive(Debug, Clone, Copy)]
pub struct Orbit {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per time unit
    pub angular_speed: f32,
}

impl Orbit {
    pub fn new(center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            center,
            radius,
            angular_speed,
        }
    }
}

impl MotionPath for Orbit {
    fn pose_at(&self, t: f32) -> Pose {
        let angle = t * self.angular_speed;
        let (sin, cos) = angle.sin_cos();

        let position = self.center + Vec3::new(cos, 0.0, sin) * self.radius;
        let tangent = Vec3::new(-sin, 0.0, cos) * self.angular_speed.signum();
        let orientation = Mat3::from_cols(tangent, Vec3::Y, tangent.cross(Vec3::Y));

        Pose::new(position, orientation)
    }

    fn name(&self) -> &str {
        "orbit"
    }
}
