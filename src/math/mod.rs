mod aabb;
mod curve;
mod pose;

pub use aabb::AABB;
pub use curve::{CurvePoint, LinearCurve, WidthCurve};
pub use pose::Pose;
