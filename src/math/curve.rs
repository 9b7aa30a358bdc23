use serde::{Deserialize, Serialize};

use crate::error::{Result, TrailError};

/// Maps a normalized position along the ribbon to a width multiplier
pub trait WidthCurve {
    fn sample(&self, x: f32) -> f32;
}

impl<F: Fn(f32) -> f32> WidthCurve for F {
    fn sample(&self, x: f32) -> f32 {
        self(x)
    }
}

/// Control point of a [`LinearCurve`]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub offset: f32,
    pub value: f32,
}

impl CurvePoint {
    pub const fn new(offset: f32, value: f32) -> Self {
        Self { offset, value }
    }
}

/// Piecewise-linear curve over [0, 1].
///
/// Inputs are clamped to [0, 1]. Left of the first point the first value
/// holds, right of the last point the last value holds. A control point is
/// always returned exactly when sampled at its own offset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct LinearCurve {
    points: Vec<CurvePoint>,
}

impl LinearCurve {
    /// Build from control points sorted by offset, all offsets within [0, 1]
    pub fn new(points: Vec<CurvePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(TrailError::InvalidCurve("curve has no points".into()));
        }

        for point in &points {
            if !point.offset.is_finite() || !(0.0..=1.0).contains(&point.offset) {
                return Err(TrailError::InvalidCurve(format!(
                    "offset {} outside [0, 1]",
                    point.offset
                )));
            }
            if !point.value.is_finite() {
                return Err(TrailError::InvalidCurve(format!(
                    "non-finite value at offset {}",
                    point.offset
                )));
            }
        }

        if points.windows(2).any(|w| w[1].offset < w[0].offset) {
            return Err(TrailError::InvalidCurve(
                "points must be sorted by offset".into(),
            ));
        }

        Ok(Self { points })
    }

    pub fn constant(value: f32) -> Self {
        Self {
            points: vec![CurvePoint::new(0.0, value)],
        }
    }

    /// Straight line from `start` at 0 to `end` at 1
    pub fn ramp(start: f32, end: f32) -> Self {
        Self {
            points: vec![CurvePoint::new(0.0, start), CurvePoint::new(1.0, end)],
        }
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }
}

impl WidthCurve for LinearCurve {
    fn sample(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);

        // Index of the first point strictly to the right of x
        let upper = self.points.partition_point(|p| p.offset <= x);

        if upper == 0 {
            return self.points[0].value;
        }
        if upper == self.points.len() {
            return self.points[upper - 1].value;
        }

        let a = self.points[upper - 1];
        let b = self.points[upper];
        let span = b.offset - a.offset;
        if span <= f32::EPSILON {
            return a.value;
        }

        let t = (x - a.offset) / span;
        a.value + (b.value - a.value) * t
    }
}

impl Default for LinearCurve {
    fn default() -> Self {
        Self::constant(1.0)
    }
}

impl TryFrom<Vec<CurvePoint>> for LinearCurve {
    type Error = TrailError;

    fn try_from(points: Vec<CurvePoint>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<LinearCurve> for Vec<CurvePoint> {
    fn from(curve: LinearCurve) -> Self {
        curve.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_curve_is_flat() {
        let curve = LinearCurve::constant(0.25);
        assert_eq!(curve.sample(0.0), 0.25);
        assert_eq!(curve.sample(0.5), 0.25);
        assert_eq!(curve.sample(1.0), 0.25);
    }

    #[test]
    fn ramp_hits_endpoints_exactly() {
        let curve = LinearCurve::ramp(0.0, 2.0);
        assert_eq!(curve.sample(0.0), 0.0);
        assert_eq!(curve.sample(1.0), 2.0);
        assert!((curve.sample(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sample_clamps_input() {
        let curve = LinearCurve::ramp(1.0, 3.0);
        assert_eq!(curve.sample(-5.0), 1.0);
        assert_eq!(curve.sample(7.0), 3.0);
    }

    #[test]
    fn holds_outer_values() {
        let curve = LinearCurve::new(vec![
            CurvePoint::new(0.2, 4.0),
            CurvePoint::new(0.8, 8.0),
        ])
        .unwrap();
        assert_eq!(curve.sample(0.0), 4.0);
        assert_eq!(curve.sample(1.0), 8.0);
        assert!((curve.sample(0.5) - 6.0).abs() < 1e-5);
    }

    #[test]
    fn step_with_coincident_points() {
        let curve = LinearCurve::new(vec![
            CurvePoint::new(0.0, 1.0),
            CurvePoint::new(0.5, 1.0),
            CurvePoint::new(0.5, 0.0),
            CurvePoint::new(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(curve.sample(0.25), 1.0);
        assert_eq!(curve.sample(0.75), 0.0);
    }

    #[test]
    fn rejects_invalid_points() {
        assert!(LinearCurve::new(vec![]).is_err());
        assert!(LinearCurve::new(vec![CurvePoint::new(1.5, 1.0)]).is_err());
        assert!(LinearCurve::new(vec![CurvePoint::new(0.5, f32::NAN)]).is_err());
        assert!(LinearCurve::new(vec![
            CurvePoint::new(0.6, 1.0),
            CurvePoint::new(0.4, 1.0),
        ])
        .is_err());
    }

    #[test]
    fn closure_is_a_curve() {
        let curve = |x: f32| 1.0 - x;
        assert_eq!(WidthCurve::sample(&curve, 0.0), 1.0);
        assert_eq!(WidthCurve::sample(&curve, 1.0), 0.0);
    }

    #[test]
    fn deserialize_validates() {
        let ok: LinearCurve =
            serde_json::from_str(r#"[{"offset":0.0,"value":1.0},{"offset":1.0,"value":0.0}]"#)
                .unwrap();
        assert_eq!(ok, LinearCurve::ramp(1.0, 0.0));

        let bad = serde_json::from_str::<LinearCurve>(r#"[]"#);
        assert!(bad.is_err());
    }
}
