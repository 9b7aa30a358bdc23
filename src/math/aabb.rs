use glam::Vec3;

/// Axis-aligned bounds of generated ribbon geometry
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// Degenerate box around a single point
    pub fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box containing every point, `None` for an empty iterator
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |acc, p| acc.grow(p)))
    }

    pub fn grow(&self, point: Vec3) -> AABB {
        AABB {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }
}
