use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrailError};
use crate::math::LinearCurve;
use crate::trail::MaterialRef;

pub const DEFAULT_DURATION: f32 = 0.5;
pub const DEFAULT_SNAPSHOT_INTERVAL: f32 = 0.02;
pub const DEFAULT_WIDTH: f32 = 0.5;

/// Upper bound on samples held by one trail
pub const MAX_SAMPLES: usize = 1 << 16;

/// Settings for a trail emitter. Missing fields in a config file fall back
/// to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub emitting: bool,
    /// Maximum sample age kept in the trail
    pub duration: f32,
    /// Time between pose snapshots
    pub snapshot_interval: f32,
    /// Global width multiplier
    pub width: f32,
    pub width_curve: LinearCurve,
    pub uv_scale: Vec2,
    pub material: Option<MaterialRef>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            emitting: true,
            duration: DEFAULT_DURATION,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
            width: DEFAULT_WIDTH,
            width_curve: LinearCurve::default(),
            uv_scale: Vec2::ONE,
            material: None,
        }
    }
}

impl TrailConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.sample_capacity().map(|_| ())
    }

    /// Number of samples a window must hold to cover `duration`
    pub fn sample_capacity(&self) -> Result<usize> {
        check_duration(self.duration)?;
        check_interval(self.snapshot_interval)?;

        let slots = (self.duration / self.snapshot_interval).ceil();
        if !slots.is_finite() || slots >= MAX_SAMPLES as f32 {
            return Err(TrailError::CapacityExceeded {
                requested: if slots.is_finite() { slots as usize } else { usize::MAX },
                limit: MAX_SAMPLES,
            });
        }

        let requested = slots as usize + 2;
        if requested > MAX_SAMPLES {
            return Err(TrailError::CapacityExceeded {
                requested,
                limit: MAX_SAMPLES,
            });
        }
        Ok(requested)
    }
}

pub(crate) fn check_duration(duration: f32) -> Result<()> {
    if duration.is_finite() && duration > 0.0 {
        Ok(())
    } else {
        Err(TrailError::InvalidDuration(duration))
    }
}

pub(crate) fn check_interval(interval: f32) -> Result<()> {
    if interval.is_finite() && interval > 0.0 {
        Ok(())
    } else {
        Err(TrailError::InvalidSnapshotInterval(interval))
    }
}
