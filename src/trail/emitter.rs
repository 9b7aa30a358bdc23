use glam::Vec2;

use super::mesh::{MaterialRef, RibbonMesh};
use super::mesher::RibbonMesher;
use super::sample::Sample;
use super::window::SampleWindow;
use crate::config::{check_duration, check_interval, TrailConfig};
use crate::error::Result;
use crate::math::{LinearCurve, Pose};
use crate::timing::SnapshotTimer;

/// Per-emission state, torn down on stop and rebuilt on the next start
#[derive(Debug, Clone)]
struct TrailState {
    window: SampleWindow,
    mesh: RibbonMesh,
    timer: SnapshotTimer,
    elapsed: f64,
}

impl TrailState {
    fn new(config: &TrailConfig) -> Result<Self> {
        let capacity = config.sample_capacity()?;

        let mut mesh = RibbonMesh::with_sample_capacity(capacity);
        mesh.set_material(config.material.clone());

        Ok(Self {
            window: SampleWindow::with_capacity(capacity),
            mesh,
            timer: SnapshotTimer::new(config.snapshot_interval),
            elapsed: 0.0,
        })
    }
}

/// Trailing ribbon attached to a moving object.
///
/// Call [`TrailEmitter::update`] once per frame with the frame delta and the
/// object's current world pose. Every snapshot interval the emitter records
/// the pose (when it moved), ages out the oldest sample and rebuilds
/// [`TrailEmitter::mesh`].
#[derive(Debug, Clone)]
pub struct TrailEmitter {
    config: TrailConfig,
    state: Option<TrailState>,
}

impl TrailEmitter {
    pub fn new(config: TrailConfig) -> Self {
        let mut emitter = Self {
            config,
            state: None,
        };
        if emitter.config.emitting {
            emitter.init_state();
        }
        emitter
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn is_emitting(&self) -> bool {
        self.config.emitting
    }

    /// Begin emitting with fresh state. No-op if already emitting.
    pub fn start(&mut self) {
        if self.config.emitting {
            return;
        }
        self.config.emitting = true;
        log::info!("Trail emission started");
        self.init_state();
    }

    /// Stop emitting and discard all samples and geometry
    pub fn stop(&mut self) {
        if !self.config.emitting && self.state.is_none() {
            return;
        }
        self.config.emitting = false;
        self.state = None;
        log::info!("Trail emission stopped");
    }

    pub fn set_emitting(&mut self, emitting: bool) {
        if emitting {
            self.start();
        } else {
            self.stop();
        }
    }

    /// Current ribbon geometry, `None` while not emitting
    pub fn mesh(&self) -> Option<&RibbonMesh> {
        self.state.as_ref().map(|s| &s.mesh)
    }

    /// Current sample window, `None` while not emitting
    pub fn samples(&self) -> Option<&SampleWindow> {
        self.state.as_ref().map(|s| &s.window)
    }

    pub fn sample_count(&self) -> usize {
        self.samples().map_or(0, SampleWindow::len)
    }

    /// Time accumulated since emission started
    pub fn elapsed(&self) -> f64 {
        self.state.as_ref().map_or(0.0, |s| s.elapsed)
    }

    pub fn set_width(&mut self, width: f32) {
        self.config.width = width;
    }

    pub fn set_width_curve(&mut self, curve: LinearCurve) {
        self.config.width_curve = curve;
    }

    pub fn set_uv_scale(&mut self, uv_scale: Vec2) {
        self.config.uv_scale = uv_scale;
    }

    /// Change the maximum sample age. Invalid values leave the config untouched.
    pub fn set_duration(&mut self, duration: f32) -> Result<()> {
        check_duration(duration)?;
        let mut next = self.config.clone();
        next.duration = duration;
        self.apply_timing(next)
    }

    /// Change the snapshot period. Invalid values leave the config untouched.
    pub fn set_snapshot_interval(&mut self, interval: f32) -> Result<()> {
        check_interval(interval)?;
        let mut next = self.config.clone();
        next.snapshot_interval = interval;
        self.apply_timing(next)?;
        if let Some(state) = self.state.as_mut() {
            state.timer.set_interval(interval);
        }
        Ok(())
    }

    pub fn set_material(&mut self, material: Option<MaterialRef>) {
        if let Some(state) = self.state.as_mut() {
            state.mesh.set_material(material.clone());
        }
        self.config.material = material;
    }

    /// Advance the trail by `delta` with the tracked object at `pose`.
    /// Returns true when the mesh was rebuilt this frame.
    pub fn update(&mut self, delta: f32, pose: &Pose) -> bool {
        if !self.config.emitting {
            return false;
        }

        if self.state.is_none() {
            log::debug!("Trail state missing while emitting, reinitializing");
            self.init_state();
        }

        let config = &self.config;
        let Some(state) = self.state.as_mut() else {
            return false;
        };

        state.elapsed += f64::from(delta);
        if !state.timer.try_tick(delta) {
            return false;
        }

        let moved = state
            .window
            .newest()
            .map_or(true, |last| last.position() != pose.position);

        if moved {
            if let Some(dropped) = state.window.push(Sample::new(*pose, state.elapsed)) {
                log::warn!(
                    "Trail window full at {} samples, dropped sample from t={:.3}",
                    state.window.capacity(),
                    dropped.timestamp
                );
            }
        }

        if let Some(expired) = state.window.evict_expired_head(state.elapsed, config.duration) {
            log::trace!("Evicted sample from t={:.3}", expired.timestamp);
        }

        let mesher = RibbonMesher::new(config.width, config.uv_scale);
        mesher.build(&state.window, &config.width_curve, &mut state.mesh);
        true
    }

    fn init_state(&mut self) {
        match TrailState::new(&self.config) {
            Ok(state) => self.state = Some(state),
            Err(e) => {
                log::error!("Failed to create trail mesh, disabling emission: {}", e);
                self.config.emitting = false;
                self.state = None;
            }
        }
    }

    fn apply_timing(&mut self, next: TrailConfig) -> Result<()> {
        let capacity = next.sample_capacity()?;
        if let Some(state) = self.state.as_mut() {
            state.window.grow_to(capacity);
        }
        self.config = next;
        Ok(())
    }
}

impl Default for TrailEmitter {
    fn default() -> Self {
        Self::new(TrailConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrailError;
    use glam::Vec3;

    #[test]
    fn first_update_records_a_sample() {
        let mut emitter = TrailEmitter::default();
        assert!(emitter.update(0.0, &Pose::default()));
        assert_eq!(emitter.sample_count(), 1);
        assert!(emitter.mesh().unwrap().is_empty());
    }

    #[test]
    fn invalid_config_disables_emission() {
        let mut config = TrailConfig::default();
        config.duration = -1.0;

        let mut emitter = TrailEmitter::new(config);
        assert!(!emitter.is_emitting());
        assert!(emitter.mesh().is_none());
        assert!(!emitter.update(0.1, &Pose::default()));
    }

    #[test]
    fn lazily_reinitializes_missing_state() {
        let mut emitter = TrailEmitter::default();
        emitter.state = None;

        assert!(emitter.update(0.0, &Pose::default()));
        assert!(emitter.mesh().is_some());
        assert_eq!(emitter.sample_count(), 1);
    }

    #[test]
    fn rejected_setter_keeps_config() {
        let mut emitter = TrailEmitter::default();
        assert!(matches!(
            emitter.set_duration(0.0),
            Err(TrailError::InvalidDuration(_))
        ));
        assert!(matches!(
            emitter.set_snapshot_interval(-0.5),
            Err(TrailError::InvalidSnapshotInterval(_))
        ));
        assert_eq!(emitter.config().duration, crate::config::DEFAULT_DURATION);
    }

    #[test]
    fn longer_duration_grows_window() {
        let mut emitter = TrailEmitter::default();
        let before = emitter.samples().unwrap().capacity();
        emitter.set_duration(2.0).unwrap();
        assert!(emitter.samples().unwrap().capacity() > before);
    }

    #[test]
    fn material_reaches_mesh() {
        let mut emitter = TrailEmitter::default();
        emitter.set_material(Some(MaterialRef::new("glow")));
        assert_eq!(emitter.mesh().unwrap().material().unwrap().name(), "glow");
        assert_eq!(emitter.config().material, Some(MaterialRef::new("glow")));

        emitter.stop();
        emitter.start();
        assert_eq!(emitter.mesh().unwrap().material().unwrap().name(), "glow");
    }

    #[test]
    fn width_change_applies_on_next_rebuild() {
        let mut emitter = TrailEmitter::default();
        emitter.update(0.0, &Pose::from_position(Vec3::ZERO));
        emitter.update(0.02, &Pose::from_position(Vec3::X));

        emitter.set_width(2.0);
        emitter.update(0.02, &Pose::from_position(Vec3::X * 2.0));

        let top = emitter.mesh().unwrap().vertices()[0].position();
        assert!((top.y - 2.0).abs() < 1e-6);
    }
}
