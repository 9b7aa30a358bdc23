use std::path::PathBuf;

use trail_ribbon::frame::FixedStepFrames;
use trail_ribbon::math::WidthCurve;
use trail_ribbon::motion::Orbit;
use trail_ribbon::simulation::simulate;
use trail_ribbon::{TrailConfig, TrailEmitter, TrailError};

#[cfg(test)]
mod config_tests {
    use super::*;

    fn config_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("configs").join(name)
    }

    #[test]
    fn test_load_tapered_config() {
        let config = TrailConfig::load(config_path("tapered.json")).unwrap();

        assert_eq!(config.duration, 0.75);
        assert_eq!(config.width, 0.4);
        assert_eq!(config.uv_scale.x, 4.0);
        assert_eq!(config.width_curve.sample(0.0), 0.0);
        assert_eq!(config.width_curve.sample(0.8), 1.0);
        assert_eq!(config.material.as_ref().unwrap().name(), "trail_additive");
    }

    #[test]
    fn test_missing_config_is_io_error() {
        let result = TrailConfig::load(config_path("does_not_exist.json"));
        assert!(matches!(result, Err(TrailError::Io(_))));
    }

    #[test]
    fn test_tapered_trail_on_orbit() {
        let config = TrailConfig::load(config_path("tapered.json")).unwrap();
        let mut emitter = TrailEmitter::new(config);
        let path = Orbit::new(glam::Vec3::ZERO, 2.0, 3.0);

        let report = simulate(&mut emitter, &path, FixedStepFrames::new(0.02).take(100));

        assert!(report.samples > 30);
        assert_eq!(report.triangles, 2 * (report.samples - 1));
        let mesh = emitter.mesh().unwrap();
        assert_eq!(mesh.material().unwrap().name(), "trail_additive");

        // Zero width at the tail collapses the first edge pair onto the center line
        let first = &mesh.vertices()[0];
        let third = &mesh.vertices()[2];
        assert_eq!(first.position, third.position);
    }
}
