use std::io::{self, Write};

use crate::frame::FrameInfo;
use crate::math::AABB;
use crate::motion::MotionPath;
use crate::trail::TrailEmitter;

/// Outcome of driving an emitter along a path
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub path: String,
    pub frames: u64,
    pub rebuilds: u64,
    pub elapsed: f64,
    pub samples: usize,
    pub peak_samples: usize,
    pub triangles: usize,
    pub vertex_bytes: usize,
    pub bounds: Option<AABB>,
}

impl SimulationReport {
    pub fn write_summary<W: Write>(&self, mut w: W) -> io::Result<()> {
        writeln!(w, "Path:          {}", self.path)?;
        writeln!(w, "Frames:        {}", self.frames)?;
        writeln!(w, "Mesh rebuilds: {}", self.rebuilds)?;
        writeln!(w, "Elapsed:       {:.3}", self.elapsed)?;
        writeln!(w, "Samples:       {} (peak {})", self.samples, self.peak_samples)?;
        writeln!(w, "Triangles:     {} ({} vertex bytes)", self.triangles, self.vertex_bytes)?;
        match &self.bounds {
            Some(b) => writeln!(w, "Bounds:        {:?} to {:?}", b.min, b.max),
            None => writeln!(w, "Bounds:        (empty)"),
        }
    }
}

/// Feed every frame to `emitter` with the path's pose at that frame's time
pub fn simulate<P, I>(emitter: &mut TrailEmitter, path: &P, frames: I) -> SimulationReport
where
    P: MotionPath + ?Sized,
    I: IntoIterator<Item = FrameInfo>,
{
    let mut frame_count = 0;
    let mut rebuilds = 0;
    let mut peak_samples = 0;

    for frame in frames {
        if emitter.update(frame.delta, &path.pose_at(frame.time)) {
            rebuilds += 1;
        }
        peak_samples = peak_samples.max(emitter.sample_count());
        frame_count += 1;
    }

    log::debug!(
        "Simulated {} frames on '{}' path, {} rebuilds",
        frame_count,
        path.name(),
        rebuilds
    );

    let mesh = emitter.mesh();
    SimulationReport {
        path: path.name().to_string(),
        frames: frame_count,
        rebuilds,
        elapsed: emitter.elapsed(),
        samples: emitter.sample_count(),
        peak_samples,
        triangles: mesh.map_or(0, |m| m.triangle_count()),
        vertex_bytes: mesh.map_or(0, |m| m.as_bytes().len()),
        bounds: mesh.and_then(|m| m.bounds()),
    }
}
