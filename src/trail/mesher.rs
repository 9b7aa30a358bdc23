use glam::{Vec2, Vec3};

use super::mesh::VertexSink;
use super::sample::Sample;
use super::window::SampleWindow;
use crate::math::WidthCurve;

/// Triangles emitted for a window of `samples` samples
pub const fn expected_triangle_count(samples: usize) -> usize {
    if samples < 2 {
        0
    } else {
        2 * (samples - 1)
    }
}

/// Converts a sample window into a triangle list.
///
/// Each consecutive sample pair becomes a quad of two triangles. Sample `i`
/// of `n` sits at `x = i / n` along the ribbon; its two edge vertices are
/// offset along the sample's up axis by `width * curve(x)` and share the
/// sample's forward axis as normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonMesher {
    pub width: f32,
    pub uv_scale: Vec2,
}

/// Edge vertices of one ribbon cross-section
struct Section {
    top: Vec3,
    bottom: Vec3,
    normal: Vec3,
    uv_top: Vec2,
    uv_bottom: Vec2,
}

impl RibbonMesher {
    pub fn new(width: f32, uv_scale: Vec2) -> Self {
        Self { width, uv_scale }
    }

    /// Distance from the ribbon center line to either edge at `x`
    pub fn half_width_at<C: WidthCurve + ?Sized>(&self, curve: &C, x: f32) -> f32 {
        curve.sample(x) * self.width
    }

    /// Rebuild `sink` from `window`, returns the number of triangles emitted
    pub fn build<C, S>(&self, window: &SampleWindow, curve: &C, sink: &mut S) -> usize
    where
        C: WidthCurve + ?Sized,
        S: VertexSink + ?Sized,
    {
        sink.begin();

        let count = window.len();
        if count < 2 {
            sink.end();
            return 0;
        }

        let len = count as f32;
        let mut triangles = 0;

        for (i, (prev, current)) in window.iter().zip(window.iter().skip(1)).enumerate() {
            let index = i + 1;
            let prev_section = self.section(prev, curve, (index - 1) as f32 / len);
            let section = self.section(current, curve, index as f32 / len);

            sink.add_vertex(prev_section.top, prev_section.normal, prev_section.uv_top);
            sink.add_vertex(section.top, section.normal, section.uv_top);
            sink.add_vertex(prev_section.bottom, prev_section.normal, prev_section.uv_bottom);

            sink.add_vertex(section.top, section.normal, section.uv_top);
            sink.add_vertex(section.bottom, section.normal, section.uv_bottom);
            sink.add_vertex(prev_section.bottom, prev_section.normal, prev_section.uv_bottom);

            triangles += 2;
        }

        sink.end();
        triangles
    }

    fn section<C: WidthCurve + ?Sized>(&self, sample: &Sample, curve: &C, x: f32) -> Section {
        let shape = curve.sample(x);
        let offset = sample.pose.up() * (shape * self.width);
        let position = sample.position();

        // V follows the curve so the texture narrows with the ribbon
        // instead of stretching across it
        let u = x * self.uv_scale.x;
        let half_v = 0.5 * shape * self.uv_scale.y;

        Section {
            top: position + offset,
            bottom: position - offset,
            normal: sample.pose.forward(),
            uv_top: Vec2::new(u, 0.5 + half_v),
            uv_bottom: Vec2::new(u, 0.5 - half_v),
        }
    }
}

impl Default for RibbonMesher {
    fn default() -> Self {
        Self {
            width: 1.0,
            uv_scale: Vec2::ONE,
        }
    }
}
