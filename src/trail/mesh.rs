use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::AABB;

/// Ribbon vertex laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct RibbonVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl RibbonVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}

/// Opaque reference to the material the host applies to the ribbon surface
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialRef(pub String);

impl MaterialRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Immediate-mode triangle list receiver
pub trait VertexSink {
    /// Discard previous contents and start a new triangle list
    fn begin(&mut self);

    /// Append one vertex; every three vertices form a triangle
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2);

    /// Finish the current triangle list
    fn end(&mut self) {}
}

/// Owned triangle list rebuilt in place each frame
#[derive(Debug, Clone, Default)]
pub struct RibbonMesh {
    vertices: Vec<RibbonVertex>,
    material: Option<MaterialRef>,
    building: bool,
}

impl RibbonMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocate room for a window of `samples` samples
    pub fn with_sample_capacity(samples: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(samples.saturating_sub(1) * 6),
            material: None,
            building: false,
        }
    }

    pub fn vertices(&self) -> &[RibbonVertex] {
        &self.vertices
    }

    /// Raw vertex bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn material(&self) -> Option<&MaterialRef> {
        self.material.as_ref()
    }

    pub fn set_material(&mut self, material: Option<MaterialRef>) {
        self.material = material;
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices.iter().map(RibbonVertex::position))
    }

    /// Iterate triangles as vertex triples
    pub fn triangles(&self) -> impl Iterator<Item = &[RibbonVertex]> + '_ {
        self.vertices.chunks_exact(3)
    }
}

impl VertexSink for RibbonMesh {
    fn begin(&mut self) {
        self.vertices.clear();
        self.building = true;
    }

    fn add_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) {
        debug_assert!(self.building, "add_vertex called outside begin/end");
        self.vertices.push(RibbonVertex::new(position, normal, uv));
    }

    fn end(&mut self) {
        self.building = false;
    }
}
