use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::trail::{MaterialRef, RibbonMesh, RibbonVertex};

/// Serializable view of a ribbon mesh
#[derive(Debug, Serialize)]
pub struct MeshExport<'a> {
    pub material: Option<&'a MaterialRef>,
    pub triangle_count: usize,
    pub vertices: &'a [RibbonVertex],
}

impl<'a> From<&'a RibbonMesh> for MeshExport<'a> {
    fn from(mesh: &'a RibbonMesh) -> Self {
        Self {
            material: mesh.material(),
            triangle_count: mesh.triangle_count(),
            vertices: mesh.vertices(),
        }
    }
}

pub fn write_json<W: Write>(mesh: &RibbonMesh, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &MeshExport::from(mesh))?;
    Ok(())
}

/// Write the mesh as Wavefront OBJ. Vertices are not deduplicated; each
/// triangle references its own three position/uv/normal entries.
pub fn write_obj<W: Write>(mesh: &RibbonMesh, mut writer: W) -> Result<()> {
    writeln!(writer, "# trail ribbon: {} triangles", mesh.triangle_count())?;
    writeln!(writer, "o ribbon")?;
    if let Some(material) = mesh.material() {
        writeln!(writer, "usemtl {}", material.name())?;
    }

    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.position[0], v.position[1], v.position[2])?;
    }
    for v in mesh.vertices() {
        writeln!(writer, "vt {} {}", v.uv[0], v.uv[1])?;
    }
    for v in mesh.vertices() {
        writeln!(writer, "vn {} {} {}", v.normal[0], v.normal[1], v.normal[2])?;
    }

    // OBJ indices are 1-based
    for tri in 0..mesh.triangle_count() {
        let base = tri * 3 + 1;
        writeln!(
            writer,
            "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}",
            a = base,
            b = base + 1,
            c = base + 2
        )?;
    }

    writer.flush()?;
    Ok(())
}
