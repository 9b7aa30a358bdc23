//! Pose sampling, sample aging and ribbon mesh generation

mod emitter;
mod mesh;
mod mesher;
mod sample;
mod window;

pub use emitter::TrailEmitter;
pub use mesh::{MaterialRef, RibbonMesh, RibbonVertex, VertexSink};
pub use mesher::{expected_triangle_count, RibbonMesher};
pub use sample::Sample;
pub use window::SampleWindow;
