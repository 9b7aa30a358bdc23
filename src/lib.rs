pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod math;
pub mod motion;
pub mod simulation;
pub mod timing;
pub mod trail;

pub use config::TrailConfig;
pub use error::{Result, TrailError};
pub use trail::{RibbonMesh, RibbonMesher, SampleWindow, TrailEmitter, VertexSink};
