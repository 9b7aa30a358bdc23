// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glam::Vec3;

use crate::motion::{Linear, MotionPath, Orbit, Stationary};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Stationary,
    Linear,
    Orbit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Print a short report
    Summary,
    /// Wavefront OBJ
    Obj,
    /// JSON vertex dump
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "trail-ribbon")]
#[command(about = "Headless trail ribbon simulator", long_about = None)]
pub struct Cli {
    /// Trail config file (JSON); defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path followed by the tracked object
    #[arg(long, value_enum, default_value_t = MotionKind::Orbit)]
    pub motion: MotionKind,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: usize,

    /// Frame delta in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub delta: f32,

    /// Linear speed, or radians per second for orbit
    #[arg(long, default_value_t = 3.0)]
    pub speed: f32,

    /// Make every Nth frame a long stall
    #[arg(long)]
    pub stall_every: Option<u64>,

    /// Delta used for stalled frames
    #[arg(long, default_value_t = 0.25)]
    pub stall_delta: f32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Write the selected output here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn motion_path(&self) -> Box<dyn MotionPath> {
        match self.motion {
            MotionKind::Stationary => Box::new(Stationary::at(Vec3::ZERO)),
            MotionKind::Linear => Box::new(Linear::new(Vec3::ZERO, Vec3::X * self.speed)),
            MotionKind::Orbit => Box::new(Orbit::new(Vec3::ZERO, 2.0, self.speed)),
        }
    }
}
