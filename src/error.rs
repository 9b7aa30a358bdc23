use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrailError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid duration: {0} (must be finite and positive)")]
    InvalidDuration(f32),

    #[error("Invalid snapshot interval: {0} (must be finite and positive)")]
    InvalidSnapshotInterval(f32),

    #[error("Sample capacity {requested} exceeds limit of {limit}")]
    CapacityExceeded { requested: usize, limit: usize },

    #[error("Invalid width curve: {0}")]
    InvalidCurve(String),
}

pub type Result<T> = std::result::Result<T, TrailError>;
