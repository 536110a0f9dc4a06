//! Error types
//!
//! Geometry errors are raised at construction boundaries. Numeric noise
//! inside the collision math is clamped locally and never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building or querying geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Direction requested between two coincident points
    #[error("degenerate input: direction between coincident points is undefined")]
    DegenerateInput,

    /// Circle radius was negative or not a number
    #[error("invalid circle radius: {0}")]
    InvalidRadius(f32),

    /// A coordinate was NaN or infinite
    #[error("non-finite coordinate")]
    NonFinite,
}

/// Errors from loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),

    #[error("cannot build scene: {0}")]
    Geometry(#[from] GeometryError),
}
