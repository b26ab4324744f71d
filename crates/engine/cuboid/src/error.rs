//! Error types for figure loading and validation

use glam::IVec3;
use thiserror::Error;

/// Result type for cuboid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, validating or writing a figure
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Figure file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A fully triangulated box has a collapsed axis, so some face probe
    /// produced no face or more than one
    #[error("Degenerate box {index} in part '{part}': {near} -> {far}")]
    DegenerateBox {
        part: String,
        index: usize,
        near: IVec3,
        far: IVec3,
    },

    /// Figure contains no boxes at all
    #[error("Figure has no boxes")]
    EmptyFigure,

    /// Part color component outside [0, 1]
    #[error("Color {color:?} of part '{part}' is outside [0, 1]")]
    InvalidColor { part: String, color: [f32; 3] },
}
