//! Error types for the stipple-field core.

use thiserror::Error;

/// Errors produced by configuration and sampling operations.
#[derive(Debug, Error)]
pub enum StippleError {
    /// Width or height was zero or negative when building a render config.
    #[error("invalid dimensions: width and height must be positive")]
    InvalidDimensions,

    /// Lattice cell count was zero or exceeded the field width, so the
    /// derived spacing would be zero.
    #[error("invalid cell count {cells} for width {width}: derived spacing must be at least 1")]
    InvalidCellCount { cells: i64, width: i64 },

    /// Lattice spacing was zero or negative.
    #[error("invalid lattice spacing: {0} (must be at least 1)")]
    InvalidSpacing(i64),

    /// Scan step was zero, negative, or non-finite (the scan would never
    /// terminate).
    #[error("invalid scan step: {0} (must be positive and finite)")]
    InvalidScanStep(f64),

    /// Dot radius was zero, negative, or non-finite.
    #[error("invalid dot radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),

    /// Density input range had zero width, which would divide by zero
    /// during normalization.
    #[error("degenerate density input range: both bounds are {0}")]
    DegenerateInputRange(f64),

    /// A sampled point's cell has a corner with no gradient assigned.
    /// Expected at the right/bottom field boundary; callers skip the point.
    #[error("no gradient at lattice point ({x}, {y})")]
    MissingGradient { x: i64, y: i64 },

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
