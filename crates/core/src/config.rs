//! Render configuration: field dimensions, scan geometry, and the derived
//! lattice spacing.

use serde::{Deserialize, Serialize};

use crate::error::StippleError;

/// Geometry of one rendering pass.
///
/// The lattice spacing is derived, not stored: `spacing() = width / cells`
/// (floor division), matching how the lattice itself is laid out. A scan
/// step smaller than the dot radius makes dots overdraw; that is allowed
/// but pointless, so it is documented rather than enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    width: i64,
    height: i64,
    cells: i64,
    step: f64,
    radius: f64,
}

impl RenderConfig {
    /// Creates a validated config.
    ///
    /// Rejects non-positive dimensions, a cell count outside `1..=width`
    /// (the derived spacing must be at least 1), and non-positive or
    /// non-finite scan step or radius.
    pub fn new(
        width: i64,
        height: i64,
        cells: i64,
        step: f64,
        radius: f64,
    ) -> Result<Self, StippleError> {
        if width < 1 || height < 1 {
            return Err(StippleError::InvalidDimensions);
        }
        if cells < 1 || cells > width {
            return Err(StippleError::InvalidCellCount { cells, width });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(StippleError::InvalidScanStep(step));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(StippleError::InvalidRadius(radius));
        }
        Ok(Self {
            width,
            height,
            cells,
            step,
            radius,
        })
    }

    /// Field width in pixels.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Number of lattice cells across the width.
    pub fn cells(&self) -> i64 {
        self.cells
    }

    /// Scan step between candidate dot positions.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Dot radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Derived lattice spacing `floor(width / cells)`.
    pub fn spacing(&self) -> i64 {
        self.width / self.cells
    }
}
