//! Reproducible specification for a stipple piece.
//!
//! A [`Recipe`] is the JSON-serializable bundle of everything needed to
//! regenerate a dot field bit-for-bit: scan geometry, lattice cell count,
//! PRNG seed, and density parameters.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::density::DensityConfig;
use crate::error::StippleError;

/// Everything needed to recreate one rendered piece.
///
/// Two identical recipes fed to the same binary produce identical dot
/// patterns: the seed drives both gradient assignment and the Bernoulli
/// draws. `density` is a free-form JSON object read with the same keys as
/// [`DensityConfig::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub width: i64,
    pub height: i64,
    pub cells: i64,
    pub step: f64,
    pub radius: f64,
    pub seed: u64,
    pub density: serde_json::Value,
}

impl Recipe {
    /// Creates a recipe with empty density params (all defaults).
    pub fn new(width: i64, height: i64, cells: i64, step: f64, radius: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            cells,
            step,
            radius,
            seed,
            density: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// Validates the recipe into its two runtime configs.
    ///
    /// Surfaces the same errors as [`RenderConfig::new`] and
    /// [`DensityConfig::from_json`], so a bad recipe fails before any
    /// lattice is built.
    pub fn resolve(&self) -> Result<(RenderConfig, DensityConfig), StippleError> {
        let render = RenderConfig::new(self.width, self.height, self.cells, self.step, self.radius)?;
        let density = DensityConfig::from_json(&self.density)?;
        Ok((render, density))
    }
}
