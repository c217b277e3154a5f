//! Logistic density mapping from raw noise values to draw probabilities.

use serde::{Deserialize, Serialize};

use crate::error::StippleError;
use crate::params::{param_bool, param_f64};

/// Default input range for normalized noise values.
const DEFAULT_INPUT_RANGE: (f64, f64) = (-1.0, 1.0);
/// Default normalized value at which the probability crosses 0.5.
const DEFAULT_THRESHOLD: f64 = 0.5;
/// Default steepness of the logistic transition.
const DEFAULT_CONTRAST: f64 = 0.3;

/// Parameters of the noise-to-probability sigmoid.
///
/// `threshold` is the post-normalization value at which the output is 0.5;
/// larger `contrast` sharpens the transition around it, and `contrast = 0`
/// collapses the whole field to a uniform probability of 0.5. `invert`
/// flips dense and sparse regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityConfig {
    input_range: (f64, f64),
    threshold: f64,
    contrast: f64,
    invert: bool,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            input_range: DEFAULT_INPUT_RANGE,
            threshold: DEFAULT_THRESHOLD,
            contrast: DEFAULT_CONTRAST,
            invert: false,
        }
    }
}

impl DensityConfig {
    /// Creates a validated config.
    ///
    /// Rejects an input range whose bounds coincide: normalization would
    /// divide by zero and poison every downstream probability with NaN.
    pub fn new(
        input_range: (f64, f64),
        threshold: f64,
        contrast: f64,
        invert: bool,
    ) -> Result<Self, StippleError> {
        if input_range.0 == input_range.1 {
            return Err(StippleError::DegenerateInputRange(input_range.0));
        }
        Ok(Self {
            input_range,
            threshold,
            contrast,
            invert,
        })
    }

    /// Extracts a config from a JSON object, falling back to defaults for
    /// missing keys. Recognized keys: `input_min`, `input_max`, `threshold`,
    /// `contrast`, `invert`.
    pub fn from_json(params: &serde_json::Value) -> Result<Self, StippleError> {
        Self::new(
            (
                param_f64(params, "input_min", DEFAULT_INPUT_RANGE.0),
                param_f64(params, "input_max", DEFAULT_INPUT_RANGE.1),
            ),
            param_f64(params, "threshold", DEFAULT_THRESHOLD),
            param_f64(params, "contrast", DEFAULT_CONTRAST),
            param_bool(params, "invert", false),
        )
    }

    /// Maps a raw noise value to a draw probability in (0, 1).
    ///
    /// Normalizes over the input range, clamps to [0, 1], optionally
    /// inverts, then applies the logistic centered at the threshold.
    pub fn probability(&self, value: f64) -> f64 {
        let (a, b) = self.input_range;
        let mut v = ((value - a) / (b - a)).clamp(0.0, 1.0);
        if self.invert {
            v = 1.0 - v;
        }
        let x = self.contrast * (v - self.threshold);
        1.0 / (1.0 + (-x).exp())
    }

    /// The configured input range.
    pub fn input_range(&self) -> (f64, f64) {
        self.input_range
    }

    /// The configured threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The configured contrast.
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Whether dense and sparse regions are flipped.
    pub fn invert(&self) -> bool {
        self.invert
    }
}
