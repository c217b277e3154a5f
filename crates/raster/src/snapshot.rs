//! PNG snapshot of a [`Raster`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! in-memory surface can drop the `image` dependency.

use std::path::Path;

use stipple_core::StippleError;

use crate::canvas::Raster;

/// Writes the raster as a PNG file.
///
/// Returns `StippleError::Io` on encoding or write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), StippleError> {
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .ok_or_else(|| StippleError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| StippleError::Io(e.to_string()))
}
