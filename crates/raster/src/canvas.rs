//! White RGBA8 surface with filled-circle dot drawing.

use stipple_core::StippleError;

/// A fixed-size RGBA8 pixel surface, white until drawn on.
///
/// `fill_circle` is the concrete implementation of the renderer's draw
/// callback: a filled black disc, clipped at the surface edges.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a white surface of the given pixel dimensions.
    ///
    /// Returns `InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, StippleError> {
        if width == 0 || height == 0 {
            return Err(StippleError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data: vec![255; width as usize * height as usize * 4],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read-only access to the RGBA8 buffer, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The RGB bytes of the pixel at `(x, y)`.
    ///
    /// Returns `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Draws a filled black circle of the given radius centered at `(cx, cy)`.
    ///
    /// Pixels whose center lies within the radius are painted. The circle is
    /// clipped at the surface edges; a center fully outside the surface
    /// draws nothing.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        if !(cx.is_finite() && cy.is_finite()) || radius <= 0.0 {
            return;
        }
        let x_min = ((cx - radius).floor().max(0.0)) as i64;
        let x_max = ((cx + radius).ceil().min(self.width as f64 - 1.0)) as i64;
        let y_min = ((cy - radius).floor().max(0.0)) as i64;
        let y_max = ((cy + radius).ceil().min(self.height as f64 - 1.0)) as i64;
        let r2 = radius * radius;

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                if dx * dx + dy * dy <= r2 {
                    let idx = (y as usize * self.width as usize + x as usize) * 4;
                    self.data[idx] = 0;
                    self.data[idx + 1] = 0;
                    self.data[idx + 2] = 0;
                }
            }
        }
    }

    /// Number of non-white pixels, for density assertions in tests and the
    /// CLI's JSON report.
    pub fn inked_pixels(&self) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|px| px[0] != 255 || px[1] != 255 || px[2] != 255)
            .count()
    }
}
