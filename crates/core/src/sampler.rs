//! Gradient-noise sampling over a [`GradientLattice`].
//!
//! A sample locates the cell enclosing a point, dots each corner gradient
//! against the point, and blends the four contributions with quintic-faded
//! bilinear interpolation. The result is a raw scalar roughly proportional
//! to the lattice spacing; callers divide by the spacing before density
//! mapping.

use crate::error::StippleError;
use crate::lattice::GradientLattice;
use crate::vec2::Vec2;

/// Quintic fade `t³(t(6t − 15) + 10)`.
///
/// C²-continuous S-curve: both the first and second derivative vanish at 0
/// and 1, so interpolation weights blend smoothly across cell boundaries.
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `a + t(b − a)`.
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Corner contribution: the gradient dotted against `(point − gradient)`.
///
/// This offsets the point by the gradient itself, not by the corner's
/// position. The stippled texture this produces is the behavior being
/// preserved; see DESIGN.md before "correcting" it to textbook Perlin.
fn corner_dot(point: Vec2, gradient: Vec2) -> f64 {
    Vec2::new(point.x - gradient.x, point.y - gradient.y).dot(gradient)
}

/// Samples the noise field at a continuous point.
///
/// Returns `MissingGradient` if any corner of the enclosing cell lies outside
/// the built lattice, which happens for points at or past the right/bottom
/// lattice boundary. That is an expected edge condition: callers skip the
/// point rather than substitute a default.
pub fn sample(point: Vec2, lattice: &GradientLattice) -> Result<f64, StippleError> {
    let d = lattice.spacing();
    let x0 = (point.x / d as f64).floor() as i64 * d;
    let y0 = (point.y / d as f64).floor() as i64 * d;

    let corner = |x: i64, y: i64| {
        lattice
            .gradient(x, y)
            .ok_or(StippleError::MissingGradient { x, y })
    };
    let top_left = corner(x0, y0)?;
    let top_right = corner(x0 + d, y0)?;
    let bottom_left = corner(x0, y0 + d)?;
    let bottom_right = corner(x0 + d, y0 + d)?;

    let sx = (point.x - x0 as f64) / d as f64;
    let sy = (point.y - y0 as f64) / d as f64;
    let u = fade(sx);
    let v = fade(sy);

    let top = lerp(u, corner_dot(point, top_left), corner_dot(point, top_right));
    let bottom = lerp(
        u,
        corner_dot(point, bottom_left),
        corner_dot(point, bottom_right),
    );
    Ok(lerp(v, top, bottom))
}
