#![deny(unsafe_code)]
//! CPU rasterization target for the stipple-field renderer.
//!
//! The core renderer only knows a `draw(x, y, radius)` callback; this crate
//! supplies the surface behind it: a white RGBA8 [`Raster`] with filled
//! black circles, and a feature-gated PNG snapshot writer.

pub mod canvas;

#[cfg(feature = "png")]
pub mod snapshot;

pub use canvas::Raster;
