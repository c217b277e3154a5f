#![deny(unsafe_code)]
//! Core types for the stipple-field dot renderer.
//!
//! Provides the `Vec2` value type, `GradientLattice` (random unit gradients
//! on an integer lattice), the noise `sampler` (quintic-faded bilinear
//! gradient noise), `DensityConfig` (logistic noise-to-probability mapping),
//! the scan-grid `renderer`, the `Xorshift64` PRNG behind the
//! `RandomSource` trait, and the serializable `Recipe`.

pub mod config;
pub mod density;
pub mod error;
pub mod lattice;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod renderer;
pub mod sampler;
pub mod vec2;

pub use config::RenderConfig;
pub use density::DensityConfig;
pub use error::StippleError;
pub use lattice::GradientLattice;
pub use prng::{RandomSource, Xorshift64};
pub use recipe::Recipe;
pub use renderer::{render, RenderStats};
pub use vec2::Vec2;
