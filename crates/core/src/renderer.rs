//! Scan-grid renderer: turns a gradient lattice into dot draw calls.
//!
//! The renderer owns no drawing surface. It walks the scan grid, maps each
//! point's noise value to a probability, runs a Bernoulli trial, and hands
//! accepted points to the caller's draw callback.

use crate::config::RenderConfig;
use crate::density::DensityConfig;
use crate::lattice::GradientLattice;
use crate::prng::RandomSource;
use crate::sampler;
use crate::vec2::Vec2;

/// Counters from one rendering pass.
///
/// `skipped` counts scan points whose cell had a corner outside the lattice;
/// those are expected at the right/bottom boundary and draw nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub scanned: u64,
    pub drawn: u64,
    pub skipped: u64,
}

/// Renders one pass over the scan grid.
///
/// Scans `0..=width` / `0..=height` at the configured step, column-major
/// (x outer, y inner). Per point: sample the lattice, skip silently if a
/// corner gradient is missing, normalize the raw noise by the lattice
/// spacing, map through the density sigmoid, and draw iff
/// `rng.uniform() < p`. The callback receives `(x, y, radius)`.
///
/// The pass is reproducible iff `rng` is seeded deterministically and the
/// lattice is reused.
pub fn render<R, F>(
    config: &RenderConfig,
    density: &DensityConfig,
    lattice: &GradientLattice,
    rng: &mut R,
    mut draw: F,
) -> RenderStats
where
    R: RandomSource,
    F: FnMut(f64, f64, f64),
{
    let width = config.width() as f64;
    let height = config.height() as f64;
    let step = config.step();
    let spacing = lattice.spacing() as f64;
    let mut stats = RenderStats::default();

    // k*step instead of accumulation keeps the inclusive bound exact for
    // fractional steps.
    let mut col = 0u64;
    loop {
        let i = col as f64 * step;
        if i > width {
            break;
        }
        let mut row = 0u64;
        loop {
            let j = row as f64 * step;
            if j > height {
                break;
            }
            stats.scanned += 1;
            match sampler::sample(Vec2::new(i, j), lattice) {
                Ok(noise) => {
                    let normalized = noise / spacing;
                    let p = density.probability(normalized);
                    if rng.uniform() < p {
                        draw(i, j, config.radius());
                        stats.drawn += 1;
                    }
                }
                Err(_) => stats.skipped += 1,
            }
            row += 1;
        }
        col += 1;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StippleError;
    use crate::prng::Xorshift64;

    /// Random source that replays one fixed value forever.
    struct ConstSource(f64);

    impl RandomSource for ConstSource {
        fn uniform(&mut self) -> f64 {
            self.0
        }
    }

    fn flat_lattice(max: i64, spacing: i64) -> GradientLattice {
        let mut entries = Vec::new();
        let mut x = 0;
        while x <= max {
            let mut y = 0;
            while y <= max {
                entries.push(((x, y), Vec2::new(1.0, 0.0)));
                y += spacing;
            }
            x += spacing;
        }
        GradientLattice::from_gradients(spacing, entries).unwrap()
    }

    fn uniform_density() -> DensityConfig {
        // contrast = 0 pins every probability at exactly 0.5.
        DensityConfig::new((-1.0, 1.0), 0.5, 0.0, false).unwrap()
    }

    #[test]
    fn scan_covers_inclusive_bounds_in_column_major_order() {
        let config = RenderConfig::new(8, 8, 2, 4.0, 1.0).unwrap();
        let lattice = flat_lattice(16, 4);
        let mut rng = ConstSource(0.0); // always draws
        let mut points = Vec::new();
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |x, y, _| {
            points.push((x, y));
        });
        assert_eq!(stats.scanned, 9);
        assert_eq!(stats.skipped, 0);
        assert_eq!(
            points,
            vec![
                (0.0, 0.0),
                (0.0, 4.0),
                (0.0, 8.0),
                (4.0, 0.0),
                (4.0, 4.0),
                (4.0, 8.0),
                (8.0, 0.0),
                (8.0, 4.0),
                (8.0, 8.0),
            ]
        );
    }

    #[test]
    fn bernoulli_draws_when_uniform_below_probability() {
        // p = 0.5 everywhere; a 0.4 draw passes at every point.
        let config = RenderConfig::new(4, 4, 1, 4.0, 1.0).unwrap();
        let lattice = flat_lattice(8, 4);
        let mut rng = ConstSource(0.4);
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |_, _, _| {});
        assert_eq!(stats.drawn, stats.scanned);
    }

    #[test]
    fn bernoulli_skips_when_uniform_at_or_above_probability() {
        let config = RenderConfig::new(4, 4, 1, 4.0, 1.0).unwrap();
        let lattice = flat_lattice(8, 4);
        // Exactly p: strict `<` comparison must not draw.
        let mut rng = ConstSource(0.5);
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |_, _, _| {});
        assert_eq!(stats.drawn, 0);

        let mut rng = ConstSource(0.6);
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |_, _, _| {});
        assert_eq!(stats.drawn, 0);
    }

    #[test]
    fn low_probability_field_draws_nothing() {
        // Saturated sigmoid far below the 0.4 trial value at every point.
        let config = RenderConfig::new(4, 4, 1, 4.0, 1.0).unwrap();
        let lattice = flat_lattice(8, 4);
        let density = DensityConfig::new((-1.0, 1.0), 1.0, 1000.0, false).unwrap();
        let mut rng = ConstSource(0.4);
        let stats = render(&config, &density, &lattice, &mut rng, |_, _, _| {});
        assert_eq!(stats.drawn, 0);
        assert_eq!(stats.scanned, 4);
    }

    #[test]
    fn boundary_points_without_corners_are_skipped_not_fatal() {
        // Lattice only spans 0..=4, so any point with x0 = 4 or y0 = 4
        // needs a corner at 8 that does not exist.
        let config = RenderConfig::new(4, 4, 1, 4.0, 1.0).unwrap();
        let lattice = flat_lattice(4, 4);
        let mut rng = ConstSource(0.0);
        let mut points = Vec::new();
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |x, y, _| {
            points.push((x, y));
        });
        assert_eq!(stats.scanned, 4);
        assert_eq!(stats.skipped, 3);
        assert_eq!(points, vec![(0.0, 0.0)]);
    }

    #[test]
    fn callback_receives_configured_radius() {
        let config = RenderConfig::new(4, 4, 1, 4.0, 1.5).unwrap();
        let lattice = flat_lattice(8, 4);
        let mut rng = ConstSource(0.0);
        render(&config, &uniform_density(), &lattice, &mut rng, |_, _, r| {
            assert_eq!(r, 1.5);
        });
    }

    #[test]
    fn seeded_passes_are_reproducible() {
        let config = RenderConfig::new(64, 64, 8, 4.0, 1.5).unwrap();
        let density = DensityConfig::default();

        let run = |seed: u64| {
            let mut rng = Xorshift64::new(seed);
            let lattice =
                GradientLattice::build(config.width(), config.height(), config.spacing(), &mut rng)
                    .unwrap();
            let mut points = Vec::new();
            let stats = render(&config, &density, &lattice, &mut rng, |x, y, _| {
                points.push((x, y));
            });
            (stats, points)
        };

        let (stats_a, points_a) = run(42);
        let (stats_b, points_b) = run(42);
        assert_eq!(stats_a, stats_b);
        assert_eq!(points_a, points_b);

        let (_, points_c) = run(43);
        assert_ne!(points_a, points_c, "different seeds produced identical dot sets");
    }

    #[test]
    fn fractional_step_still_reaches_the_far_edge() {
        let config = RenderConfig::new(3, 3, 1, 1.5, 1.0).unwrap();
        let lattice = flat_lattice(6, 3);
        let mut rng = ConstSource(0.0);
        let mut max_seen: f64 = 0.0;
        let stats = render(&config, &uniform_density(), &lattice, &mut rng, |x, y, _| {
            max_seen = max_seen.max(x).max(y);
        });
        // {0, 1.5, 3} in each axis.
        assert_eq!(stats.scanned, 9);
        assert_eq!(max_seen, 3.0);
    }

    #[test]
    fn missing_gradient_error_shape_is_what_render_swallows() {
        // Sanity-check the variant the renderer treats as skippable.
        let lattice = flat_lattice(4, 4);
        let err = sampler::sample(Vec2::new(5.0, 5.0), &lattice).unwrap_err();
        assert!(matches!(err, StippleError::MissingGradient { .. }));
    }
}
