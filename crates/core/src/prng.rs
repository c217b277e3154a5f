//! Seedable random source for gradient angles and Bernoulli draws.
//!
//! The renderer and lattice builder only ever need uniform values in [0, 1),
//! so they take any [`RandomSource`]. Production code uses [`Xorshift64`];
//! tests substitute constant or scripted sources to pin down draw decisions.

use serde::{Deserialize, Serialize};

/// A source of uniformly distributed values in [0, 1).
///
/// Implementations must be deterministic for a given starting state so that
/// seeded renders reproduce exactly.
pub trait RandomSource {
    /// Returns the next uniform value in [0, 1).
    fn uniform(&mut self) -> f64;

    /// Returns a uniform value in [min, max).
    fn uniform_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.uniform() * (max - min)
    }
}

/// Xorshift64 PRNG with shift parameters (13, 7, 17).
///
/// Pure integer state transitions, so the same seed yields the same sequence
/// on every platform. A seed of 0 is the algorithm's fixed point and is
/// replaced with a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a generator from a seed, substituting a fallback for 0.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of the state scaled by 2^-53 for full mantissa precision.
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_matches_golden_value_for_seed_42() {
        // Known first output of xorshift64 with shifts (13, 7, 17) and seed 42.
        // Breaking this invalidates every recipe rendered with this generator.
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_falls_back_to_non_zero_state() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn identical_seeds_yield_identical_sequences() {
        let mut a = Xorshift64::new(777);
        let mut b = Xorshift64::new(777);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut rng = Xorshift64::new(31337);
        for i in 0..10_000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v), "uniform() = {v} at iteration {i}");
        }
    }

    #[test]
    fn uniform_range_respects_bounds() {
        let mut rng = Xorshift64::new(5);
        let tau = std::f64::consts::TAU;
        for _ in 0..10_000 {
            let angle = rng.uniform_range(0.0, tau);
            assert!((0.0..tau).contains(&angle));
        }
    }

    #[test]
    fn serialization_resumes_mid_sequence() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..25 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(
                rng.next_u64(),
                restored.next_u64(),
                "diverged after restore at index {i}"
            );
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn uniform_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.uniform();
                    prop_assert!((0.0..1.0).contains(&v));
                }
            }

            #[test]
            fn uniform_roughly_covers_the_interval(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let v = rng.uniform();
                    buckets[(v * 10.0).min(9.0) as usize] += 1;
                }
                // Loose bound (expected ~1000 per bucket) to avoid flakes.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i}: {count} of 10000");
                }
            }
        }
    }
}
