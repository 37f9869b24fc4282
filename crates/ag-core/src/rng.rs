//! Deterministic simulation-level RNG wrapper.
//!
//! Every stochastic input of an environment (currently only the weather
//! generator) draws from a `SimRng` seeded from `EnvConfig::seed`, so two
//! environments built from the same configuration evolve identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  Independent consumers take
/// separate streams with [`SimRng::stream`].
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// An RNG for independent stream `stream` of master seed `seed`.
    ///
    /// Stream `k` yields the same numbers no matter which streams were drawn
    /// before.
    pub fn stream(seed: u64, stream: u64) -> SimRng {
        Self::new(seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
