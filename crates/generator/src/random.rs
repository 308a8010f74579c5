// Randomness seam for the generator

use log::warn;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// The two kinds of draw the generator needs
///
/// Tests implement this directly to script or force draws.
pub trait RandomSource {
    /// Index into `weights`, chosen with probability proportional to each weight
    fn weighted_index(&mut self, weights: &[f64]) -> usize;

    /// Uniform index in `0..len`
    fn uniform_index(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        (**self).weighted_index(weights)
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        (**self).uniform_index(len)
    }
}

/// Source seeded from a fixed `u64`
pub type SeededSource = RngSource<StdRng>;

/// Adapts any `rand` generator to [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Backed by the thread-local OS-seeded generator
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream; the same seed gives the same patterns
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(err) => {
                warn!("Invalid weights {:?} ({}), drawing uniformly", weights, err);
                self.uniform_index(weights.len())
            }
        }
    }

    fn uniform_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
