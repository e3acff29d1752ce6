//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for
//! an evolution run. It wraps the `rand` crate's `StdRng` and exposes the few
//! draws the genetic operators need: a gate test against a probability, a fair
//! coin and a uniform index.
//!
//! ## Example
//!
//! ```rust
//! use strevo::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let heads = rng.coin_flip();
//! let index = rng.index(29);
//! assert!(index < 29);
//! let _ = heads;
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a uniform value in `[0, 1)` and reports whether it falls below `rate`.
    ///
    /// A rate of `0.0` never passes and a rate of `1.0` always passes.
    pub fn chance(&mut self, rate: f64) -> bool {
        self.rng.gen::<f64>() < rate
    }

    /// Flips a fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen::<bool>()
    }

    /// Returns a uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
