//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface the population controller needs
//! from the individuals it evolves: crossover, mutation and a cached fitness.
//! [`Genome`](crate::genome::Genome) is the implementation this crate ships.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use strevo::phenotype::Phenotype;
//! use strevo::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     value: i64,
//! }
//!
//! impl Phenotype for Counter {
//!     fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
//!         if rng.coin_flip() {
//!             self.value = other.value;
//!         }
//!     }
//!
//!     fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
//!         self.value += if rng.coin_flip() { 1 } else { -1 };
//!     }
//!
//!     fn fitness(&self) -> i64 {
//!         -(self.value - 10).abs()
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in the evolution.
///
/// Implementations must keep `fitness` consistent with their state: after
/// `crossover` or `mutate` returns, `fitness` reflects the new state.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Replaces this individual's genetic material with a combination of its own
    /// and `other`'s.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator);

    /// Introduces random changes to the genetic material of the individual.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator);

    /// Higher is fitter.
    fn fitness(&self) -> i64;
}
