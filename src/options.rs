//! # PopulationOptions
//!
//! The `PopulationOptions` struct holds the parameters a driver chooses for an
//! evolution run: how many genomes live in each generation, the mutation rate
//! every genome carries, and an optional seed for reproducible runs.
//!
//! ## Example
//!
//! ```rust
//! use strevo::options::PopulationOptions;
//!
//! // Create a new PopulationOptions instance with custom parameters
//! let custom_options = PopulationOptions::new(200, 0.1);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let options = PopulationOptions::builder()
//!     .population_size(50)
//!     .mutation_rate(0.02)
//!     .seed(42)
//!     .build();
//! assert_eq!(options.get_seed(), Some(42));
//! ```

use crate::{
    error::{validate_rate, GeneticError, Result},
    rng::RandomNumberGenerator,
};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationOptions {
    population_size: usize,
    mutation_rate: f64,
    seed: Option<u64>,
}

impl PopulationOptions {
    pub fn new(population_size: usize, mutation_rate: f64) -> Self {
        Self {
            population_size,
            mutation_rate,
            seed: None,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the seed. `None` seeds from system entropy.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Checks that the options describe a runnable population.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the population size is zero or the
    /// mutation rate is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::InvalidParameter(
                "Population size cannot be zero".to_string(),
            ));
        }
        validate_rate(self.mutation_rate)
    }

    /// Builds the random number generator these options call for.
    pub fn rng(&self) -> RandomNumberGenerator {
        match self.seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        }
    }

    /// Returns a builder for creating a `PopulationOptions` instance.
    pub fn builder() -> PopulationOptionsBuilder {
        PopulationOptionsBuilder::default()
    }
}

impl Default for PopulationOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.05,
            seed: None,
        }
    }
}

/// Builder for `PopulationOptions`.
///
/// Provides a fluent interface for constructing `PopulationOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct PopulationOptionsBuilder {
    population_size: Option<usize>,
    mutation_rate: Option<f64>,
    seed: Option<u64>,
}

impl PopulationOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the seed.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `PopulationOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> PopulationOptions {
        let defaults = PopulationOptions::default();
        PopulationOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            seed: self.seed,
        }
    }

    /// Builds and validates the `PopulationOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the population size was never set, and the
    /// errors of [`PopulationOptions::validate`] otherwise.
    pub fn try_build(self) -> Result<PopulationOptions> {
        if self.population_size.is_none() {
            return Err(GeneticError::Configuration(
                "Population size not specified".to_string(),
            ));
        }
        let options = self.build();
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PopulationOptions::default();
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_mutation_rate(), 0.05);
        assert_eq!(options.get_seed(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(PopulationOptions::new(0, 0.1).validate().is_err());
        assert!(PopulationOptions::new(10, -0.1).validate().is_err());
        assert!(PopulationOptions::new(10, 1.1).validate().is_err());
        assert!(PopulationOptions::new(1, 1.0).validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = PopulationOptions::builder()
            .population_size(10)
            .mutation_rate(0.2)
            .seed(9)
            .build();
        assert_eq!(options.get_population_size(), 10);
        assert_eq!(options.get_mutation_rate(), 0.2);
        assert_eq!(options.get_seed(), Some(9));

        let partial = PopulationOptions::builder().mutation_rate(0.3).build();
        assert_eq!(partial.get_population_size(), 100);
    }

    #[test]
    fn test_try_build() {
        assert!(matches!(
            PopulationOptions::builder().mutation_rate(0.1).try_build(),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            PopulationOptions::builder().population_size(0).try_build(),
            Err(GeneticError::InvalidParameter(_))
        ));
        assert!(PopulationOptions::builder().population_size(4).try_build().is_ok());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut options = PopulationOptions::new(10, 0.1);
        options.set_seed(Some(77));
        let mut a = options.rng();
        let mut b = options.rng();
        assert_eq!(a.index(1000), b.index(1000));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = PopulationOptions::builder().population_size(12).seed(3).build();
        let json = serde_json::to_string(&options).unwrap();
        let back: PopulationOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
