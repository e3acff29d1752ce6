//! # Population
//!
//! Owns the genomes under evolution and runs the generational loop: rank by
//! fitness, cull the least fit, repopulate from the survivors through mutation
//! and crossover, and rank again.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strevo::{environment::Environment, options::PopulationOptions, population::Population};
//! use strevo::phenotype::Phenotype;
//!
//! let options = PopulationOptions::builder()
//!     .population_size(20)
//!     .mutation_rate(0.1)
//!     .seed(1)
//!     .build();
//! let mut population = Population::new(&options, Arc::new(Environment::default())).unwrap();
//!
//! for _ in 0..10 {
//!     population.day();
//! }
//! assert_eq!(population.genomes().len(), 20);
//! assert_eq!(population.generation(), 10);
//! println!("{}", population.most_fit());
//! # let _ = population.most_fit().fitness();
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::{
    environment::Environment,
    error::{GeneticError, Result},
    genome::Genome,
    options::PopulationOptions,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct Population<P: Phenotype> {
    genomes: Vec<P>,
    population_size: usize,
    generation: usize,
    rng: RandomNumberGenerator,
}

impl Population<Genome> {
    /// Creates `population_size` fresh single-symbol genomes.
    ///
    /// The random number generator is taken from `options`: seeded if a seed
    /// is set, entropy-seeded otherwise.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the options fail validation.
    pub fn new(options: &PopulationOptions, environment: Arc<Environment>) -> Result<Self> {
        Self::with_rng(options, environment, options.rng())
    }

    /// Like [`Population::new`], with an explicitly supplied generator.
    pub fn with_rng(
        options: &PopulationOptions,
        environment: Arc<Environment>,
        rng: RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate()?;
        let genomes = (0..options.get_population_size())
            .map(|_| Genome::new(options.get_mutation_rate(), Arc::clone(&environment)))
            .collect::<Result<Vec<_>>>()?;

        info!(
            population_size = options.get_population_size(),
            mutation_rate = options.get_mutation_rate(),
            goal = %environment.target_text(),
            "population created"
        );
        Self::from_genomes(genomes, rng)
    }
}

impl<P: Phenotype> Population<P> {
    /// Seeds a population with the given individuals. The population size is
    /// fixed at `genomes.len()`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `genomes` is empty.
    pub fn from_genomes(genomes: Vec<P>, rng: RandomNumberGenerator) -> Result<Self> {
        if genomes.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(Self {
            population_size: genomes.len(),
            genomes,
            generation: 0,
            rng,
        })
    }

    /// Advances one generation.
    ///
    /// Afterwards the population holds exactly `population_size` individuals
    /// sorted ascending by fitness, and [`most_fit`](Self::most_fit) is the last one.
    pub fn day(&mut self) {
        self.rank();

        let culled = cull_count(self.population_size);
        self.genomes.drain(..culled);
        trace!(culled, survivors = self.genomes.len(), "culled least fit");

        while self.genomes.len() < self.population_size {
            let child = self.breed();
            self.genomes.push(child);
        }

        self.rank();
        self.generation += 1;

        debug!(
            generation = self.generation,
            best = self.most_fit().fitness(),
            worst = self.genomes[0].fitness(),
            "day complete"
        );
    }

    /// Produces one offspring from two random members of the current pool.
    ///
    /// Offspring already appended this generation are part of the pool.
    fn breed(&mut self) -> P {
        debug_assert!(!self.genomes.is_empty());
        let clone_only = self.rng.coin_flip();
        let first = self.rng.index(self.genomes.len());
        let second = self.rng.index(self.genomes.len());

        let mut child = self.genomes[first].clone();
        if !clone_only {
            child.crossover(&self.genomes[second], &mut self.rng);
        }
        child.mutate(&mut self.rng);
        trace!(first, second, clone_only, fitness = child.fitness(), "bred offspring");
        child
    }

    fn rank(&mut self) {
        self.genomes.sort_unstable_by_key(|genome| genome.fitness());
    }

    /// The fittest individual as of the last completed generation.
    ///
    /// Before the first [`day`](Self::day) this is simply the last individual
    /// created.
    pub fn most_fit(&self) -> &P {
        &self.genomes[self.genomes.len() - 1]
    }

    pub fn genomes(&self) -> &[P] {
        &self.genomes
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }
}

impl<P: Phenotype + fmt::Display> fmt::Display for Population<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for genome in &self.genomes {
            writeln!(f, "{}", genome)?;
        }
        Ok(())
    }
}

/// Number of individuals removed from the front of the ranked pool.
///
/// This is `population_size / 2 + 1`, capped so that at least one survivor
/// is left to breed from.
fn cull_count(population_size: usize) -> usize {
    (population_size / 2 + 1).min(population_size.saturating_sub(1))
}
