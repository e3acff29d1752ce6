//! # Genome
//!
//! One candidate solution: an ordered sequence of alphabet symbols, the
//! mutation rate that gates its stochastic operators, and its cached fitness.
//!
//! Symbols are stored as alphabet indices, so every reachable genome is made of
//! alphabet members only. The sequence is never empty.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strevo::{environment::Environment, genome::Genome, phenotype::Phenotype};
//! use strevo::rng::RandomNumberGenerator;
//!
//! let environment = Arc::new(Environment::with_target("AB").unwrap());
//! let mut genome = Genome::new(0.5, environment).unwrap();
//! assert_eq!(genome.to_string(), "A Fitness: 13");
//!
//! let mut rng = RandomNumberGenerator::from_seed(11);
//! genome.mutate(&mut rng);
//! assert!(!genome.is_empty());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::{
    environment::{decode, encode, Environment},
    error::{validate_rate, Result},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone)]
pub struct Genome {
    symbols: Vec<usize>,
    mutation_rate: f64,
    fitness: i64,
    environment: Arc<Environment>,
}

impl Genome {
    /// Creates a genome holding only the first alphabet symbol.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `mutation_rate` is not within `[0, 1]`.
    pub fn new(mutation_rate: f64, environment: Arc<Environment>) -> Result<Self> {
        Self::from_indices(vec![0], mutation_rate, environment)
    }

    /// Creates a genome spelling `text`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for empty text or a bad rate, and
    /// `UnknownSymbol` for characters outside the alphabet.
    pub fn from_text(text: &str, mutation_rate: f64, environment: Arc<Environment>) -> Result<Self> {
        let symbols = encode(environment.alphabet(), text)?;
        Self::from_indices(symbols, mutation_rate, environment)
    }

    fn from_indices(
        symbols: Vec<usize>,
        mutation_rate: f64,
        environment: Arc<Environment>,
    ) -> Result<Self> {
        validate_rate(mutation_rate)?;
        let mut genome = Self {
            symbols,
            mutation_rate,
            fitness: 0,
            environment,
        };
        genome.refresh_fitness();
        Ok(genome)
    }

    /// The symbol sequence as text.
    pub fn symbols(&self) -> String {
        decode(self.environment.alphabet(), &self.symbols)
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols
            .get(index)
            .map(|&i| self.environment.alphabet().symbol(i))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn environment(&self) -> &Arc<Environment> {
        &self.environment
    }

    fn refresh_fitness(&mut self) {
        self.fitness = self.environment.score(&self.symbols);
    }
}

impl Phenotype for Genome {
    /// Interleaves this genome with `other`.
    ///
    /// Both sequences are walked in lockstep. Each step a fair coin picks the
    /// side that contributes its next symbol, while the other side's cursor
    /// advances unused. The walk stops as soon as the picked side is exhausted,
    /// even if the other side still has symbols left.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
        let mut mine = self.symbols.iter();
        let mut theirs = other.symbols.iter();
        let mut child = Vec::with_capacity(self.symbols.len().max(other.symbols.len()));

        while !mine.as_slice().is_empty() || !theirs.as_slice().is_empty() {
            let (picked, skipped) = if rng.coin_flip() {
                (&mut mine, &mut theirs)
            } else {
                (&mut theirs, &mut mine)
            };
            match picked.next() {
                Some(&symbol) => child.push(symbol),
                None => break,
            }
            skipped.next();
        }

        debug_assert!(!child.is_empty());
        self.symbols = child;
        self.refresh_fitness();
    }

    /// Point mutation, deletion and insertion, each behind its own gate.
    fn mutate(&mut self, rng: &mut RandomNumberGenerator) {
        let rate = self.mutation_rate;
        let alphabet = self.environment.alphabet();

        if rng.chance(rate) {
            for symbol in self.symbols.iter_mut() {
                if rng.chance(rate) {
                    *symbol = alphabet.neighbour(*symbol, rng.coin_flip());
                }
            }
        }

        if rng.chance(rate) && self.symbols.len() > 1 {
            let index = rng.index(self.symbols.len());
            self.symbols.remove(index);
        }

        if rng.chance(rate) {
            self.symbols.push(rng.index(alphabet.len()));
        }

        self.refresh_fitness();
    }

    fn fitness(&self) -> i64 {
        self.fitness
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Fitness: {}", self.symbols(), self.fitness)
    }
}
