pub mod alphabet;
pub mod environment;
pub mod error;
pub mod genome;
pub mod options;
pub mod phenotype;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use alphabet::{Alphabet, MATCH_SCORE};
pub use environment::{Environment, DEFAULT_TARGET};
pub use error::{GeneticError, OptionExt, Result};
pub use genome::Genome;
pub use options::{PopulationOptions, PopulationOptionsBuilder};
pub use phenotype::Phenotype;
pub use population::Population;
pub use rng::RandomNumberGenerator;
