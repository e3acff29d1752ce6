//! Evolves the default target and prints the best genome of each generation.
//!
//! Usage: `cargo run --example evolve -- [generations] [population_size] [mutation_rate]`

use std::sync::Arc;

use strevo::{
    environment::Environment, options::PopulationOptions, phenotype::Phenotype,
    population::Population, Result,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let generations: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(1000);
    let population_size: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(100);
    let mutation_rate: f64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.05);

    let options = PopulationOptions::builder()
        .population_size(population_size)
        .mutation_rate(mutation_rate)
        .try_build()?;
    let environment = Arc::new(Environment::default());
    let mut population = Population::new(&options, Arc::clone(&environment))?;

    let best_possible = strevo::MATCH_SCORE * environment.target_len() as i64;
    for _ in 0..generations {
        population.day();
        println!("{}", population.most_fit());
        if population.most_fit().fitness() == best_possible {
            break;
        }
    }
    println!("Generations: {}", population.generation());
    Ok(())
}
