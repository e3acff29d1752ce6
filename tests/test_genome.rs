use std::sync::Arc;

use strevo::{
    alphabet::Alphabet,
    environment::Environment,
    error::GeneticError,
    genome::Genome,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

fn environment(target: &str) -> Arc<Environment> {
    Arc::new(Environment::with_target(target).unwrap())
}

#[test]
fn test_scenario_two_symbol_target() {
    let env = environment("AB");
    assert_eq!(Genome::from_text("AB", 0.1, env.clone()).unwrap().fitness(), 28);
    assert_eq!(Genome::from_text("A", 0.1, env.clone()).unwrap().fitness(), 13);
    assert_eq!(Genome::from_text("BA", 0.1, env).unwrap().fitness(), 26);
}

#[test]
fn test_exact_match_scores_maximum() {
    let env = Arc::new(Environment::default());
    let genome = Genome::from_text(&env.target_text(), 0.1, env.clone()).unwrap();
    assert_eq!(genome.fitness(), 14 * env.target_len() as i64);
    assert_eq!(
        genome.to_string(),
        "JOSHUA DAVID RUESCHENBERG Fitness: 350"
    );
}

#[test]
fn test_rendering_format() {
    let env = Arc::new(Environment::default());
    let genome = Genome::from_text("JOSHUA DAVID RUESCHENBERH", 0.1, env).unwrap();
    assert_eq!(genome.to_string(), "JOSHUA DAVID RUESCHENBERH Fitness: 349");
}

#[test]
fn test_length_penalty() {
    let env = environment("AB");
    let exact = Genome::from_text("AB", 0.1, env.clone()).unwrap();
    let longer = Genome::from_text("ABQ", 0.1, env.clone()).unwrap();
    assert_eq!(exact.fitness() - longer.fitness(), 1);

    let shorter = Genome::from_text("A", 0.1, env).unwrap();
    assert_eq!(exact.fitness() - shorter.fitness(), 14 + 1);
}

#[test]
fn test_fitness_is_deterministic() {
    let env = Arc::new(Environment::default());
    let genome = Genome::from_text("HELLO WORLD", 0.3, env).unwrap();
    let first = genome.fitness();
    for _ in 0..10 {
        assert_eq!(genome.fitness(), first);
    }
    assert_eq!(genome.clone().fitness(), first);
}

#[test]
fn test_invalid_construction() {
    let env = environment("AB");
    assert!(matches!(
        Genome::new(1.01, env.clone()),
        Err(GeneticError::InvalidParameter(_))
    ));
    assert!(matches!(
        Genome::from_text("", 0.1, env.clone()),
        Err(GeneticError::InvalidParameter(_))
    ));
    assert_eq!(
        Genome::from_text("A!", 0.1, env).unwrap_err(),
        GeneticError::UnknownSymbol('!')
    );
}

#[test]
fn test_mutation_stays_in_alphabet() {
    let alphabet = Alphabet::standard();
    let env = Arc::new(Environment::default());
    let mut rng = RandomNumberGenerator::from_seed(1234);

    for rate in [0.05, 0.5, 1.0] {
        let mut genome = Genome::new(rate, env.clone()).unwrap();
        for _ in 0..500 {
            genome.mutate(&mut rng);
            assert!(!genome.is_empty());
            assert!(genome.symbols().chars().all(|c| alphabet.contains(c)));
        }
    }
}

#[test]
fn test_crossover_then_mutate_stays_valid() {
    let alphabet = Alphabet::standard();
    let env = Arc::new(Environment::default());
    let mut rng = RandomNumberGenerator::from_seed(99);
    let mut left = Genome::from_text("ZZZZ", 0.4, env.clone()).unwrap();
    let right = Genome::from_text("JOSHUA", 0.4, env).unwrap();

    for _ in 0..100 {
        left.crossover(&right, &mut rng);
        left.mutate(&mut rng);
        assert!(!left.is_empty());
        assert!(left.symbols().chars().all(|c| alphabet.contains(c)));
    }
}

#[test]
fn test_seeded_mutation_is_reproducible() {
    let env = Arc::new(Environment::default());
    let mut rng1 = RandomNumberGenerator::from_seed(5);
    let mut rng2 = RandomNumberGenerator::from_seed(5);
    let mut a = Genome::new(0.3, env.clone()).unwrap();
    let mut b = Genome::new(0.3, env).unwrap();

    for _ in 0..100 {
        a.mutate(&mut rng1);
        b.mutate(&mut rng2);
    }
    assert_eq!(a.symbols(), b.symbols());
    assert_eq!(a.fitness(), b.fitness());
}
