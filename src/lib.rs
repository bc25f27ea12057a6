//! Phrase Evolver - String-matching genetic algorithm.
//!
//! Starting from a population of random character sequences, the search
//! repeatedly applies fitness-proportionate selection, single-point
//! crossover and per-gene mutation until some member spells a fixed target
//! phrase exactly.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, alphabets and reporting types
//! - `compute`: Genomes, fitness, selection, reproduction and the population
//!   controller
//!
//! # Example
//!
//! ```rust,no_run
//! use phrase_evolver::{EvolutionConfig, EvolutionEngine};
//!
//! let config = EvolutionConfig {
//!     population_size: 200,
//!     mutation_rate: 0.01,
//!     ..EvolutionConfig::for_target("To be or not to be.")
//! };
//!
//! let mut engine = EvolutionEngine::new(config).expect("valid config");
//! let result = engine.run();
//!
//! println!("{} after {} generations", result.best_phrase, result.stats.generations);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Dna, EvolutionEngine, GenomeRng, RandomSource};
pub use schema::{Alphabet, ConfigError, EvolutionConfig, EvolutionResult, StopReason};
