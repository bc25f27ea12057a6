//! Evolutionary search towards a target phrase.
//!
//! # Overview
//!
//! The search consists of:
//!
//! - **Genomes** (`genome`): fixed-length character sequences, the random
//!   source trait and its seeded implementation
//! - **Fitness** (`fitness`): exact per-position agreement with the target
//! - **Selection** (`selection`): fitness-proportionate mating pools
//! - **Reproduction** (`reproduction`): single-point crossover and mutation
//! - **Population** (`population`): the generation lifecycle and termination
//!
//! # Example
//!
//! ```rust,no_run
//! use phrase_evolver::schema::EvolutionConfig;
//! use phrase_evolver::compute::evolution::EvolutionEngine;
//!
//! let config = EvolutionConfig::for_target("Hello, world!");
//! let mut engine = EvolutionEngine::new(config).expect("valid config");
//! let result = engine.run_with_callback(|report| {
//!     println!("Generation {}: {}", report.generation, report.best_phrase);
//! });
//!
//! println!("Found {:?} after {} generations",
//!     result.best_phrase, result.stats.generations);
//! ```

mod fitness;
mod genome;
mod population;
mod reproduction;
mod selection;

pub use fitness::{FitnessEvaluator, average_fitness, best_index};
pub use genome::{Dna, GenomeRng, RandomSource, clock_seed, fold_nanos, genome_distance};
pub use population::EvolutionEngine;
pub use reproduction::{Reproducer, crossover, mutate, splice};
pub use selection::{MatingPool, remap, replication_count};
