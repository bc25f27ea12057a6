//! Compute module - The genetic algorithm itself.

pub mod evolution;

pub use evolution::{Dna, EvolutionEngine, GenomeRng, RandomSource};
