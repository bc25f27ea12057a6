//! Progress and result types reported by an evolution run.

use serde::{Deserialize, Serialize};

/// Fitness of a genome that matches the target exactly.
pub const PERFECT_SCORE: f32 = 1.0;

/// Snapshot of one evaluated generation, passed to progress callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation index (0 is the random initial population).
    pub generation: usize,
    /// Number of entities in the generation.
    pub population_size: usize,
    /// Mean fitness across the generation.
    pub average_fitness: f32,
    /// Fitness of the best entity.
    pub best_fitness: f32,
    /// Decoded phrase of the best entity.
    pub best_phrase: String,
    /// Mating pool size that produced this generation (0 for generation 0).
    pub mating_pool_size: usize,
    /// Generations since the best fitness last improved.
    pub stagnation_count: usize,
    /// Current phase of the algorithm.
    pub phase: EvolutionPhase,
}

/// Per-generation statistics for plotting.
///
/// One entry per generation is appended for the whole run, so an uncapped
/// run grows this without bound.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub best_fitness: Vec<f32>,
    /// Average fitness per generation.
    pub avg_fitness: Vec<f32>,
    /// Mean pairwise Hamming distance per generation. Empty unless the run
    /// was configured with `track_diversity`.
    pub diversity: Vec<f32>,
}

impl EvolutionHistory {
    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }
}

/// Generation lifecycle state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvolutionPhase {
    /// Generation 0 is being constructed.
    #[default]
    Setup,
    /// Fitness is known for every current entity.
    Evaluated,
    /// Mating pool built from the current entities.
    Selected,
    /// Offspring replaced the previous generation, not yet scored.
    Reproduced,
    /// Run finished.
    Done,
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Phrase of the best entity in the final generation.
    pub best_phrase: String,
    /// Fitness of that entity.
    pub best_fitness: f32,
    /// Whether the best entity matches the target exactly.
    pub completed: bool,
    /// Statistics from the run.
    pub stats: EvolutionStats,
    /// Full history for analysis.
    pub history: EvolutionHistory,
}

/// Statistics from an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Reproduction cycles completed.
    pub generations: usize,
    /// Entities per generation.
    pub population_size: usize,
    /// Mutation rate used.
    pub mutation_rate: f32,
    /// Average fitness of the final generation.
    pub final_avg_fitness: f32,
    /// Generations that were re-seeded because the mating pool was empty.
    pub reseeded_generations: usize,
    /// Seed of the default random source, if the run used one.
    pub random_seed: Option<u64>,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

/// Reason evolution stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// An entity matched the target exactly.
    TargetReached,
    /// Reached the configured generation cap.
    MaxGenerations,
    /// Best fitness did not improve within the stagnation limit.
    Stagnation,
}
