//! Configuration types for a phrase evolution run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Alphabet;

/// Phrase the built-in run evolves towards.
pub const DEFAULT_TARGET: &str = "I think, therefore I am.";

/// Population size of the built-in run.
pub const DEFAULT_POPULATION_SIZE: usize = 250;

/// Per-gene mutation probability of the built-in run.
pub const DEFAULT_MUTATION_RATE: f32 = 0.01;

/// Mating pool entries granted to the fittest entity of a generation.
///
/// Every other entity receives `floor(fitness / max_fitness * K)` entries.
/// The value is an arbitrary quantization of relative fitness and is not
/// derived from the population size.
pub const DEFAULT_POOL_MULTIPLIER: usize = 100;

/// Top-level configuration for an evolution run.
///
/// Constructed once at startup, validated, and then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Phrase every genome is scored against.
    #[serde(default = "default_target")]
    pub target: String,
    /// Number of entities in every generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Probability (0.0-1.0) that a single gene is replaced after crossover.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f32,
    /// Mating pool replication multiplier (K).
    #[serde(default = "default_pool_multiplier")]
    pub pool_multiplier: usize,
    /// Characters genes are drawn from. `None` means printable ASCII (32-127).
    #[serde(default)]
    pub alphabet: Option<String>,
    /// Stop after this many generations even without a perfect match.
    #[serde(default)]
    pub max_generations: Option<usize>,
    /// Stop if the best fitness has not improved for N generations.
    #[serde(default)]
    pub stagnation_limit: Option<usize>,
    /// Random seed for reproducibility. `None` seeds from the system clock.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Record mean pairwise Hamming distance per generation. Quadratic in
    /// the population size.
    #[serde(default)]
    pub track_diversity: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
            pool_multiplier: default_pool_multiplier(),
            alphabet: None,
            max_generations: None,
            stagnation_limit: None,
            random_seed: None,
            track_diversity: false,
        }
    }
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}
fn default_population_size() -> usize {
    DEFAULT_POPULATION_SIZE
}
fn default_mutation_rate() -> f32 {
    DEFAULT_MUTATION_RATE
}
fn default_pool_multiplier() -> usize {
    DEFAULT_POOL_MULTIPLIER
}

impl EvolutionConfig {
    /// Config for `target` with every other setting at its default.
    pub fn for_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file and validate it.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if self.population_size == 0 {
            return Err(ConfigError::PopulationTooSmall);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.pool_multiplier == 0 {
            return Err(ConfigError::InvalidPoolMultiplier);
        }

        // A target character that can never be drawn makes a perfect score
        // unreachable, so the loop would never terminate on its own.
        let alphabet = Alphabet::from_config(self)?;
        if let Some((position, character)) = self
            .target
            .chars()
            .enumerate()
            .find(|(_, c)| !alphabet.contains(*c))
        {
            return Err(ConfigError::TargetOutsideAlphabet {
                character,
                position,
            });
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Target phrase must not be empty")]
    EmptyTarget,
    #[error("Population size must be at least 1")]
    PopulationTooSmall,
    #[error("Mutation rate {0} must be between 0 and 1")]
    InvalidMutationRate(f32),
    #[error("Pool multiplier must be non-zero")]
    InvalidPoolMultiplier,
    #[error("Alphabet must contain at least one character")]
    EmptyAlphabet,
    #[error("Target character {character:?} at position {position} is not in the alphabet")]
    TargetOutsideAlphabet { character: char, position: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
