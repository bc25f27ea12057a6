//! Fitness evaluation against the target phrase.

use crate::schema::ConfigError;

use super::genome::Dna;

/// Scores genomes by exact per-position agreement with a fixed phrase.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Vec<char>,
}

impl FitnessEvaluator {
    /// Create an evaluator for `target`. An empty target has no defined score.
    pub fn new(target: &str) -> Result<Self, ConfigError> {
        if target.is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self {
            target: target.chars().collect(),
        })
    }

    /// Genome length every candidate must have.
    #[inline]
    pub fn target_len(&self) -> usize {
        self.target.len()
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    /// Fraction of positions where `genes` equals the target.
    ///
    /// Panics if `genes` is not exactly as long as the target.
    pub fn score(&self, genes: &[char]) -> f32 {
        assert_eq!(
            genes.len(),
            self.target.len(),
            "genome length does not match target"
        );
        let matches = genes
            .iter()
            .zip(&self.target)
            .filter(|(g, t)| g == t)
            .count();
        matches as f32 / self.target.len() as f32
    }

    /// Consume an unscored genome and return it with its fitness assessed.
    pub fn evaluate(&self, dna: Dna) -> Dna {
        let fitness = self.score(dna.genes());
        dna.with_fitness(fitness)
    }
}

/// Mean fitness of `entities`, 0 when empty.
pub fn average_fitness(entities: &[Dna]) -> f32 {
    if entities.is_empty() {
        return 0.0;
    }
    entities.iter().map(Dna::fitness).sum::<f32>() / entities.len() as f32
}

/// Index of the fittest entity. Ties go to the lowest index.
pub fn best_index(entities: &[Dna]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, dna) in entities.iter().enumerate() {
        match best {
            Some((_, record)) if dna.fitness() <= record => {}
            _ => best = Some((i, dna.fitness())),
        }
    }
    best.map(|(i, _)| i)
}
