//! Genome representation and the random source used to build and vary it.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::prelude::*;

use crate::schema::Alphabet;

/// A single entity: one gene per target position plus its assessed fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Dna {
    genes: Vec<char>,
    fitness: f32,
}

impl Dna {
    /// Unscored genome from explicit genes.
    pub fn new(genes: Vec<char>) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }

    /// Unscored genome spelling `phrase`.
    pub fn from_phrase(phrase: &str) -> Self {
        Self::new(phrase.chars().collect())
    }

    /// Same genes carrying `fitness`.
    pub(crate) fn with_fitness(self, fitness: f32) -> Self {
        Self { fitness, ..self }
    }

    #[inline]
    pub fn genes(&self) -> &[char] {
        &self.genes
    }

    /// Assessed fitness, zero until evaluated.
    #[inline]
    pub fn fitness(&self) -> f32 {
        self.fitness
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Decode the genes into a string.
    pub fn phrase(&self) -> String {
        self.genes.iter().collect()
    }
}

/// Source of every random draw the algorithm makes.
///
/// Draws happen in a fixed order relative to the control flow, so a scripted
/// implementation reproduces a run exactly.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Uniform value in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniformly drawn character of `alphabet`.
    fn gene(&mut self, alphabet: &Alphabet) -> char {
        alphabet.get(self.below(alphabet.len()))
    }

    /// Random genome of `length` genes, unscored.
    fn random_dna(&mut self, length: usize, alphabet: &Alphabet) -> Dna {
        Dna::new((0..length).map(|_| self.gene(alphabet)).collect())
    }
}

/// Seeded random number generator for genome operations.
pub struct GenomeRng {
    rng: StdRng,
    seed: u64,
}

impl GenomeRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create with a seed taken from the system clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GenomeRng {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn unit(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }
}

/// Nanoseconds since the Unix epoch, folded into 64 bits.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| fold_nanos(d.as_nanos()))
        .unwrap_or_default()
}

/// XOR the high 64 bits of `nanos` into the low 64 bits.
pub fn fold_nanos(nanos: u128) -> u64 {
    (nanos ^ (nanos >> 64)) as u64
}

/// Number of positions at which two genomes differ.
pub fn genome_distance(a: &Dna, b: &Dna) -> usize {
    assert_eq!(a.len(), b.len(), "genome length mismatch");
    a.genes
        .iter()
        .zip(&b.genes)
        .filter(|(x, y)| x != y)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dna() {
        let mut rng = GenomeRng::new(42);
        let alphabet = Alphabet::default();

        let dna = rng.random_dna(24, &alphabet);
        assert_eq!(dna.len(), 24);
        assert_eq!(dna.fitness(), 0.0);
        assert!(dna.genes().iter().all(|&c| (32..128).contains(&(c as u32))));
    }

    #[test]
    fn test_restricted_alphabet() {
        let mut rng = GenomeRng::new(7);
        let alphabet = Alphabet::new("abc".chars()).unwrap();

        let dna = rng.random_dna(100, &alphabet);
        assert!(dna.genes().iter().all(|c| alphabet.contains(*c)));
    }

    #[test]
    fn test_same_seed_same_draws() {
        let alphabet = Alphabet::default();
        let mut a = GenomeRng::new(1234);
        let mut b = GenomeRng::new(1234);

        for _ in 0..10 {
            assert_eq!(a.random_dna(16, &alphabet), b.random_dna(16, &alphabet));
            assert_eq!(a.unit(), b.unit());
        }
        assert_eq!(a.seed(), 1234);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = GenomeRng::new(3);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_fold_nanos_keeps_high_bits() {
        assert_eq!(fold_nanos(12345), 12345);
        assert_eq!(fold_nanos(1u128 << 64), 1);
        assert_eq!(fold_nanos((3u128 << 64) | 5), 6);
        assert_ne!(fold_nanos(1u128 << 64), fold_nanos(0));
    }

    #[test]
    fn test_phrase() {
        let dna = Dna::from_phrase("hello");
        assert_eq!(dna.phrase(), "hello");
        assert_eq!(dna.len(), 5);
    }

    #[test]
    fn test_genome_distance() {
        let a = Dna::from_phrase("kitten");
        let b = Dna::from_phrase("sitten");
        let c = Dna::from_phrase("sittin");

        assert_eq!(genome_distance(&a, &a), 0);
        assert_eq!(genome_distance(&a, &b), 1);
        assert_eq!(genome_distance(&a, &c), 2);
    }

    #[test]
    #[should_panic(expected = "genome length mismatch")]
    fn test_genome_distance_length_mismatch() {
        genome_distance(&Dna::from_phrase("ab"), &Dna::from_phrase("abc"));
    }
}
