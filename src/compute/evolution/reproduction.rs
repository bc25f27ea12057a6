//! Offspring generation: single-point crossover followed by mutation.

use crate::schema::Alphabet;

use super::genome::{Dna, RandomSource};

/// Derives children from parent pairs.
#[derive(Debug, Clone)]
pub struct Reproducer {
    mutation_rate: f32,
    alphabet: Alphabet,
}

impl Reproducer {
    pub fn new(mutation_rate: f32, alphabet: Alphabet) -> Self {
        Self {
            mutation_rate,
            alphabet,
        }
    }

    pub fn mutation_rate(&self) -> f32 {
        self.mutation_rate
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Crossover then mutation. The child is returned unscored.
    pub fn reproduce<R: RandomSource + ?Sized>(
        &self,
        parent_a: &Dna,
        parent_b: &Dna,
        rng: &mut R,
    ) -> Dna {
        let child = crossover(parent_a, parent_b, rng);
        mutate(child, self.mutation_rate, &self.alphabet, rng)
    }
}

/// Single-point crossover around a uniformly drawn midpoint `m`.
///
/// Positions `0..=m` come from `parent_b`, positions after `m` from
/// `parent_a`.
pub fn crossover<R: RandomSource + ?Sized>(parent_a: &Dna, parent_b: &Dna, rng: &mut R) -> Dna {
    assert_eq!(parent_a.len(), parent_b.len(), "parent length mismatch");
    let midpoint = rng.below(parent_a.len());
    splice(parent_a, parent_b, midpoint)
}

/// Crossover with an explicit midpoint.
pub fn splice(parent_a: &Dna, parent_b: &Dna, midpoint: usize) -> Dna {
    let genes = parent_a
        .genes()
        .iter()
        .zip(parent_b.genes())
        .enumerate()
        .map(|(i, (&a, &b))| if i > midpoint { a } else { b })
        .collect();
    Dna::new(genes)
}

/// Replace each gene with a fresh alphabet character with probability `rate`.
pub fn mutate<R: RandomSource + ?Sized>(
    dna: Dna,
    rate: f32,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Dna {
    let mut genes = dna.genes().to_vec();
    for gene in &mut genes {
        if rng.unit() < rate {
            *gene = rng.gene(alphabet);
        }
    }
    Dna::new(genes)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::compute::evolution::GenomeRng;

    /// Replays fixed draws; panics when a draw was not scripted.
    struct Scripted {
        indices: VecDeque<usize>,
        units: VecDeque<f32>,
    }

    impl Scripted {
        fn new(indices: &[usize], units: &[f32]) -> Self {
            Self {
                indices: indices.iter().copied().collect(),
                units: units.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, upper: usize) -> usize {
            let index = self.indices.pop_front().expect("unscripted index draw");
            assert!(index < upper);
            index
        }

        fn unit(&mut self) -> f32 {
            self.units.pop_front().expect("unscripted unit draw")
        }
    }

    #[test]
    fn test_crossover_prefix_from_b() {
        let a = Dna::from_phrase("AAAAAA");
        let b = Dna::from_phrase("bbbbbb");

        let mut rng = Scripted::new(&[2], &[]);
        let child = crossover(&a, &b, &mut rng);
        assert_eq!(child.phrase(), "bbbAAA");

        assert_eq!(splice(&a, &b, 0).phrase(), "bAAAAA");
        assert_eq!(splice(&a, &b, 5).phrase(), "bbbbbb");
    }

    #[test]
    fn test_mutation_draw_order() {
        let alphabet = Alphabet::new("xyz".chars()).unwrap();
        let dna = Dna::from_phrase("aaaa");

        // hit, miss, hit, miss: replacements 'z' then 'x'
        let mut rng = Scripted::new(&[2, 0], &[0.05, 0.5, 0.0, 0.1]);
        let mutated = mutate(dna, 0.1, &alphabet, &mut rng);
        assert_eq!(mutated.phrase(), "zaxa");
        assert!(rng.indices.is_empty());
        assert!(rng.units.is_empty());
    }

    #[test]
    fn test_reproduce_scripted() {
        let alphabet = Alphabet::new("?".chars()).unwrap();
        let reproducer = Reproducer::new(0.5, alphabet);
        let a = Dna::from_phrase("AAAA");
        let b = Dna::from_phrase("bbbb");

        // midpoint 1, then flips for four genes; the third one mutates
        let mut rng = Scripted::new(&[1, 0], &[0.9, 0.9, 0.1, 0.9]);
        let child = reproducer.reproduce(&a, &b, &mut rng);
        assert_eq!(child.phrase(), "bb?A");
        assert_eq!(child.fitness(), 0.0);
    }

    #[test]
    fn test_zero_rate_is_pure_crossover() {
        let reproducer = Reproducer::new(0.0, Alphabet::default());
        let a = Dna::from_phrase("the quick brown fox");
        let b = Dna::from_phrase("JUMPS OVER THE DOG!");

        for seed in 0..50 {
            let mut rng = GenomeRng::new(seed);
            let child = reproducer.reproduce(&a, &b, &mut rng);

            let mut replay = GenomeRng::new(seed);
            let expected = crossover(&a, &b, &mut replay);
            assert_eq!(child, expected);
        }
    }

    #[test]
    fn test_full_rate_stays_in_alphabet() {
        let alphabet = Alphabet::default();
        let reproducer = Reproducer::new(1.0, alphabet.clone());
        let a = Dna::from_phrase("\u{1}\u{2}\u{3}\u{4}");
        let b = Dna::from_phrase("\u{5}\u{6}\u{7}\u{8}");

        let mut rng = GenomeRng::new(99);
        for _ in 0..100 {
            let child = reproducer.reproduce(&a, &b, &mut rng);
            assert_eq!(child.len(), 4);
            assert!(child.genes().iter().all(|c| alphabet.contains(*c)));
        }
    }

    #[test]
    fn test_reproduce_deterministic_for_seed() {
        let reproducer = Reproducer::new(0.3, Alphabet::default());
        let a = Dna::from_phrase("I think, therefore I am.");
        let b = Dna::from_phrase("xxxxxxxxxxxxxxxxxxxxxxxx");

        let first = reproducer.reproduce(&a, &b, &mut GenomeRng::new(5));
        let second = reproducer.reproduce(&a, &b, &mut GenomeRng::new(5));
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "parent length mismatch")]
    fn test_crossover_length_mismatch() {
        let mut rng = GenomeRng::new(0);
        crossover(&Dna::from_phrase("ab"), &Dna::from_phrase("abc"), &mut rng);
    }
}
