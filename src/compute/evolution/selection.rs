//! Fitness-proportionate mating pool construction.
//!
//! Every entity is entered into the pool a number of times proportional to
//! its fitness relative to the best entity of the generation. Parents are
//! then drawn uniformly from the pool, so fitter entities reproduce more.

use super::genome::Dna;

/// Multiset of parent candidates for one generation.
#[derive(Debug, Clone, Default)]
pub struct MatingPool {
    members: Vec<Dna>,
}

impl MatingPool {
    /// Rebuild the pool from a scored generation.
    ///
    /// The fittest entity is entered exactly `multiplier` times. When every
    /// entity scores zero the pool is empty.
    pub fn build(entities: &[Dna], multiplier: usize) -> Self {
        let max_fitness = entities
            .iter()
            .map(Dna::fitness)
            .fold(0.0f32, f32::max);

        let mut members = Vec::new();
        if max_fitness <= 0.0 {
            return Self { members };
        }

        for dna in entities {
            let copies = replication_count(dna.fitness(), max_fitness, multiplier);
            members.extend(std::iter::repeat_n(dna, copies).cloned());
        }

        Self { members }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Pool entry at `index`. Panics when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> &Dna {
        &self.members[index]
    }

    pub fn members(&self) -> &[Dna] {
        &self.members
    }
}

/// Pool entries for an entity: `floor(remap(fitness, 0..max, 0..1) * multiplier)`.
pub fn replication_count(fitness: f32, max_fitness: f32, multiplier: usize) -> usize {
    if max_fitness <= 0.0 {
        return 0;
    }
    let normalized = remap(fitness, (0.0, max_fitness), (0.0, 1.0)).clamp(0.0, 1.0);
    (normalized * multiplier as f32).floor() as usize
}

/// Linearly re-map `x` from the `from` range onto the `to` range.
pub fn remap(x: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    (x - from.0) * (to.1 - to.0) / (from.1 - from.0) + to.0
}
