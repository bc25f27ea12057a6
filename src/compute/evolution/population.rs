//! Population controller driving the generation lifecycle.

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::schema::{
    Alphabet, ConfigError, EvolutionConfig, EvolutionHistory, EvolutionPhase, EvolutionResult,
    EvolutionStats, GenerationReport, PERFECT_SCORE, StopReason,
};

use super::fitness::{FitnessEvaluator, average_fitness, best_index};
use super::genome::{Dna, GenomeRng, RandomSource, genome_distance};
use super::reproduction::Reproducer;
use super::selection::MatingPool;

/// Phrases listed by trace logging per generation.
const TRACE_PHRASE_LIMIT: usize = 50;

/// Evolution engine that owns a population and runs the search.
pub struct EvolutionEngine<R: RandomSource = GenomeRng> {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    reproducer: Reproducer,
    rng: R,
    random_seed: Option<u64>,
    entities: Vec<Dna>,
    mating_pool: MatingPool,
    last_pool_size: usize,
    history: EvolutionHistory,
    generation: usize,
    phase: EvolutionPhase,
    completed: bool,
    best_fitness: f32,
    stagnation_count: usize,
    reseeded_generations: usize,
}

impl EvolutionEngine<GenomeRng> {
    /// Create an engine using the configured seed, or the system clock.
    pub fn new(config: EvolutionConfig) -> Result<Self, ConfigError> {
        let rng = config
            .random_seed
            .map_or_else(GenomeRng::from_clock, GenomeRng::new);
        let seed = rng.seed();

        let mut engine = Self::with_source(config, rng)?;
        engine.random_seed = Some(seed);
        Ok(engine)
    }
}

impl<R: RandomSource> EvolutionEngine<R> {
    /// Create an engine drawing every random value from `rng`.
    pub fn with_source(config: EvolutionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let evaluator = FitnessEvaluator::new(&config.target)?;
        let reproducer = Reproducer::new(config.mutation_rate, Alphabet::from_config(&config)?);
        let population_size = config.population_size;

        Ok(Self {
            config,
            evaluator,
            reproducer,
            rng,
            random_seed: None,
            entities: Vec::with_capacity(population_size),
            mating_pool: MatingPool::default(),
            last_pool_size: 0,
            history: EvolutionHistory::default(),
            generation: 0,
            phase: EvolutionPhase::Setup,
            completed: false,
            best_fitness: f32::NEG_INFINITY,
            stagnation_count: 0,
            reseeded_generations: 0,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Current generation, in population order.
    pub fn entities(&self) -> &[Dna] {
        &self.entities
    }

    /// Reproduction cycles completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    /// True once an entity matches the target exactly.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Seed of the default random source, if this engine owns one.
    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    /// Fittest entity of the current generation (first one on ties).
    pub fn best(&self) -> Option<&Dna> {
        best_index(&self.entities).map(|i| &self.entities[i])
    }

    pub fn average_fitness(&self) -> f32 {
        average_fitness(&self.entities)
    }

    /// Decoded phrases of the first `limit` entities.
    pub fn phrases(&self, limit: usize) -> Vec<String> {
        self.entities.iter().take(limit).map(Dna::phrase).collect()
    }

    /// Mean pairwise Hamming distance of the current generation.
    pub fn diversity(&self) -> f32 {
        let n = self.entities.len();
        if n < 2 {
            return 0.0;
        }

        let mut total = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                total += genome_distance(&self.entities[i], &self.entities[j]);
            }
        }
        total as f32 / (n * (n - 1) / 2) as f32
    }

    /// Build generation 0 from random genomes and score it.
    pub fn setup(&mut self) {
        info!(
            "Setting up population of {} (mutation rate {}, target {:?})",
            self.config.population_size, self.config.mutation_rate, self.config.target
        );

        self.generation = 0;
        self.completed = false;
        self.history = EvolutionHistory::default();
        self.best_fitness = f32::NEG_INFINITY;
        self.stagnation_count = 0;
        self.reseeded_generations = 0;
        self.last_pool_size = 0;
        self.phase = EvolutionPhase::Setup;

        self.entities = self.random_entities();
        self.evaluate();
    }

    /// Run one generation: select, reproduce, evaluate.
    ///
    /// Sets up generation 0 first if needed. Does nothing once done.
    pub fn step(&mut self) {
        match self.phase {
            EvolutionPhase::Setup => self.setup(),
            EvolutionPhase::Done => {}
            EvolutionPhase::Evaluated => {
                self.select();
                self.reproduce();
                self.evaluate();
            }
            EvolutionPhase::Selected => {
                self.reproduce();
                self.evaluate();
            }
            EvolutionPhase::Reproduced => self.evaluate(),
        }
    }

    /// Rebuild the mating pool from the current generation.
    fn select(&mut self) {
        self.mating_pool = MatingPool::build(&self.entities, self.config.pool_multiplier);
        self.last_pool_size = self.mating_pool.len();
        self.phase = EvolutionPhase::Selected;
    }

    /// Replace the generation with N unscored children of the mating pool.
    ///
    /// An empty pool re-seeds the generation with random genomes instead.
    fn reproduce(&mut self) {
        let pool = std::mem::take(&mut self.mating_pool);

        self.entities = if pool.is_empty() {
            warn!(
                "Generation {} has no fit entities; re-seeding with random genomes",
                self.generation
            );
            self.reseeded_generations += 1;
            self.random_entities()
        } else {
            (0..self.config.population_size)
                .map(|_| {
                    let a = self.rng.below(pool.len());
                    let b = self.rng.below(pool.len());
                    self.reproducer
                        .reproduce(pool.get(a), pool.get(b), &mut self.rng)
                })
                .collect()
        };

        self.generation += 1;
        self.phase = EvolutionPhase::Reproduced;
    }

    /// Score every entity, record statistics and check for convergence.
    fn evaluate(&mut self) {
        let evaluator = &self.evaluator;
        self.entities = std::mem::take(&mut self.entities)
            .into_iter()
            .map(|dna| evaluator.evaluate(dna))
            .collect();
        self.phase = EvolutionPhase::Evaluated;

        let best = self.best().map_or(0.0, Dna::fitness);
        let average = self.average_fitness();

        if best > self.best_fitness {
            self.best_fitness = best;
            self.stagnation_count = 0;
        } else {
            self.stagnation_count += 1;
        }

        self.history.best_fitness.push(best);
        self.history.avg_fitness.push(average);
        if self.config.track_diversity {
            let diversity = self.diversity();
            self.history.diversity.push(diversity);
            debug!(
                "Generation {} average fitness {:.4}, best {:.4}, diversity {:.2}",
                self.generation, average, best, diversity
            );
        } else {
            debug!(
                "Generation {} average fitness {:.4}, best {:.4}",
                self.generation, average, best
            );
        }
        if log::log_enabled!(log::Level::Trace) {
            for phrase in self.phrases(TRACE_PHRASE_LIMIT) {
                trace!("  {phrase}");
            }
        }

        if best >= PERFECT_SCORE {
            self.completed = true;
            self.phase = EvolutionPhase::Done;
        }
    }

    fn random_entities(&mut self) -> Vec<Dna> {
        let length = self.evaluator.target_len();
        let alphabet = self.reproducer.alphabet();
        (0..self.config.population_size)
            .map(|_| self.rng.random_dna(length, alphabet))
            .collect()
    }

    /// Report for the current generation.
    pub fn report(&self) -> GenerationReport {
        let best = self.best();
        GenerationReport {
            generation: self.generation,
            population_size: self.entities.len(),
            average_fitness: self.average_fitness(),
            best_fitness: best.map_or(0.0, Dna::fitness),
            best_phrase: best.map(Dna::phrase).unwrap_or_default(),
            mating_pool_size: self.last_pool_size,
            stagnation_count: self.stagnation_count,
            phase: self.phase,
        }
    }

    /// Check if evolution should stop.
    fn should_stop(&self) -> Option<StopReason> {
        if self.completed {
            return Some(StopReason::TargetReached);
        }

        if let Some(limit) = self.config.max_generations
            && self.generation >= limit
        {
            return Some(StopReason::MaxGenerations);
        }

        if let Some(limit) = self.config.stagnation_limit
            && self.stagnation_count >= limit
        {
            return Some(StopReason::Stagnation);
        }

        None
    }

    /// Run evolution, reporting after setup and after every generation.
    ///
    /// The recorded history moves into the result; `history()` is empty
    /// afterwards.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> EvolutionResult
    where
        F: FnMut(&GenerationReport),
    {
        let start_time = Instant::now();

        self.setup();
        callback(&self.report());

        let stop_reason = loop {
            if let Some(reason) = self.should_stop() {
                break reason;
            }
            self.step();
            callback(&self.report());
        };
        self.phase = EvolutionPhase::Done;

        let elapsed = start_time.elapsed().as_secs_f64();
        let report = self.report();

        info!(
            "Stopped after {} generations ({:?}); best phrase {:?}",
            self.generation, stop_reason, report.best_phrase
        );

        EvolutionResult {
            best_phrase: report.best_phrase,
            best_fitness: report.best_fitness,
            completed: self.completed,
            stats: EvolutionStats {
                generations: self.generation,
                population_size: self.entities.len(),
                mutation_rate: self.config.mutation_rate,
                final_avg_fitness: report.average_fitness,
                reseeded_generations: self.reseeded_generations,
                random_seed: self.random_seed,
                elapsed_seconds: elapsed,
                stop_reason,
            },
            history: std::mem::take(&mut self.history),
        }
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> EvolutionResult {
        self.run_with_callback(|_| {})
    }
}
