use super::population::Population;
use super::progress::ProgressCallback;
use crate::engines::reporting::snapshot::GenerationSnapshot;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runs successive rounds of random mating on one population.
///
/// The generator is seeded from `seed` when given, otherwise from entropy.
/// `history[0]` describes the founders; entry `g` describes the population
/// after generation `g`.
pub struct Simulation {
    population: Population,
    generations: usize,
    generation: usize,
    history: Vec<GenerationSnapshot>,
    rng: StdRng,
}

impl Simulation {
    pub fn new(population: Population, generations: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(population, generations, rng)
    }

    pub fn with_rng(population: Population, generations: usize, rng: StdRng) -> Self {
        Self {
            population,
            generations,
            generation: 0,
            history: Vec::new(),
            rng,
        }
    }

    /// Run every remaining generation
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<&[GenerationSnapshot]> {
        self.record_founders()?;

        while self.generation < self.generations {
            callback.on_generation_start(self.generation + 1);
            let snapshot = self.step()?;
            callback.on_generation_complete(snapshot);
        }

        Ok(&self.history)
    }

    /// Mate once and record the resulting generation
    pub fn step(&mut self) -> Result<&GenerationSnapshot> {
        self.record_founders()?;

        self.population.mate(&mut self.rng)?;
        self.generation += 1;

        let snapshot = GenerationSnapshot::capture(self.generation, &self.population)?;
        self.history.push(snapshot);

        Ok(&self.history[self.history.len() - 1])
    }

    fn record_founders(&mut self) -> Result<()> {
        if self.history.is_empty() {
            self.history.push(GenerationSnapshot::capture(0, &self.population)?);
        }
        Ok(())
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Generations completed so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn history(&self) -> &[GenerationSnapshot] {
        &self.history
    }
}
