use super::snapshot::GenerationSnapshot;
use crate::config::AppConfig;
use crate::engines::mating::{ConsoleProgressCallback, Population, Simulation};
use crate::error::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Outcome of one independent run from the founders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialReport {
    pub trial: usize,
    pub seed: Option<u64>,
    pub generations: usize,
    pub result: GenerationSnapshot,
}

/// Mate a copy of `founders` for `generations` rounds
pub fn run_trial(
    founders: &Population,
    generations: usize,
    trial: usize,
    seed: Option<u64>,
) -> Result<TrialReport> {
    log::info!("Trial {} starting (seed: {:?})", trial, seed);

    let mut simulation = Simulation::new(founders.clone(), generations, seed);
    simulation.run(ConsoleProgressCallback::new(format!("trial {}", trial)))?;

    let result = match simulation.history().last() {
        Some(snapshot) => snapshot.clone(),
        None => GenerationSnapshot::capture(0, simulation.population())?,
    };

    log::info!(
        "Trial {} complete: population {} after {} generations",
        trial,
        result.population,
        generations
    );

    Ok(TrialReport {
        trial,
        seed,
        generations,
        result,
    })
}

/// Run every configured trial; trial `i` is seeded with `seed + i`.
///
/// Results are ordered by trial index whether or not they ran in parallel.
pub fn run_trials(config: &AppConfig) -> Result<Vec<TrialReport>> {
    let founders = config.founders.to_population()?;
    let sim = &config.simulation;
    let trial_seed = |trial: usize| sim.seed.map(|seed| seed.wrapping_add(trial as u64));

    log::info!(
        "Running {} trial(s) of {} generation(s) from {} founder(s)",
        sim.trials,
        sim.generations,
        founders.population()
    );

    if sim.parallel {
        (0..sim.trials)
            .into_par_iter()
            .map(|trial| run_trial(&founders, sim.generations, trial, trial_seed(trial)))
            .collect()
    } else {
        (0..sim.trials)
            .map(|trial| run_trial(&founders, sim.generations, trial, trial_seed(trial)))
            .collect()
    }
}
