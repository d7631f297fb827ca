use crate::engines::reporting::snapshot::GenerationSnapshot;

/// Hooks invoked by `Simulation::run` around each mating round
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, snapshot: &GenerationSnapshot);
}

/// Logs each generation through the `log` facade
pub struct ConsoleProgressCallback {
    label: String,
}

impl ConsoleProgressCallback {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::debug!("[{}] Generation {} starting...", self.label, generation);
    }

    fn on_generation_complete(&mut self, snapshot: &GenerationSnapshot) {
        log::info!(
            "[{}] Generation {} complete. Population: {}, distinct genomes: {}",
            self.label,
            snapshot.generation,
            snapshot.population,
            snapshot.genomes.len()
        );
    }
}
