pub mod sampler;
pub mod gene;
pub mod genome;
pub mod population;
pub mod simulation;
pub mod progress;

pub use sampler::weighted_choice;
pub use gene::Gene;
pub use genome::Genome;
pub use population::Population;
pub use simulation::Simulation;
pub use progress::{ConsoleProgressCallback, ProgressCallback};
