pub mod snapshot;
pub mod trials;
pub mod report;

pub use snapshot::GenerationSnapshot;
pub use trials::{run_trial, run_trials, TrialReport};
pub use report::Report;
