use super::traits::ConfigSection;
use crate::error::PanmixiaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Mating rounds per trial
    pub generations: usize,
    /// Independent runs from the same founders
    pub trials: usize,
    /// Base seed; trial `i` uses `seed + i`. Entropy when unset.
    pub seed: Option<u64>,
    /// Run trials on the rayon thread pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 10,
            trials: 10,
            seed: None,
            parallel: true,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), PanmixiaError> {
        if self.trials == 0 {
            return Err(PanmixiaError::Configuration(
                "At least one trial is required".to_string()
            ));
        }
        if let Some(seed) = self.seed {
            if seed.checked_add(self.trials as u64 - 1).is_none() {
                return Err(PanmixiaError::Configuration(
                    "Seed is too large for the number of trials".to_string()
                ));
            }
        }
        Ok(())
    }
}
