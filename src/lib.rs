//! # panmixia
//!
//! Random mating of diploid genomes in a single hermaphroditic population.
//!
//! A [`Population`] maps each [`Genome`] to the number of individuals
//! carrying it. [`Population::mate`] runs one generation: parents are drawn
//! without replacement, weighted by genome counts, and every pair adds one
//! offspring to the population.
//!
//! ```rust
//! use panmixia::{Genome, Population};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let aa = Genome::from_pairs(&[(1, 1)]).unwrap();
//! let bb = Genome::from_pairs(&[(2, 2)]).unwrap();
//! let mut population = Population::new(vec![(aa, 1), (bb, 1)]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! population.mate(&mut rng).unwrap();
//!
//! assert_eq!(population.population(), 3);
//! assert_eq!(population.allele_frequencies(0).unwrap()[&1], 0.5);
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

// Re-export main types
pub use config::{AppConfig, ConfigManager};
pub use engines::mating::{Gene, Genome, Population, Simulation};
pub use engines::reporting::{GenerationSnapshot, Report, TrialReport};
pub use error::{PanmixiaError, Result};
pub use types::Allele;
