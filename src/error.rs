use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanmixiaError {
    #[error("Invalid gene: {0}")]
    InvalidGene(String),

    #[error("Invalid genome: {0}")]
    InvalidGenome(String),

    #[error("Locus mismatch: expected {expected} loci, got {actual}")]
    LocusMismatch { expected: usize, actual: usize },

    #[error("Invalid population: {0}")]
    InvalidPopulation(String),

    #[error("Invalid locus {locus}: genomes have {loci} loci")]
    InvalidLocus { locus: usize, loci: usize },

    #[error("Population is empty")]
    EmptyPopulation,

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PanmixiaError>;
