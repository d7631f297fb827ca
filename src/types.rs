use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Allele identifier
pub type Allele = i64;

/// Copies of each allele, keyed by allele value
pub type AlleleCounts = BTreeMap<Allele, u64>;

/// Share of each allele at one locus; values sum to 1
pub type AlleleFrequencies = BTreeMap<Allele, f64>;

/// One row of a genome frequency table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeShare {
    pub genome: String,
    pub count: u64,
    pub frequency: f64,
}

/// Allele frequencies for a single locus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocusFrequencies {
    pub locus: usize,
    pub frequencies: AlleleFrequencies,
}
