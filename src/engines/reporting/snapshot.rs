use crate::engines::mating::population::Population;
use crate::error::Result;
use crate::types::{GenomeShare, LocusFrequencies};
use serde::{Deserialize, Serialize};

/// Population statistics at the end of one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSnapshot {
    pub generation: usize,
    pub population: u64,
    pub genomes: Vec<GenomeShare>,
    pub alleles: Vec<LocusFrequencies>,
}

impl GenerationSnapshot {
    /// Record the current state of `population`; an empty population yields empty tables
    pub fn capture(generation: usize, population: &Population) -> Result<Self> {
        let total = population.population();
        if total == 0 {
            return Ok(Self {
                generation,
                population: 0,
                genomes: Vec::new(),
                alleles: Vec::new(),
            });
        }

        let genomes = population
            .genomes()
            .map(|(genome, count)| GenomeShare {
                genome: genome.to_string(),
                count,
                frequency: count as f64 / total as f64,
            })
            .collect();

        let alleles = (0..population.loci())
            .map(|locus| -> Result<LocusFrequencies> {
                Ok(LocusFrequencies {
                    locus,
                    frequencies: population.allele_frequencies(locus)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            generation,
            population: total,
            genomes,
            alleles,
        })
    }

    pub fn locus(&self, locus: usize) -> Option<&LocusFrequencies> {
        self.alleles.iter().find(|l| l.locus == locus)
    }
}
