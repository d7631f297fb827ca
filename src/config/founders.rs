use super::traits::ConfigSection;
use crate::engines::mating::{Genome, Population};
use crate::error::{PanmixiaError, Result};
use crate::types::Allele;
use serde::{Deserialize, Serialize};

/// Founding population, one entry per genome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundersConfig {
    pub genomes: Vec<FounderGenome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderGenome {
    /// One `[a1, a2]` allele pair per locus
    pub loci: Vec<Vec<Allele>>,
    pub count: i64,
}

impl Default for FoundersConfig {
    fn default() -> Self {
        Self {
            genomes: vec![
                FounderGenome {
                    loci: vec![vec![1, 1]],
                    count: 23,
                },
                FounderGenome {
                    loci: vec![vec![2, 2]],
                    count: 11,
                },
            ],
        }
    }
}

impl FoundersConfig {
    pub fn to_population(&self) -> Result<Population> {
        let counts = self
            .genomes
            .iter()
            .map(|founder| Ok((Genome::from_loci(&founder.loci)?, founder.count)))
            .collect::<Result<Vec<_>>>()?;
        Population::from_signed_counts(counts)
    }
}

impl ConfigSection for FoundersConfig {
    fn section_name() -> &'static str {
        "founders"
    }

    fn validate(&self) -> Result<()> {
        if self.genomes.is_empty() {
            return Err(PanmixiaError::Configuration(
                "At least one founder genome is required".to_string()
            ));
        }
        self.to_population().map(|_| ())
    }
}
