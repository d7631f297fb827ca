use super::gene::Gene;
use crate::error::{PanmixiaError, Result};
use crate::types::{Allele, AlleleCounts};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diploid genome: one gene per locus.
///
/// The position of a gene is its locus and is preserved through mating.
/// Equality, ordering and hashing are structural over the locus-ordered genes,
/// so genomes built from equivalent allele pairs are interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Gene>", into = "Vec<Gene>")]
pub struct Genome {
    genes: Vec<Gene>,
}

impl Genome {
    /// Build a genome from at least one gene
    pub fn new(genes: Vec<Gene>) -> Result<Self> {
        if genes.is_empty() {
            return Err(PanmixiaError::InvalidGenome(
                "genome must have at least one locus".to_string(),
            ));
        }
        Ok(Self { genes })
    }

    /// Build a genome from one `(a1, a2)` pair per locus
    pub fn from_pairs(pairs: &[(Allele, Allele)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Gene::from).collect())
    }

    /// Build a genome from raw per-locus allele lists, each of which must hold two alleles
    pub fn from_loci<L: AsRef<[Allele]>>(loci: &[L]) -> Result<Self> {
        let genes = loci
            .iter()
            .enumerate()
            .map(|(locus, alleles)| {
                Gene::from_slice(alleles.as_ref()).map_err(|e| {
                    PanmixiaError::InvalidGenome(format!("locus {}: {}", locus, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(genes)
    }

    pub fn loci(&self) -> usize {
        self.genes.len()
    }

    pub fn gene(&self, locus: usize) -> Option<&Gene> {
        self.genes.get(locus)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Per-locus allele counts, in locus order
    pub fn allele_count(&self) -> Vec<AlleleCounts> {
        self.genes.iter().map(Gene::allele_count).collect()
    }

    /// Offspring genome; every locus is resampled independently
    pub fn mate<R: Rng + ?Sized>(&self, other: &Genome, rng: &mut R) -> Result<Genome> {
        if self.loci() != other.loci() {
            return Err(PanmixiaError::LocusMismatch {
                expected: self.loci(),
                actual: other.loci(),
            });
        }

        let genes = self
            .genes
            .iter()
            .zip(&other.genes)
            .map(|(mine, theirs)| mine.mate(theirs, rng))
            .collect();

        Ok(Genome { genes })
    }
}

impl TryFrom<Vec<Gene>> for Genome {
    type Error = PanmixiaError;

    fn try_from(genes: Vec<Gene>) -> Result<Self> {
        Genome::new(genes)
    }
}

impl From<Genome> for Vec<Gene> {
    fn from(genome: Genome) -> Self {
        genome.genes
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gene)?;
        }
        write!(f, ")")
    }
}
