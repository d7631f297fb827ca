use crate::error::{PanmixiaError, Result};
use crate::types::{Allele, AlleleCounts};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diploid genotype at a single locus.
///
/// The two alleles are stored in ascending order, so `Gene::new(5, 4)` and
/// `Gene::new(4, 5)` are the same value and hash the same way. A gene
/// never changes after construction; mating always builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Allele, Allele)", into = "(Allele, Allele)")]
pub struct Gene {
    alleles: [Allele; 2],
}

impl Gene {
    pub fn new(a1: Allele, a2: Allele) -> Self {
        if a1 <= a2 {
            Self { alleles: [a1, a2] }
        } else {
            Self { alleles: [a2, a1] }
        }
    }

    /// Build a gene from a slice that must hold exactly two alleles
    pub fn from_slice(alleles: &[Allele]) -> Result<Self> {
        match alleles {
            [a1, a2] => Ok(Self::new(*a1, *a2)),
            _ => Err(PanmixiaError::InvalidGene(format!(
                "expected 2 alleles, got {}",
                alleles.len()
            ))),
        }
    }

    /// Alleles in canonical (ascending) order
    pub fn alleles(&self) -> (Allele, Allele) {
        (self.alleles[0], self.alleles[1])
    }

    pub fn is_homozygous(&self) -> bool {
        self.alleles[0] == self.alleles[1]
    }

    /// How many of the two slots hold each distinct allele
    pub fn allele_count(&self) -> AlleleCounts {
        let mut counts = AlleleCounts::new();
        for allele in self.alleles {
            *counts.entry(allele).or_insert(0) += 1;
        }
        counts
    }

    /// Offspring genotype: one allele drawn 50/50 from each parent.
    ///
    /// For parents `(a1, a2)` and `(a3, a4)` each of `(a1, a3)`, `(a1, a4)`,
    /// `(a2, a3)` and `(a2, a4)` has probability 1/4.
    pub fn mate<R: Rng + ?Sized>(&self, other: &Gene, rng: &mut R) -> Gene {
        let from_self = self.alleles[rng.gen_range(0..2)];
        let from_other = other.alleles[rng.gen_range(0..2)];
        Gene::new(from_self, from_other)
    }
}

impl From<(Allele, Allele)> for Gene {
    fn from((a1, a2): (Allele, Allele)) -> Self {
        Gene::new(a1, a2)
    }
}

impl From<Gene> for (Allele, Allele) {
    fn from(gene: Gene) -> Self {
        gene.alleles()
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.alleles[0], self.alleles[1])
    }
}
