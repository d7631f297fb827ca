use super::genome::Genome;
use super::sampler::weighted_choice;
use crate::error::{PanmixiaError, Result};
use crate::types::{AlleleCounts, AlleleFrequencies};
use rand::Rng;
use std::collections::BTreeMap;

/// Hermaphroditic population: how many individuals carry each genome.
///
/// Genomes are kept in a sorted map so that iteration order, and therefore
/// seeded sampling, is reproducible. Counts only change through `mate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    genomes: BTreeMap<Genome, u64>,
    loci: usize,
}

impl Population {
    /// Locus used when a caller does not pick one
    pub const DEFAULT_LOCUS: usize = 0;

    /// Build a population from genome counts.
    ///
    /// Repeated genomes have their counts summed. All genomes must share
    /// the same number of loci, and the total must fit in a `u64`.
    pub fn new<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Genome, u64)>,
    {
        let mut genomes: BTreeMap<Genome, u64> = BTreeMap::new();
        let mut loci: Option<usize> = None;
        let mut total: u64 = 0;

        for (genome, count) in counts {
            match loci {
                None => loci = Some(genome.loci()),
                Some(expected) if expected != genome.loci() => {
                    return Err(PanmixiaError::InvalidPopulation(format!(
                        "genome {} has {} loci, expected {}",
                        genome,
                        genome.loci(),
                        expected
                    )));
                }
                Some(_) => {}
            }
            total = total.checked_add(count).ok_or_else(Self::overflow)?;
            let entry = genomes.entry(genome).or_insert(0);
            *entry = entry.checked_add(count).ok_or_else(Self::overflow)?;
        }

        Ok(Self {
            genomes,
            loci: loci.unwrap_or(0),
        })
    }

    /// Build a population from signed counts, rejecting negative ones
    pub fn from_signed_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Genome, i64)>,
    {
        let checked = counts
            .into_iter()
            .map(|(genome, count)| match u64::try_from(count) {
                Ok(count) => Ok((genome, count)),
                Err(_) => Err(PanmixiaError::InvalidPopulation(format!(
                    "genome {} has negative count {}",
                    genome, count
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(checked)
    }

    /// Total number of individuals; construction and `mate` keep it within `u64`
    pub fn population(&self) -> u64 {
        self.genomes.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.population() == 0
    }

    /// Number of loci shared by every genome (0 when no genome is present)
    pub fn loci(&self) -> usize {
        self.loci
    }

    /// Individuals carrying `genome`
    pub fn count(&self, genome: &Genome) -> u64 {
        self.genomes.get(genome).copied().unwrap_or(0)
    }

    /// Genomes with a nonzero count, in sorted order
    pub fn genomes(&self) -> impl Iterator<Item = (&Genome, u64)> + '_ {
        self.genomes
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(genome, count)| (genome, *count))
    }

    /// Share of the population carried by each genome
    pub fn genome_frequencies(&self) -> Result<BTreeMap<Genome, f64>> {
        let total = self.population();
        if total == 0 {
            return Err(PanmixiaError::EmptyPopulation);
        }

        Ok(self
            .genomes()
            .map(|(genome, count)| (genome.clone(), count as f64 / total as f64))
            .collect())
    }

    /// Total allele copies at `locus` across the whole population
    pub fn allele_counts(&self, locus: usize) -> Result<AlleleCounts> {
        if locus >= self.loci {
            return Err(PanmixiaError::InvalidLocus {
                locus,
                loci: self.loci,
            });
        }

        // Two copies per individual, so the grand total is checked as well
        let mut totals = AlleleCounts::new();
        let mut copies_seen: u64 = 0;
        for (genome, count) in self.genomes() {
            if let Some(gene) = genome.gene(locus) {
                for (allele, copies) in gene.allele_count() {
                    let added = copies.checked_mul(count).ok_or_else(Self::overflow)?;
                    copies_seen = copies_seen.checked_add(added).ok_or_else(Self::overflow)?;
                    let entry = totals.entry(allele).or_insert(0);
                    *entry = entry.checked_add(added).ok_or_else(Self::overflow)?;
                }
            }
        }
        Ok(totals)
    }

    /// Allele counts at `locus`, normalized to sum to 1
    pub fn allele_frequencies(&self, locus: usize) -> Result<AlleleFrequencies> {
        if self.is_empty() {
            return Err(PanmixiaError::EmptyPopulation);
        }

        let counts = self.allele_counts(locus)?;
        let total: u64 = counts.values().sum();
        if total == 0 {
            return Err(PanmixiaError::EmptyPopulation);
        }

        Ok(counts
            .into_iter()
            .map(|(allele, count)| (allele, count as f64 / total as f64))
            .collect())
    }

    /// One generation of random mating.
    ///
    /// Parents are drawn without replacement from a copy of the current
    /// counts, two at a time, weighted by how many individuals of each
    /// genome are still available. Each pair yields one offspring that is
    /// added to the live population; parents stay counted, so a population
    /// of `n` grows to `n + n / 2`. An odd leftover individual does not mate.
    ///
    /// Offspring are merged only once the whole round has succeeded.
    pub fn mate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let mut pool = self.genomes.clone();
        let mut available = self.population();
        let mut offspring: BTreeMap<Genome, u64> = BTreeMap::new();

        if available < 2 {
            log::warn!(
                "Mating round skipped: {} individual(s) available, need at least 2",
                available
            );
            return Ok(());
        }

        while available >= 2 {
            let first = Self::take_parent(&mut pool, rng)?;
            let second = Self::take_parent(&mut pool, rng)?;
            available -= 2;

            let child = first.mate(&second, rng)?;
            log::trace!("{} x {} -> {}", first, second, child);
            *offspring.entry(child).or_insert(0) += 1;
        }

        let born: u64 = offspring.values().sum();
        if self.population().checked_add(born).is_none() {
            return Err(Self::overflow());
        }
        for (genome, count) in offspring {
            *self.genomes.entry(genome).or_insert(0) += count;
        }

        log::debug!(
            "Mating round complete: {} offspring, {} distinct genomes, population {}",
            born,
            self.genomes.len(),
            self.population()
        );

        Ok(())
    }

    /// Draw one available individual and remove it from the pool
    fn take_parent<R: Rng + ?Sized>(
        pool: &mut BTreeMap<Genome, u64>,
        rng: &mut R,
    ) -> Result<Genome> {
        let weights = pool.iter().map(|(genome, count)| (genome, *count));
        let parent = weighted_choice(weights, rng)?.clone();
        if let Some(count) = pool.get_mut(&parent) {
            *count -= 1;
        }
        Ok(parent)
    }

    fn overflow() -> PanmixiaError {
        PanmixiaError::InvalidPopulation("population size overflows u64".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mismatched_loci_rejected() {
        let one = Genome::from_pairs(&[(1, 1)]).unwrap();
        let two = Genome::from_pairs(&[(1, 1), (2, 2)]).unwrap();

        let result = Population::new(vec![(one, 1), (two, 1)]);
        assert!(matches!(result, Err(PanmixiaError::InvalidPopulation(_))));
    }

    #[test]
    fn test_negative_count_rejected() {
        let genome = Genome::from_pairs(&[(1, 1)]).unwrap();
        let result = Population::from_signed_counts(vec![(genome, -1)]);
        assert!(matches!(result, Err(PanmixiaError::InvalidPopulation(_))));
    }

    #[test]
    fn test_duplicate_genomes_are_merged() {
        let a = Genome::from_pairs(&[(1, 2)]).unwrap();
        let b = Genome::from_pairs(&[(2, 1)]).unwrap();

        let population = Population::new(vec![(a.clone(), 3), (b, 4)]).unwrap();
        assert_eq!(population.count(&a), 7);
        assert_eq!(population.genomes().count(), 1);
    }

    #[test]
    fn test_zero_counts_are_not_reported() {
        let a = Genome::from_pairs(&[(1, 1)]).unwrap();
        let b = Genome::from_pairs(&[(2, 2)]).unwrap();

        let population = Population::new(vec![(a.clone(), 2), (b, 0)]).unwrap();
        let frequencies = population.genome_frequencies().unwrap();
        assert_eq!(frequencies.len(), 1);
        assert_eq!(frequencies[&a], 1.0);
    }

    #[test]
    fn test_single_individual_does_not_mate() {
        let mut rng = StdRng::seed_from_u64(1);
        let genome = Genome::from_pairs(&[(1, 1)]).unwrap();
        let mut population = Population::new(vec![(genome, 1)]).unwrap();

        population.mate(&mut rng).unwrap();
        assert_eq!(population.population(), 1);
    }

    #[test]
    fn test_zero_weight_genomes_never_parent() {
        let mut rng = StdRng::seed_from_u64(2);
        let present = Genome::from_pairs(&[(1, 1)]).unwrap();
        let absent = Genome::from_pairs(&[(2, 2)]).unwrap();
        let mut population =
            Population::new(vec![(present.clone(), 10), (absent.clone(), 0)]).unwrap();

        population.mate(&mut rng).unwrap();

        assert_eq!(population.count(&present), 15);
        assert_eq!(population.count(&absent), 0);
    }

    #[test]
    fn test_oversized_population_rejected() {
        let a = Genome::from_pairs(&[(1, 1)]).unwrap();
        let b = Genome::from_pairs(&[(2, 2)]).unwrap();

        let same = Population::new(vec![(a.clone(), u64::MAX), (a.clone(), 1)]);
        assert!(matches!(same, Err(PanmixiaError::InvalidPopulation(_))));

        let split = Population::new(vec![(a.clone(), u64::MAX), (b, 1)]);
        assert!(matches!(split, Err(PanmixiaError::InvalidPopulation(_))));

        let signed = Population::from_signed_counts(vec![(a.clone(), i64::MAX); 3]);
        assert!(matches!(signed, Err(PanmixiaError::InvalidPopulation(_))));

        let largest = Population::new(vec![(a, u64::MAX)]).unwrap();
        assert_eq!(largest.population(), u64::MAX);
    }

    #[test]
    fn test_allele_copies_overflow_is_an_error() {
        let genome = Genome::from_pairs(&[(1, 1)]).unwrap();
        let population = Population::new(vec![(genome, u64::MAX / 2 + 1)]).unwrap();

        let result = population.allele_counts(0);
        assert!(matches!(result, Err(PanmixiaError::InvalidPopulation(_))));
    }
}
