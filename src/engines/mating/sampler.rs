use crate::error::{PanmixiaError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Roulette wheel draw over integer weights.
///
/// Builds cumulative weights in the iteration order of `choices`, draws a
/// point in `[0, total)` and returns the first value whose cumulative weight
/// exceeds it. Zero weights are legal and can never be drawn. The sampler
/// keeps no state, so the distribution may change freely between calls.
pub fn weighted_choice<'a, T, I, R>(choices: I, rng: &mut R) -> Result<&'a T>
where
    T: ?Sized,
    I: IntoIterator<Item = (&'a T, u64)>,
    R: Rng + ?Sized,
{
    let (values, weights): (Vec<&'a T>, Vec<u64>) = choices.into_iter().unzip();

    let index = WeightedIndex::new(&weights)
        .map_err(|e| PanmixiaError::InvalidDistribution(e.to_string()))?;

    Ok(values[index.sample(rng)])
}
