//! Initial population sampling.
//!
//! Founding rats are drawn from a triangular distribution: weights cluster
//! around a mode that is usually closer to the lower bound, giving the skewed
//! shape of a wild-caught population.

use rand::Rng;
use rand_distr::{Distribution as _, Triangular, TriangularError};

use crate::{Population, Weight};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PopulateError {
    #[display(
        "invalid initial weight distribution (min {min}, max {max}, mode {mode}): {source}"
    )]
    InvalidDistribution {
        min: Weight,
        max: Weight,
        mode: Weight,
        source: TriangularError,
    },
}

/// Triangular distribution of founding weights.
///
/// Constructing one validates `min <= mode <= max` up front so that sampling
/// itself cannot fail.
#[derive(Debug, Clone)]
pub struct InitialDistribution {
    triangular: Triangular<f64>,
}

impl InitialDistribution {
    /// Creates a distribution bounded by `min` and `max` with its peak at `mode`.
    #[expect(clippy::cast_precision_loss)]
    pub fn new(min: Weight, max: Weight, mode: Weight) -> Result<Self, PopulateError> {
        let triangular = Triangular::new(min as f64, max as f64, mode as f64).map_err(
            |source| PopulateError::InvalidDistribution {
                min,
                max,
                mode,
                source,
            },
        )?;
        Ok(Self { triangular })
    }

    /// Draws `count` weights, truncating each sample toward zero.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn populate<R>(&self, count: usize, rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        (0..count)
            .map(|_| self.triangular.sample(rng) as Weight)
            .collect()
    }
}

/// Samples a population of `count` rats.
///
/// Each weight is drawn independently from `Triangular(min, max, mode)` and
/// truncated to whole grams, so every returned value lies in `[min, max]`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use ratbreed_sim::sampling;
///
/// let mut rng = Pcg32::seed_from_u64(7);
/// let population = sampling::populate(20, 200, 600, 300, &mut rng).unwrap();
/// assert_eq!(population.len(), 20);
/// assert!(population.iter().all(|w| (200..=600).contains(w)));
///
/// assert!(sampling::populate(20, 600, 200, 300, &mut rng).is_err());
/// ```
pub fn populate<R>(
    count: usize,
    min: Weight,
    max: Weight,
    mode: Weight,
    rng: &mut R,
) -> Result<Population, PopulateError>
where
    R: Rng + ?Sized,
{
    Ok(InitialDistribution::new(min, max, mode)?.populate(count, rng))
}
