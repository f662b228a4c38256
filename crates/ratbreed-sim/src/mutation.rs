//! Random rescaling of offspring weights.
//!
//! A mutated pup has its weight multiplied by a factor drawn uniformly from
//! `[scale_min, scale_max]` and rounded to whole grams (ties to even). Pups
//! mutate independently of each other.

use rand::{
    Rng,
    distr::{Distribution as _, Uniform, uniform},
};

use crate::{Population, Weight};

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum MutationError {
    #[display("mutation odds must be a non-negative number, got {odds}")]
    InvalidOdds { odds: f64 },
    #[display("mutation scale must be non-negative, got {scale_min}..={scale_max}")]
    NegativeScale { scale_min: f64, scale_max: f64 },
    #[display("invalid mutation scale {scale_min}..={scale_max}: {source}")]
    InvalidScale {
        scale_min: f64,
        scale_max: f64,
        source: uniform::Error,
    },
}

/// Validated mutation parameters.
#[derive(Debug, Clone)]
pub struct Mutation {
    odds: f64,
    scale: Uniform<f64>,
}

impl Mutation {
    /// Creates a mutation operator.
    ///
    /// `odds` is the per-pup probability of mutating. Zero disables mutation and
    /// anything at or above one mutates every pup. The scale range must be
    /// finite, non-negative and ordered.
    pub fn new(odds: f64, scale_min: f64, scale_max: f64) -> Result<Self, MutationError> {
        if odds.is_nan() || odds < 0.0 {
            return Err(MutationError::InvalidOdds { odds });
        }
        if scale_min < 0.0 || scale_max < 0.0 {
            return Err(MutationError::NegativeScale {
                scale_min,
                scale_max,
            });
        }
        let scale = Uniform::new_inclusive(scale_min, scale_max).map_err(|source| {
            MutationError::InvalidScale {
                scale_min,
                scale_max,
                source,
            }
        })?;
        Ok(Self {
            odds: odds.min(1.0),
            scale,
        })
    }

    /// Returns a copy of `pups` with each weight mutated with probability `odds`.
    #[must_use]
    pub fn apply<R>(&self, pups: &[Weight], rng: &mut R) -> Population
    where
        R: Rng + ?Sized,
    {
        pups.iter()
            .map(|&weight| {
                if rng.random_bool(self.odds) {
                    rescale(weight, self.scale.sample(rng))
                } else {
                    weight
                }
            })
            .collect()
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn rescale(weight: Weight, factor: f64) -> Weight {
    (weight as f64 * factor).round_ties_even() as Weight
}

/// Mutates `pups` with the given odds and scale range.
///
/// Convenience wrapper around [`Mutation::new`] and [`Mutation::apply`].
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use ratbreed_sim::mutation;
///
/// let mut rng = Pcg32::seed_from_u64(5);
/// let pups = vec![400, 410, 420];
/// assert_eq!(mutation::mutate(&pups, 0.0, 0.5, 1.2, &mut rng).unwrap(), pups);
/// ```
pub fn mutate<R>(
    pups: &[Weight],
    odds: f64,
    scale_min: f64,
    scale_max: f64,
    rng: &mut R,
) -> Result<Population, MutationError>
where
    R: Rng + ?Sized,
{
    Ok(Mutation::new(odds, scale_min, scale_max)?.apply(pups, rng))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_zero_odds_is_identity() {
        let mut rng = Pcg32::seed_from_u64(1);
        let pups = (100..200).collect::<Vec<_>>();
        assert_eq!(mutate(&pups, 0.0, 0.5, 1.2, &mut rng).unwrap(), pups);
    }

    #[test]
    fn test_certain_odds_changes_every_pup() {
        let mut rng = Pcg32::seed_from_u64(2);
        let pups = (100..200).collect::<Vec<_>>();
        let mutated = mutate(&pups, 1.0, 2.0, 3.0, &mut rng).unwrap();
        assert_eq!(mutated.len(), pups.len());
        for (before, after) in pups.iter().zip(&mutated) {
            assert!(*after >= before * 2 && *after <= before * 3);
        }
    }

    #[test]
    fn test_odds_above_one_mutates_every_pup() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mutated = mutate(&[1000; 20], 5.0, 0.1, 0.2, &mut rng).unwrap();
        assert!(mutated.iter().all(|w| (100..=200).contains(w)));
    }

    #[test]
    fn test_fixed_scale_rounds_ties_to_even() {
        let mut rng = Pcg32::seed_from_u64(4);
        // 5 * 0.5 = 2.5 and 7 * 0.5 = 3.5
        assert_eq!(mutate(&[5, 7], 1.0, 0.5, 0.5, &mut rng).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_mutation_rate_is_roughly_odds() {
        let mut rng = Pcg32::seed_from_u64(5);
        let pups = vec![1000; 10_000];
        let mutated = mutate(&pups, 0.1, 2.0, 2.0, &mut rng).unwrap();
        let changed = mutated.iter().filter(|w| **w == 2000).count();
        assert!(changed > 850 && changed < 1150);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            Mutation::new(f64::NAN, 0.5, 1.2),
            Err(MutationError::InvalidOdds { .. })
        ));
        assert!(matches!(
            Mutation::new(-0.1, 0.5, 1.2),
            Err(MutationError::InvalidOdds { .. })
        ));
        assert!(matches!(
            Mutation::new(0.1, -0.5, 1.2),
            Err(MutationError::NegativeScale { .. })
        ));
        assert!(matches!(
            Mutation::new(0.1, 1.2, 0.5),
            Err(MutationError::InvalidScale { .. })
        ));
        assert!(matches!(
            Mutation::new(0.1, 0.5, f64::INFINITY),
            Err(MutationError::InvalidScale { .. })
        ));
    }
}
