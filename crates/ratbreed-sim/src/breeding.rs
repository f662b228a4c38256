//! Pairing and litter production.
//!
//! Males and females are shuffled independently and matched by position, so
//! the pairing is random but each rat breeds at most once per generation. A
//! pup's weight is drawn uniformly between its parents' weights.
//!
//! When one sex outnumbers the other the surplus rats stay unpaired and
//! produce nothing. Selection keeps both sexes the same size for every
//! normalized configuration, so this only shows up when [`breed`] is called
//! directly with uneven inputs.

use rand::{Rng, seq::SliceRandom as _};

use crate::{Population, Weight};

/// Produces `litter_size` pups for every male/female pair.
///
/// Returns `litter_size * min(males.len(), females.len())` weights, grouped by
/// litter. The inputs are left untouched; shuffling happens on copies.
///
/// # Panics
///
/// Panics if the number of pups overflows `usize`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
/// use ratbreed_sim::breeding;
///
/// let mut rng = Pcg32::seed_from_u64(3);
/// let pups = breeding::breed(&[500, 520], &[300, 310, 320], 4, &mut rng);
/// assert_eq!(pups.len(), 8);
/// assert!(pups.iter().all(|w| (300..=520).contains(w)));
/// ```
#[must_use]
pub fn breed<R>(
    males: &[Weight],
    females: &[Weight],
    litter_size: usize,
    rng: &mut R,
) -> Population
where
    R: Rng + ?Sized,
{
    let mut males = males.to_vec();
    let mut females = females.to_vec();
    males.shuffle(rng);
    females.shuffle(rng);

    let pairs = usize::min(males.len(), females.len());
    let mut pups = Vec::with_capacity(litter_size.saturating_mul(pairs));
    for (male, female) in males.into_iter().zip(females) {
        pups.extend(litter(male, female, litter_size, rng));
    }
    pups
}

/// Draws one litter for a single pair.
///
/// Bounds are ordered explicitly so a female heavier than her mate is fine.
fn litter<R>(
    male: Weight,
    female: Weight,
    litter_size: usize,
    rng: &mut R,
) -> impl Iterator<Item = Weight>
where
    R: Rng + ?Sized,
{
    let low = Weight::min(male, female);
    let high = Weight::max(male, female);
    (0..litter_size).map(move |_| rng.random_range(low..=high))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_breed_count() {
        let mut rng = Pcg32::seed_from_u64(1);
        let males = vec![500, 510, 520, 530];
        let females = vec![300, 310, 320, 330];
        assert_eq!(breed(&males, &females, 8, &mut rng).len(), 32);
        assert_eq!(breed(&males, &females, 0, &mut rng).len(), 0);
    }

    #[test]
    fn test_breed_truncates_to_shorter_sex() {
        let mut rng = Pcg32::seed_from_u64(2);
        assert_eq!(breed(&[500, 510, 520], &[300], 5, &mut rng).len(), 5);
        assert_eq!(breed(&[500], &[300, 310, 320], 5, &mut rng).len(), 5);
        assert!(breed(&[], &[300, 310], 5, &mut rng).is_empty());
    }

    #[test]
    fn test_litter_within_parent_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let pups = breed(&[400], &[380], 1000, &mut rng);
        assert!(pups.iter().all(|w| (380..=400).contains(w)));
        assert!(pups.contains(&380));
        assert!(pups.contains(&400));
    }

    #[test]
    fn test_heavier_female_does_not_panic() {
        let mut rng = Pcg32::seed_from_u64(4);
        let pups = breed(&[200], &[900], 50, &mut rng);
        assert_eq!(pups.len(), 50);
        assert!(pups.iter().all(|w| (200..=900).contains(w)));
    }

    #[test]
    fn test_identical_parents_breed_true() {
        let mut rng = Pcg32::seed_from_u64(5);
        let pups = breed(&[450, 450], &[450, 450], 3, &mut rng);
        assert_eq!(pups, vec![450; 6]);
    }

    #[test]
    fn test_breed_leaves_inputs_untouched() {
        let mut rng = Pcg32::seed_from_u64(6);
        let males = vec![500, 510, 520, 530];
        let females = vec![300, 310, 320, 330];
        let _ = breed(&males, &females, 2, &mut rng);
        assert_eq!(males, vec![500, 510, 520, 530]);
        assert_eq!(females, vec![300, 310, 320, 330]);
    }
}
