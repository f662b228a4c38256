//! Truncation selection of breeding stock.
//!
//! Rats carry no sex of their own. Instead the sorted population is split at
//! its midpoint and the lighter half is labelled female, the heavier half
//! male. This labelling is a fixed convention that breeding relies on: as long
//! as selection produced the pairs, every female weighs no more than its mate.
//!
//! Within each half only the heaviest rats are kept.

use crate::{Population, Weight};

/// Rats retained for breeding, split by sex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selected {
    /// Heaviest members of the upper (male) half, ascending.
    pub males: Population,
    /// Heaviest members of the lower (female) half, ascending.
    pub females: Population,
}

impl Selected {
    /// Concatenates males then females, the order in which parents rejoin the
    /// population.
    #[must_use]
    pub fn into_parents(self) -> Population {
        let Self { mut males, females } = self;
        males.extend(females);
        males
    }
}

/// Selects `retain_count / 2` males and as many females from `population`.
///
/// `retain_count` is floor-divided, so an odd count retains one rat fewer than
/// asked. A half that holds fewer rats than requested is retained whole.
///
/// # Examples
///
/// ```
/// use ratbreed_sim::selection;
///
/// let selected = selection::select(&[5, 1, 4, 2, 6, 3], 4);
/// assert_eq!(selected.females, vec![2, 3]);
/// assert_eq!(selected.males, vec![5, 6]);
/// ```
#[must_use]
pub fn select(population: &[Weight], retain_count: usize) -> Selected {
    let mut sorted = population.to_vec();
    sorted.sort_unstable();

    let per_sex = retain_count / 2;
    let (females, males) = sorted.split_at(sorted.len() / 2);

    Selected {
        males: heaviest(males, per_sex).to_vec(),
        females: heaviest(females, per_sex).to_vec(),
    }
}

/// Returns the last `count` elements of an ascending slice, or all of them.
fn heaviest(sorted: &[Weight], count: usize) -> &[Weight] {
    &sorted[sorted.len().saturating_sub(count)..]
}
