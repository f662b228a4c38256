//! Population fitness relative to the goal weight.

use ratbreed_stats::descriptive;

use crate::Weight;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum FitnessError {
    #[display("cannot evaluate fitness of an empty population")]
    EmptyPopulation,
    #[display("goal weight must be positive")]
    ZeroGoalWeight,
}

/// Mean weight of the population in grams, or `None` if it is empty.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean_weight(population: &[Weight]) -> Option<f64> {
    descriptive::mean(population.iter().map(|&w| w as f64))
}

/// Ratio of the population's mean weight to `goal_weight`.
///
/// A ratio of `1.0` or more means the population has reached the goal.
///
/// # Examples
///
/// ```
/// use ratbreed_sim::fitness;
///
/// assert_eq!(fitness::fitness(&[100, 200, 300], 400).unwrap(), 0.5);
/// assert!(fitness::fitness(&[], 400).is_err());
/// ```
pub fn fitness(population: &[Weight], goal_weight: Weight) -> Result<f64, FitnessError> {
    let mean = mean_weight(population).ok_or(FitnessError::EmptyPopulation)?;
    fitness_of_mean(mean, goal_weight)
}

/// Same as [`fitness`] for a population whose mean weight is already known.
#[expect(clippy::cast_precision_loss)]
pub fn fitness_of_mean(mean_weight: f64, goal_weight: Weight) -> Result<f64, FitnessError> {
    if goal_weight == 0 {
        return Err(FitnessError::ZeroGoalWeight);
    }
    Ok(mean_weight / goal_weight as f64)
}
