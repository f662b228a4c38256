//! Simulation parameters.

use serde::{Deserialize, Serialize};

use crate::{
    Weight,
    mutation::{Mutation, MutationError},
    sampling::{InitialDistribution, PopulateError},
};

/// Parameters of one simulation run.
///
/// All weights are in grams. The [`Default`] values describe a lab colony of
/// ordinary rats being bred toward a 50 kg goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Target mean weight of the population.
    pub goal_weight: Weight,
    /// Founding population size, also the number of rats retained each generation.
    pub num_rats: usize,
    /// Lower bound of the founding weight distribution.
    pub initial_min_weight: Weight,
    /// Upper bound of the founding weight distribution.
    pub initial_max_weight: Weight,
    /// Most common founding weight.
    pub initial_mode_weight: Weight,
    /// Probability that a pup is mutated.
    pub mutate_odds: f64,
    /// Smallest scale factor applied by a mutation.
    pub mutate_min: f64,
    /// Largest scale factor applied by a mutation.
    pub mutate_max: f64,
    /// Pups per breeding pair per generation.
    pub litter_size: usize,
    /// Generations that fit in one year.
    pub litters_per_year: usize,
    /// Generations to run before giving up on the goal.
    pub generation_limit: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            goal_weight: 50_000,
            num_rats: 20,
            initial_min_weight: 200,
            initial_max_weight: 600,
            initial_mode_weight: 300,
            mutate_odds: 0.01,
            mutate_min: 0.5,
            mutate_max: 1.2,
            litter_size: 8,
            litters_per_year: 10,
            generation_limit: 500,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    #[display("number of rats must be positive")]
    #[from(ignore)]
    NoRats,
    #[display("goal weight must be positive")]
    #[from(ignore)]
    ZeroGoalWeight,
    #[display("litters per year must be positive")]
    #[from(ignore)]
    ZeroLittersPerYear,
    #[display(
        "{num_rats} rats with litters of {litter_size} overflow the population size"
    )]
    #[from(ignore)]
    PopulationTooLarge { num_rats: usize, litter_size: usize },
    #[display("{_0}")]
    InitialDistribution(PopulateError),
    #[display("{_0}")]
    Mutation(MutationError),
}

impl SimulationConfig {
    /// Returns a copy with `num_rats` rounded up to an even number so that
    /// every retained rat has a mate.
    ///
    /// A count too large to round up is left as is for [`Self::validate`] to
    /// reject.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratbreed_sim::SimulationConfig;
    ///
    /// let config = SimulationConfig { num_rats: 21, ..SimulationConfig::default() };
    /// assert_eq!(config.normalized().num_rats, 22);
    /// ```
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            num_rats: self
                .num_rats
                .checked_next_multiple_of(2)
                .unwrap_or(self.num_rats),
            ..self.clone()
        }
    }

    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.operators().map(|_| ())
    }

    /// Validates the configuration and builds the sampling and mutation
    /// operators it describes.
    pub(crate) fn operators(&self) -> Result<(InitialDistribution, Mutation), ConfigError> {
        if self.num_rats == 0 {
            return Err(ConfigError::NoRats);
        }
        if self.goal_weight == 0 {
            return Err(ConfigError::ZeroGoalWeight);
        }
        if self.litters_per_year == 0 {
            return Err(ConfigError::ZeroLittersPerYear);
        }
        if self.population_size().is_none() {
            return Err(ConfigError::PopulationTooLarge {
                num_rats: self.num_rats,
                litter_size: self.litter_size,
            });
        }
        let initial = InitialDistribution::new(
            self.initial_min_weight,
            self.initial_max_weight,
            self.initial_mode_weight,
        )?;
        let mutation = Mutation::new(self.mutate_odds, self.mutate_min, self.mutate_max)?;
        Ok((initial, mutation))
    }

    /// Size of the population after one generation: the retained parents
    /// plus one litter per pair, or `None` if it does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ratbreed_sim::SimulationConfig;
    ///
    /// let config = SimulationConfig {
    ///     num_rats: 10,
    ///     litter_size: 4,
    ///     ..SimulationConfig::default()
    /// };
    /// assert_eq!(config.population_size(), Some(30));
    /// ```
    #[must_use]
    pub fn population_size(&self) -> Option<usize> {
        let num_rats = self.num_rats.checked_next_multiple_of(2)?;
        (num_rats / 2)
            .checked_mul(self.litter_size)?
            .checked_add(num_rats)
    }
}
