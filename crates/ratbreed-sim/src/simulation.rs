//! Generation loop.
//!
//! [`Simulation`] owns the random generator, the current population and the
//! history of average weights. Construction samples the founding population
//! and evaluates it; each [`Simulation::step`] then runs one generation:
//!
//! ```text
//! select ─▶ breed ─▶ mutate ─▶ merge (males + females + pups) ─▶ evaluate ─▶ record
//! ```
//!
//! The loop stops as soon as the population's mean weight reaches the goal or
//! the generation limit is reached, whichever comes first. Both checks happen
//! before a generation starts, so a founding population that already meets
//! the goal, or a limit of zero, runs no generations at all.

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{
    Population, SimulationConfig, SimulationSeed, Weight, breeding,
    config::ConfigError,
    fitness::{self, FitnessError},
    mutation::Mutation,
    selection,
};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SimulationError {
    #[display("invalid configuration: {_0}")]
    Config(ConfigError),
    #[display("{_0}")]
    Fitness(FitnessError),
}

/// Where the simulation stands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::IsVariant,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The goal has not been reached and generations remain.
    #[display("running")]
    Running,
    /// The mean weight reached the goal.
    #[display("goal weight reached")]
    Converged,
    /// The generation limit ran out before the goal was reached.
    #[display("generation limit reached")]
    GenerationLimitReached,
}

/// Average weight of the population after one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Zero-based index of the generation.
    pub generation: usize,
    /// Mean weight in grams of the merged population.
    pub average_weight: f64,
}

/// Final state of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub seed: SimulationSeed,
    pub config: SimulationConfig,
    pub status: Status,
    /// Number of generations run.
    pub generations: usize,
    /// Whole years the generations took at `litters_per_year`.
    pub elapsed_years: usize,
    pub initial_fitness: f64,
    pub final_fitness: f64,
    pub final_population: Population,
    /// One record per generation, in order.
    pub history: Vec<GenerationRecord>,
}

/// A single run of the breeding program.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    seed: SimulationSeed,
    rng: Pcg32,
    mutation: Mutation,
    initial_population: Population,
    initial_fitness: f64,
    population: Population,
    fitness: f64,
    history: Vec<GenerationRecord>,
}

impl Simulation {
    /// Starts a simulation with a random seed.
    ///
    /// See [`Self::with_seed`].
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_seed(config, rand::rng().random())
    }

    /// Starts a simulation whose randomness is fully determined by `seed`.
    ///
    /// The configuration is normalized (even number of rats) and validated,
    /// then the founding population is sampled and evaluated.
    pub fn with_seed(
        config: SimulationConfig,
        seed: SimulationSeed,
    ) -> Result<Self, SimulationError> {
        let config = config.normalized();
        let (initial, mutation) = config.operators()?;
        let mut rng = Pcg32::from_seed(seed.to_bytes());

        let population = initial.populate(config.num_rats, &mut rng);
        let fitness = fitness::fitness(&population, config.goal_weight)?;

        Ok(Self {
            config,
            seed,
            rng,
            mutation,
            initial_population: population.clone(),
            initial_fitness: fitness,
            population,
            fitness,
            history: vec![],
        })
    }

    /// Returns the normalized configuration in use.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> SimulationSeed {
        self.seed
    }

    /// Number of rats retained for breeding each generation.
    #[must_use]
    pub fn retain_count(&self) -> usize {
        self.config.num_rats
    }

    #[must_use]
    pub fn initial_population(&self) -> &[Weight] {
        &self.initial_population
    }

    #[must_use]
    pub fn initial_fitness(&self) -> f64 {
        self.initial_fitness
    }

    #[must_use]
    pub fn population(&self) -> &[Weight] {
        &self.population
    }

    /// Fitness of the current population.
    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of generations run so far.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.fitness >= 1.0 {
            Status::Converged
        } else if self.generation() >= self.config.generation_limit {
            Status::GenerationLimitReached
        } else {
            Status::Running
        }
    }

    /// Runs one generation and returns its record.
    ///
    /// Returns `Ok(None)` without touching the population once the
    /// simulation has stopped.
    pub fn step(&mut self) -> Result<Option<&GenerationRecord>, SimulationError> {
        if !self.status().is_running() {
            return Ok(None);
        }

        let selected = selection::select(&self.population, self.retain_count());
        let pups = breeding::breed(
            &selected.males,
            &selected.females,
            self.config.litter_size,
            &mut self.rng,
        );
        let pups = self.mutation.apply(&pups, &mut self.rng);

        let mut population = selected.into_parents();
        population.extend(pups);

        let average_weight =
            fitness::mean_weight(&population).ok_or(FitnessError::EmptyPopulation)?;
        self.fitness = fitness::fitness_of_mean(average_weight, self.config.goal_weight)?;
        self.population = population;

        let generation = self.history.len();
        self.history.push(GenerationRecord {
            generation,
            average_weight,
        });
        Ok(self.history.last())
    }

    /// Runs generations until the goal or the generation limit is reached.
    pub fn run(mut self) -> Result<SimulationOutcome, SimulationError> {
        while self.step()?.is_some() {}
        Ok(self.into_outcome())
    }

    /// Consumes the simulation and reports its current state.
    ///
    /// Normally called once [`Self::step`] has returned `None`; calling it
    /// earlier yields an outcome with [`Status::Running`].
    #[must_use]
    pub fn into_outcome(self) -> SimulationOutcome {
        let status = self.status();
        let generations = self.generation();
        SimulationOutcome {
            seed: self.seed,
            status,
            generations,
            elapsed_years: generations / self.config.litters_per_year,
            initial_fitness: self.initial_fitness,
            final_fitness: self.fitness,
            final_population: self.population,
            history: self.history,
            config: self.config,
        }
    }
}
