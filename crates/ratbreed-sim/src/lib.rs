//! Artificial selection of a rat population toward a goal body weight.
//!
//! This crate implements a generational genetic algorithm over scalar weights.
//! Each individual is nothing more than its weight in grams; individuals have no
//! identity and populations are rebuilt from scratch every generation.
//!
//! # How a Run Works
//!
//! 1. **Sampling** - The initial population is drawn from a triangular distribution
//!    ([`sampling`])
//! 2. **Fitness** - The population mean is compared against the goal weight ([`fitness`])
//! 3. **Selection** - The heaviest rats of each sex are retained ([`selection`])
//! 4. **Breeding** - Random pairs produce litters between their parents' weights
//!    ([`breeding`])
//! 5. **Mutation** - A few offspring have their weight rescaled ([`mutation`])
//! 6. **Merge** - Retained parents and offspring form the next population
//!
//! Steps 2-6 repeat until the mean weight reaches the goal or the generation
//! limit is hit. The [`simulation`] module drives the loop and records the
//! average weight of every generation.
//!
//! # Architecture
//!
//! ```text
//! SimulationConfig ──validate──▶ Simulation (owns Pcg32 + population + history)
//!                                    │
//!          ┌─────────────┬───────────┼────────────┬────────────┐
//!          ▼             ▼           ▼            ▼            ▼
//!      sampling       fitness    selection     breeding     mutation
//! ```
//!
//! All operators are free functions that borrow their input and take the random
//! generator explicitly, so a fixed [`SimulationSeed`] reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use ratbreed_sim::{SimulationConfig, SimulationSeed, simulation::Simulation};
//!
//! let config = SimulationConfig {
//!     generation_limit: 50,
//!     ..SimulationConfig::default()
//! };
//! let seed: SimulationSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
//! let outcome = Simulation::with_seed(config, seed).unwrap().run().unwrap();
//!
//! assert_eq!(outcome.history.len(), outcome.generations);
//! ```

pub use self::{
    config::{ConfigError, SimulationConfig},
    seed::SimulationSeed,
};

pub mod breeding;
pub mod config;
pub mod fitness;
pub mod mutation;
pub mod sampling;
pub mod seed;
pub mod selection;
pub mod simulation;

/// Body weight of a single rat in grams.
pub type Weight = u64;

/// An unordered collection of rat weights.
pub type Population = Vec<Weight>;
