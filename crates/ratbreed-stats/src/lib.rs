//! Statistical helpers for the rat breeding simulator.
//!
//! Populations are plain sequences of integral weights, so everything here
//! works on `f64` samples produced by converting those weights.
//!
//! - **Mean**: [`descriptive::mean`] is the single reduction the fitness
//!   evaluator needs.
//! - **Descriptive statistics**: [`descriptive::DescriptiveStats`] summarizes a
//!   population (min, max, mean, median, spread) for progress reporting.
//!
//! # Examples
//!
//! ```
//! use ratbreed_stats::descriptive::{self, DescriptiveStats};
//!
//! let weights = [200.0, 300.0, 400.0];
//! assert_eq!(descriptive::mean(weights), Some(300.0));
//!
//! let stats = DescriptiveStats::new(weights).unwrap();
//! assert_eq!(stats.median, 300.0);
//! ```

pub mod descriptive;
