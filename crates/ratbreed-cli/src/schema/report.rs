use std::time::Duration;

use chrono::{DateTime, Utc};
use ratbreed_sim::simulation::SimulationOutcome;
use serde::{Deserialize, Serialize};

/// Saved result of a simulation run.
///
/// Holds everything needed to redraw the average weight chart or to replay
/// the run with the same seed and configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationReport {
    pub finished_at: DateTime<Utc>,
    pub runtime_secs: f64,
    #[serde(flatten)]
    pub outcome: SimulationOutcome,
}

impl SimulationReport {
    pub fn new(outcome: SimulationOutcome, runtime: Duration) -> Self {
        Self {
            finished_at: Utc::now(),
            runtime_secs: runtime.as_secs_f64(),
            outcome,
        }
    }
}
