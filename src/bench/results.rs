use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::core::types::Record;

/// One engine's complete measurement for a (query, limit) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub matches: Vec<Record>,
    pub elapsed: Duration,
    /// Peak live-heap delta over the build+query span, in bytes.
    pub peak_memory: usize,
}

impl BenchmarkResult {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Either a complete result or an explicit failure; never a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EngineOutcome {
    Completed(BenchmarkResult),
    Failed { error: String },
}

impl EngineOutcome {
    pub fn result(&self) -> Option<&BenchmarkResult> {
        match self {
            EngineOutcome::Completed(result) => Some(result),
            EngineOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            EngineOutcome::Completed(_) => None,
            EngineOutcome::Failed { error } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EngineOutcome::Failed { .. })
    }
}

/// Per-engine time series over a list of limits; `None` marks a failed run.
pub type SweepSeries = BTreeMap<String, Vec<Option<Duration>>>;

/// One simulation cell: timing and memory, matches dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationCell {
    pub elapsed: Duration,
    pub peak_memory: usize,
}

/// query -> limit -> engine name -> cell (`None` marks a failed run).
pub type SimulationMatrix = BTreeMap<String, BTreeMap<usize, BTreeMap<String, Option<SimulationCell>>>>;
