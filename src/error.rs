//! Error types for the simulation pipeline

use thiserror::Error;

/// Failures raised by the simulation stages
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("cannot split {total} data points into {clusters} clusters")]
    InvalidClusterCount { total: usize, clusters: usize },

    #[error("split fraction must lie strictly between 0 and 1, got {0}")]
    InvalidSplitFraction(f64),

    #[error("percentile must lie in [0, 100], got {0}")]
    InvalidPercentile(f64),

    #[error("cannot take a percentile of an empty score array")]
    EmptyScores,

    #[error("score pool holds {available} scores but {requested} edges need one")]
    ScorePoolShortfall { requested: usize, available: usize },

    #[error("{leftover} generated scores were left unassigned")]
    ScorePoolLeftover { leftover: usize },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
