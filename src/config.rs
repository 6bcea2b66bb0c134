//! Configuration management for the resolution benchmark

use std::path::PathBuf;

/// One ground-truth layout: how many clusters, and how many data points per cluster on average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterParams {
    /// Number of clusters to generate
    pub clusters: usize,

    /// Total data points = clusters * multiplier
    pub multiplier: usize,
}

impl ClusterParams {
    pub fn new(clusters: usize, multiplier: usize) -> Self {
        Self {
            clusters,
            multiplier,
        }
    }

    /// Total number of data points spread over the clusters
    pub fn total_data(&self) -> usize {
        self.clusters * self.multiplier
    }
}

/// Default configuration for the benchmark
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Cluster layouts to evaluate, in order
    pub cluster_params: Vec<ClusterParams>,

    /// Percentile thresholds applied to each layout
    pub thresholds: Vec<f64>,

    /// Repetitions per (layout, threshold)
    pub iterations: usize,

    /// Fraction of the remaining data points handed to each successive cluster
    pub split_fraction: f64,

    /// Directory receiving one record per (layout, threshold)
    pub output_dir: PathBuf,

    /// Seed for the score shuffle; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            cluster_params: vec![ClusterParams::new(5000, 3), ClusterParams::new(5000, 5)],
            thresholds: vec![98.0, 50.0],
            iterations: 5,
            split_fraction: 0.5,
            output_dir: PathBuf::from("mild"),
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Create a new configuration with custom values
    pub fn new(
        cluster_params: Vec<ClusterParams>,
        thresholds: Vec<f64>,
        iterations: usize,
        output_dir: impl Into<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            cluster_params,
            thresholds,
            iterations,
            output_dir: output_dir.into(),
            seed,
            ..Self::default()
        }
    }
}
