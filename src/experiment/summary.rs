//! Spread of metrics across repeated iterations

use statrs::statistics::Statistics;

use crate::eval::Metrics;

/// Mean and sample standard deviation of each metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub mean: Metrics,
    pub std_dev: Metrics,
}

fn mean_and_std(values: &[f64]) -> (f64, f64) {
    match values.len() {
        0 => (0.0, 0.0),
        1 => (values[0], 0.0),
        _ => (values.mean(), values.std_dev()),
    }
}

/// Summarize a run's per-iteration metrics
pub fn summarize(runs: &[Metrics]) -> MetricSummary {
    let precision: Vec<f64> = runs.iter().map(|m| m.precision).collect();
    let recall: Vec<f64> = runs.iter().map(|m| m.recall).collect();
    let f1: Vec<f64> = runs.iter().map(|m| m.f1).collect();

    let (p_mean, p_std) = mean_and_std(&precision);
    let (r_mean, r_std) = mean_and_std(&recall);
    let (f_mean, f_std) = mean_and_std(&f1);

    MetricSummary {
        mean: Metrics {
            precision: p_mean,
            recall: r_mean,
            f1: f_mean,
        },
        std_dev: Metrics {
            precision: p_std,
            recall: r_std,
            f1: f_std,
        },
    }
}
