//! Experiment driver: repeated scoring, thresholding and evaluation

pub mod summary;

pub use summary::{summarize, MetricSummary};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cluster::cluster_sizing;
use crate::config::{ClusterParams, ExperimentConfig};
use crate::eval::{
    assign_not_same, assign_same, bcc_accuracy, collect_hist_data, confusion_matrix_ground_truth,
    flip_intercluster, flip_intracluster, ConfusionMatrix, Metrics,
};
use crate::graph::bcc::biconnected_components_gen;
use crate::graph::{
    ground_truth_not_same, ground_truth_same, make_new_graph, EdgeTag, GlobalGraph, SameTruth,
};
use crate::scores::Thresholds;
use crate::storage;

/// Per-iteration metric strings for one evaluator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub p: Vec<String>,
    pub r: Vec<String>,
    pub f: Vec<String>,
}

impl Series {
    pub fn push(&mut self, metrics: &Metrics) {
        let [p, r, f] = metrics.formatted();
        self.p.push(p);
        self.r.push(r);
        self.f.push(f);
    }

    pub fn len(&self) -> usize {
        self.p.len()
    }

    pub fn is_empty(&self) -> bool {
        self.p.is_empty()
    }
}

/// Accumulated results of one (layout, threshold) run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDictionary {
    /// Raw threshold decisions
    pub ground: Series,

    /// Biconnected-component decisions
    pub bcc: Series,
}

/// Everything one iteration measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOutcome {
    pub thresholds: Thresholds,

    /// Edges left in the ambiguous band, excluded from `ground`
    pub dont_care: usize,

    pub ground: ConfusionMatrix,
    pub bcc: ConfusionMatrix,
}

/// Ground truth for one cluster layout, built once and reused across thresholds
#[derive(Debug, Clone)]
pub struct Layout {
    pub params: ClusterParams,
    pub truth: SameTruth,
    pub global: GlobalGraph,
}

impl Layout {
    pub fn build(params: ClusterParams, split_fraction: f64) -> Result<Self> {
        let sizes = cluster_sizing(params.total_data(), params.clusters, split_fraction)
            .with_context(|| format!("sizing {} clusters", params.clusters))?;
        let truth = ground_truth_same(&sizes);
        let global = ground_truth_not_same(&truth);
        Ok(Self {
            params,
            truth,
            global,
        })
    }
}

/// Score, threshold and evaluate the layout once
pub fn run_iteration<R: Rng + ?Sized>(
    layout: &Layout,
    threshold: f64,
    rng: &mut R,
) -> Result<IterationOutcome> {
    let truth = &layout.truth;

    let same = assign_same(&truth.clusters, truth.pairs_same)?;
    let not_same = assign_not_same(&layout.global, rng)?;

    let (same_hist, not_same_hist) = collect_hist_data(&same, &not_same);
    let thresholds = Thresholds::from_percentile(&same_hist, &not_same_hist, threshold)?;
    log::info!("same threshold: {}", thresholds.same);
    log::info!("not-same threshold: {}", thresholds.not_same);

    let clusters = flip_intracluster(&same, &thresholds);
    let global = flip_intercluster(&not_same, &thresholds);

    let dont_care: usize = std::iter::once(&global)
        .chain(&clusters)
        .map(|labeled| labeled.count(EdgeTag::DontCare))
        .sum();
    log::debug!("{} edges in the don't-care band", dont_care);

    let ground = confusion_matrix_ground_truth(&global, &clusters);
    let filtered = make_new_graph(&truth.nodes, &global, &clusters);
    let bcc_edges = biconnected_components_gen(&filtered);
    let bcc = bcc_accuracy(&bcc_edges, &filtered);

    Ok(IterationOutcome {
        thresholds,
        dont_care,
        ground,
        bcc,
    })
}

fn log_outcome(label: &str, cm: &ConfusionMatrix, metrics: &Metrics) {
    let [p, r, f] = metrics.formatted();
    log::info!(
        "{}: TN = {}, FP = {}, TP = {}, FN = {}",
        label,
        cm.true_neg,
        cm.false_pos,
        cm.true_pos,
        cm.false_neg
    );
    log::info!("{}: Precision = {}, Recall = {}, F1-score = {}", label, p, r, f);
}

/// Repeat [`run_iteration`] and collect both metric series
pub fn perform_iterations<R: Rng + ?Sized>(
    layout: &Layout,
    threshold: f64,
    iterations: usize,
    rng: &mut R,
) -> Result<ScoreDictionary> {
    let mut scores = ScoreDictionary::default();
    let mut ground_runs = Vec::with_capacity(iterations);
    let mut bcc_runs = Vec::with_capacity(iterations);

    for iteration in 0..iterations {
        log::info!("iteration # {}", iteration + 1);

        let outcome = run_iteration(layout, threshold, rng)
            .with_context(|| format!("iteration {} at threshold {}", iteration + 1, threshold))?;

        let ground = outcome.ground.metrics();
        let bcc = outcome.bcc.metrics();
        log_outcome("ground", &outcome.ground, &ground);
        log_outcome("bcc", &outcome.bcc, &bcc);

        scores.ground.push(&ground);
        scores.bcc.push(&bcc);
        ground_runs.push(ground);
        bcc_runs.push(bcc);
    }

    for (label, runs) in [("ground", &ground_runs), ("bcc", &bcc_runs)] {
        let summary = summarize(runs);
        log::info!(
            "{} over {} iterations: P = {:.6} ± {:.6}, R = {:.6} ± {:.6}, F1 = {:.6} ± {:.6}",
            label,
            runs.len(),
            summary.mean.precision,
            summary.std_dev.precision,
            summary.mean.recall,
            summary.std_dev.recall,
            summary.mean.f1,
            summary.std_dev.f1
        );
    }

    Ok(scores)
}

/// Random source for a run: seeded when configured, entropy otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run every configured layout and threshold, saving one record each
pub fn run(config: &ExperimentConfig) -> Result<Vec<PathBuf>> {
    let mut rng = make_rng(config.seed);
    let mut written = Vec::new();

    for &params in &config.cluster_params {
        log::info!("=======================================");
        log::info!(
            "Number of clusters = {}, multiplier = {}",
            params.clusters,
            params.multiplier
        );

        let layout = Layout::build(params, config.split_fraction)?;

        for &threshold in &config.thresholds {
            log::info!(
                "Clusters = {}, multiplier = {}, threshold = {}",
                params.clusters,
                params.multiplier,
                threshold
            );
            let scores = perform_iterations(&layout, threshold, config.iterations, &mut rng)?;
            let path = storage::save_scores(&scores, &params, threshold, &config.output_dir)?;
            written.push(path);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_collects_formatted_metrics() {
        let mut series = Series::default();
        series.push(&Metrics {
            precision: 1.0,
            recall: 0.5,
            f1: 2.0 / 3.0,
        });
        assert_eq!(series.len(), 1);
        assert_eq!(series.p, vec!["1.000000"]);
        assert_eq!(series.f, vec!["0.666667"]);
    }

    #[test]
    fn iteration_counts_cover_every_decided_edge() {
        let layout = Layout::build(ClusterParams::new(6, 4), 0.5).unwrap();
        let mut rng = make_rng(Some(9));
        let outcome = run_iteration(&layout, 90.0, &mut rng).unwrap();

        let all = layout.truth.pairs_same + layout.global.pair_count();
        assert_eq!(outcome.ground.total(), all - outcome.dont_care);
        assert!(outcome.thresholds.same.is_finite());
    }

    #[test]
    fn seeded_runs_repeat() {
        let layout = Layout::build(ClusterParams::new(5, 3), 0.5).unwrap();
        let a = perform_iterations(&layout, 50.0, 3, &mut make_rng(Some(21))).unwrap();
        let b = perform_iterations(&layout, 50.0, 3, &mut make_rng(Some(21))).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ground.len(), 3);
        assert_eq!(a.bcc.len(), 3);
    }

    #[test]
    fn invalid_layout_is_reported() {
        assert!(Layout::build(ClusterParams::new(0, 3), 0.5).is_err());
    }
}
