//! Confusion matrices and precision / recall / F1

use rustworkx_core::petgraph::graph::EdgeIndex;
use serde::{Deserialize, Serialize};

use crate::eval::flip::LabeledEdges;
use crate::graph::bcc::non_bcc_edges;
use crate::graph::{EdgeTag, FilteredGraph, Location};

/// Decision counts against the ground truth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_pos: usize,
    pub true_neg: usize,
    pub false_pos: usize,
    pub false_neg: usize,
}

impl ConfusionMatrix {
    /// Count one thresholded edge; don't-care edges count as nothing
    pub fn record(&mut self, location: Location, tag: EdgeTag) {
        match (location, tag) {
            (_, EdgeTag::DontCare) => {}
            (Location::Intercluster, EdgeTag::Flipped) => self.false_neg += 1,
            (Location::Intercluster, EdgeTag::Normal) => self.true_neg += 1,
            (Location::Intracluster, EdgeTag::Flipped) => self.false_pos += 1,
            (Location::Intracluster, EdgeTag::Normal) => self.true_pos += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    /// No true positives: precision, recall and F1 all fall back to zero
    pub fn is_degenerate(&self) -> bool {
        self.true_pos == 0
    }

    pub fn metrics(&self) -> Metrics {
        Metrics::from_confusion(self)
    }
}

/// Zero when the denominator is zero
fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Precision, recall and F1 of one confusion matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Metrics {
    pub fn from_confusion(cm: &ConfusionMatrix) -> Self {
        let tp = cm.true_pos as f64;
        let precision = guarded_ratio(tp, tp + cm.false_pos as f64);
        let recall = guarded_ratio(tp, tp + cm.false_neg as f64);
        let f1 = guarded_ratio(2.0 * precision * recall, precision + recall);
        Self {
            precision,
            recall,
            f1,
        }
    }

    /// Fixed-point strings with six decimals, in (p, r, f) order
    pub fn formatted(&self) -> [String; 3] {
        [
            format!("{:.6}", self.precision),
            format!("{:.6}", self.recall),
            format!("{:.6}", self.f1),
        ]
    }
}

/// Evaluate raw threshold decisions.
///
/// Inter-cluster: flipped is FN, untouched is TN. Intra-cluster: flipped is
/// FP, untouched is TP. Don't-care edges are excluded.
pub fn confusion_matrix_ground_truth(
    global: &LabeledEdges<'_>,
    clusters: &[LabeledEdges<'_>],
) -> ConfusionMatrix {
    let mut cm = ConfusionMatrix::default();
    for labeled in std::iter::once(global).chain(clusters) {
        for &tag in &labeled.tags {
            cm.record(labeled.location, tag);
        }
    }
    cm
}

/// Evaluate biconnected-component membership as the match decision.
///
/// Component edges that are truly inter-cluster are FP, the rest TP. Edges
/// outside every component that are truly intra-cluster are FN, the rest TN.
pub fn bcc_accuracy(bcc_edges: &[EdgeIndex], filtered: &FilteredGraph) -> ConfusionMatrix {
    let mut cm = ConfusionMatrix::default();

    for &e in bcc_edges {
        match filtered.graph[e] {
            Location::Intercluster => cm.false_pos += 1,
            Location::Intracluster => cm.true_pos += 1,
        }
    }

    for e in non_bcc_edges(filtered, bcc_edges) {
        match filtered.graph[e] {
            Location::Intracluster => cm.false_neg += 1,
            Location::Intercluster => cm.true_neg += 1,
        }
    }

    if cm.is_degenerate() {
        log::warn!(
            "Biconnected components hold no true positives (FP = {}, FN = {}); \
             metrics fall back to zero",
            cm.false_pos,
            cm.false_neg
        );
    }

    cm
}
