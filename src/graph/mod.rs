//! Graph representation and algorithms module

pub mod bcc;
pub mod filtered;
pub mod truth;

pub use filtered::{make_new_graph, FilteredGraph};
pub use truth::{ground_truth_not_same, ground_truth_same, GlobalGraph, SameTruth};

use serde::{Deserialize, Serialize};

/// Data point identifier, unique across all clusters (1-based)
pub type NodeId = u32;

/// Unordered node pair, stored with the smaller endpoint first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { u: a, v: b }
        } else {
            Self { u: b, v: a }
        }
    }
}

/// Where an edge lives in the ground truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Both endpoints in the same cluster (a true match)
    Intracluster,

    /// Endpoints in different clusters (a true non-match)
    Intercluster,
}

/// Outcome of thresholding a single edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeTag {
    /// Threshold decision agrees with the ground truth
    #[default]
    Normal,

    /// Threshold decision disagrees with the ground truth
    Flipped,

    /// Score falls between the thresholds; excluded from counts
    DontCare,
}
