//! Ground-truth cluster module

pub mod builder;
pub mod sizing;

pub use builder::make_clusters;
pub use sizing::cluster_sizing;

use crate::graph::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A true "same entity" group, materialized as a complete graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Position in build order (0 is the largest cluster)
    pub id: usize,

    /// First node identifier owned by this cluster
    pub first_node: NodeId,

    /// Number of data points in the cluster
    pub size: usize,

    /// Every pair of members, in combination order
    pub edges: Vec<Edge>,
}

impl Cluster {
    /// Node identifiers owned by this cluster
    pub fn nodes(&self) -> Range<NodeId> {
        self.first_node..self.first_node + self.size as NodeId
    }

    /// Number of SAME pairs, C(size, 2)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
