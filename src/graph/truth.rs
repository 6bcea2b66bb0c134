//! Ground-truth assembly: SAME pairs inside clusters, NOT SAME pairs between them

use itertools::Itertools;

use crate::cluster::{make_clusters, Cluster};
use crate::graph::{Edge, NodeId};

/// The SAME side of the ground truth
#[derive(Debug, Clone)]
pub struct SameTruth {
    /// All nodes across all clusters, in cluster order
    pub nodes: Vec<NodeId>,

    /// The clusters themselves
    pub clusters: Vec<Cluster>,

    /// All intra-cluster edges, concatenated in cluster order
    pub edges: Vec<Edge>,

    /// Number of SAME pairs (sum of C(size, 2))
    pub pairs_same: usize,
}

/// Complete graph over every node minus the SAME edges
#[derive(Debug, Clone)]
pub struct GlobalGraph {
    pub nodes: Vec<NodeId>,

    /// Inter-cluster edges in combination order
    pub edges: Vec<Edge>,
}

impl GlobalGraph {
    /// Number of NOT SAME pairs
    pub fn pair_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the clusters for `cluster_sizes` and flatten their nodes and edges
pub fn ground_truth_same(cluster_sizes: &[usize]) -> SameTruth {
    let clusters = make_clusters(cluster_sizes);

    let nodes: Vec<NodeId> = clusters.iter().flat_map(|c| c.nodes()).collect();
    let edges: Vec<Edge> = clusters.iter().flat_map(|c| c.edges.iter().copied()).collect();
    let pairs_same = clusters.iter().map(Cluster::edge_count).sum();

    log::info!("Number of pairs in 'SAME' distribution: {}", pairs_same);

    SameTruth {
        nodes,
        clusters,
        edges,
        pairs_same,
    }
}

/// Every pair of nodes that lives in different clusters
pub fn ground_truth_not_same(truth: &SameTruth) -> GlobalGraph {
    // owner[node] = cluster id; nodes are contiguous from 1
    let max_node = truth.nodes.iter().copied().max().unwrap_or(0) as usize;
    let mut owner = vec![usize::MAX; max_node + 1];
    for cluster in &truth.clusters {
        for node in cluster.nodes() {
            owner[node as usize] = cluster.id;
        }
    }

    let edges: Vec<Edge> = truth
        .nodes
        .iter()
        .copied()
        .tuple_combinations()
        .filter(|&(a, b)| owner[a as usize] != owner[b as usize])
        .map(|(a, b)| Edge::new(a, b))
        .collect();

    log::info!("Number of pairs in 'NOT_SAME' distribution: {}", edges.len());

    GlobalGraph {
        nodes: truth.nodes.clone(),
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_truth_counts_pairs() {
        let truth = ground_truth_same(&[4, 2, 1]);
        assert_eq!(truth.nodes, (1..=7).collect::<Vec<_>>());
        assert_eq!(truth.pairs_same, 6 + 1);
        assert_eq!(truth.edges.len(), truth.pairs_same);
        assert_eq!(truth.clusters.len(), 3);
    }

    #[test]
    fn same_and_not_same_partition_the_complete_graph() {
        let truth = ground_truth_same(&[5, 3, 3, 1]);
        let global = ground_truth_not_same(&truth);

        let same: HashSet<Edge> = truth.edges.iter().copied().collect();
        let not_same: HashSet<Edge> = global.edges.iter().copied().collect();
        assert!(same.is_disjoint(&not_same));

        let n = truth.nodes.len();
        let complete: HashSet<Edge> = (1..=n as NodeId)
            .tuple_combinations()
            .map(|(a, b)| Edge::new(a, b))
            .collect();
        let union: HashSet<Edge> = same.union(&not_same).copied().collect();
        assert_eq!(union, complete);
        assert_eq!(global.pair_count(), n * (n - 1) / 2 - truth.pairs_same);
    }

    #[test]
    fn three_pairs_scenario() {
        let truth = ground_truth_same(&[2, 2, 2]);
        let global = ground_truth_not_same(&truth);
        assert_eq!(truth.pairs_same, 3);
        assert_eq!(global.pair_count(), 12);
    }
}
