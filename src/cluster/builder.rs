//! Complete-graph construction for ground-truth clusters

use itertools::Itertools;

use crate::cluster::Cluster;
use crate::graph::{Edge, NodeId};

/// Materialize each size as a complete graph.
///
/// Node identifiers are contiguous and global: cluster `i` starts at one
/// past the last node of cluster `i - 1`, and the first cluster starts at 1.
pub fn make_clusters(cluster_sizes: &[usize]) -> Vec<Cluster> {
    let mut clusters = Vec::with_capacity(cluster_sizes.len());
    let mut counter: NodeId = 0;

    for (id, &size) in cluster_sizes.iter().enumerate() {
        let first_node = counter + 1;
        let last_node = counter + size as NodeId;

        let edges: Vec<Edge> = (first_node..=last_node)
            .tuple_combinations()
            .map(|(a, b)| Edge::new(a, b))
            .collect();

        clusters.push(Cluster {
            id,
            first_node,
            size,
            edges,
        });
        counter = last_node;
    }

    clusters
}
