//! Similarity score assignment for SAME and NOT SAME edges

use rand::Rng;

use crate::cluster::Cluster;
use crate::error::Result;
use crate::graph::{Edge, GlobalGraph};
use crate::scores::{not_same_scores, same_scores, sizes_of_dist, ScorePool};

/// Edges paired with one similarity score each
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEdges<'g> {
    pub edges: &'g [Edge],
    pub scores: Vec<f64>,
}

impl<'g> ScoredEdges<'g> {
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        self.edges.iter().copied().zip(self.scores.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Score every intra-cluster edge.
///
/// One pool of `pairs_same` dissimilarities is generated and sliced off
/// cluster by cluster; each edge gets `1 - dissimilarity`. The pool must
/// be consumed exactly.
pub fn assign_same<'g>(clusters: &'g [Cluster], pairs_same: usize) -> Result<Vec<ScoredEdges<'g>>> {
    let sizes = sizes_of_dist(pairs_same);
    log::debug!("SAME pool: {} scores in {} chunks", pairs_same, sizes.len());

    let mut pool = ScorePool::new(same_scores(&sizes));

    let scored = clusters
        .iter()
        .map(|cluster| {
            let slice = pool.take(cluster.edge_count())?;
            Ok(ScoredEdges {
                edges: &cluster.edges,
                scores: slice.iter().map(|s| 1.0 - s).collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pool.finish()?;
    Ok(scored)
}

/// Score every inter-cluster edge with a freshly shuffled NOT SAME pool
pub fn assign_not_same<'g, R: Rng + ?Sized>(
    global: &'g GlobalGraph,
    rng: &mut R,
) -> Result<ScoredEdges<'g>> {
    let pairs = global.pair_count();
    let sizes = sizes_of_dist(pairs);
    log::debug!("NOT SAME pool: {} scores in {} chunks", pairs, sizes.len());

    let mut pool = ScorePool::new(not_same_scores(&sizes, rng));
    let scores = pool.take(pairs)?.to_vec();
    pool.finish()?;

    Ok(ScoredEdges {
        edges: &global.edges,
        scores,
    })
}

/// Gather the SAME and NOT SAME score arrays used to derive thresholds
pub fn collect_hist_data(
    clusters: &[ScoredEdges<'_>],
    global: &ScoredEdges<'_>,
) -> (Vec<f64>, Vec<f64>) {
    let same = clusters.iter().flat_map(|c| c.scores.iter().copied()).collect();
    let not_same = global.scores.clone();
    (same, not_same)
}
