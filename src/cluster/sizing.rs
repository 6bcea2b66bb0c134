//! Skewed cluster size generation

use crate::error::{Result, SimulationError};

/// Split `total` data points into `clusters` sizes.
///
/// Every cluster starts with one member. Walking the clusters in order, each
/// takes `floor(x * remaining)` of the unassigned points; whatever is left
/// at the end goes to the first cluster. The result is geometric, with the
/// head cluster far larger than the tail.
pub fn cluster_sizing(total: usize, clusters: usize, x: f64) -> Result<Vec<usize>> {
    if clusters == 0 || total < clusters {
        return Err(SimulationError::InvalidClusterCount { total, clusters });
    }
    if !(x > 0.0 && x < 1.0) {
        return Err(SimulationError::InvalidSplitFraction(x));
    }

    let mut sizes = vec![1usize; clusters];
    let mut remain = total - clusters;

    for size in sizes.iter_mut() {
        if remain < 1 {
            break;
        }
        let fraction = (x * remain as f64) as usize;
        *size += fraction;
        remain -= fraction;
    }

    sizes[0] += remain;

    log::debug!("Cluster sizes for {} points in {} clusters: head {}", total, clusters, sizes[0]);

    Ok(sizes)
}
