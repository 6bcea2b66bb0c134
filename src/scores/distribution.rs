//! Geometric chunking of a score count

/// Ratio between the remaining count and the next chunk
const DECAY: f64 = 1.1;

/// Split `total` into geometrically shrinking chunks.
///
/// Each chunk takes `floor(remaining / 1.1)` until at most one item remains;
/// that remainder is folded into the last chunk. The sizes always sum to
/// `total`, and the number of chunks is the returned length.
pub fn sizes_of_dist(total: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut remain = total;

    // remain >= 2 guarantees a chunk of at least 1
    while remain > 1 {
        let chunk = (remain as f64 / DECAY).floor() as usize;
        sizes.push(chunk);
        remain -= chunk;
    }

    if remain > 0 {
        match sizes.last_mut() {
            Some(last) => *last += remain,
            None => sizes.push(remain),
        }
    }

    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_sum_to_total() {
        for total in 0..3000 {
            let sizes = sizes_of_dist(total);
            assert_eq!(sizes.iter().sum::<usize>(), total, "total = {}", total);
            assert!(sizes.iter().all(|&s| s > 0));
        }
    }

    #[test]
    fn degenerate_totals() {
        assert!(sizes_of_dist(0).is_empty());
        assert_eq!(sizes_of_dist(1), vec![1]);
        assert_eq!(sizes_of_dist(2), vec![2]);
    }

    #[test]
    fn chunks_shrink_geometrically() {
        // 12 -> 10 (2 left) -> 1 (1 left), remainder folded into the tail
        assert_eq!(sizes_of_dist(12), vec![10, 2]);

        let sizes = sizes_of_dist(1_000_000);
        assert_eq!(sizes[0], 909_090);
        assert!(sizes.windows(2).all(|w| w[0] >= w[1]));
        assert!(sizes.len() < 10);
    }

    #[test]
    fn depends_only_on_total() {
        assert_eq!(sizes_of_dist(4321), sizes_of_dist(4321));
    }
}
