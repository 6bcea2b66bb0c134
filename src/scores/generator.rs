//! Synthetic similarity score generation

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, SimulationError};

/// Round half-to-even at two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Generate scores for pairs that are NOT the same entity.
///
/// `[0, 1)` is cut into `sizes.len()` bins; bin `i` contributes `sizes[i]`
/// copies of its rounded upper edge. Every score is then lifted by one bin
/// width, the final score is lowered by one bin width, and the result is
/// shuffled. Because the first chunk is by far the largest, most scores sit
/// near the bottom of the range.
pub fn not_same_scores<R: Rng + ?Sized>(sizes: &[usize], rng: &mut R) -> Vec<f64> {
    let chunks = sizes.len();
    if chunks == 0 {
        return Vec::new();
    }
    let width = 1.0 / chunks as f64;

    let mut scores = Vec::with_capacity(sizes.iter().sum());
    for (i, &size) in sizes.iter().enumerate() {
        let value = round2(i as f64 * width + width) + width;
        scores.extend(std::iter::repeat(value).take(size));
    }
    if let Some(last) = scores.last_mut() {
        *last -= width;
    }

    scores.shuffle(rng);
    scores
}

/// Generate dissimilarities for pairs that ARE the same entity.
///
/// Mirrors [`not_same_scores`] over descending bins and is not shuffled.
/// Callers turn each value into a similarity with `1 - value`.
pub fn same_scores(sizes: &[usize]) -> Vec<f64> {
    let chunks = sizes.len();
    if chunks == 0 {
        return Vec::new();
    }
    let width = 1.0 / chunks as f64;

    let mut scores = Vec::with_capacity(sizes.iter().sum());
    for (i, &size) in sizes.iter().enumerate() {
        let upper = 1.0 - i as f64 * width;
        let value = round2(upper - width).abs() - width;
        scores.extend(std::iter::repeat(value).take(size));
    }
    if let Some(last) = scores.last_mut() {
        *last += width;
    }

    scores
}

/// A generated score array handed out in consecutive slices.
///
/// Every score must be consumed exactly once; [`ScorePool::finish`] reports
/// any leftover.
#[derive(Debug, Clone)]
pub struct ScorePool {
    scores: Vec<f64>,
    cursor: usize,
}

impl ScorePool {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores, cursor: 0 }
    }

    /// Scores not yet handed out
    pub fn remaining(&self) -> usize {
        self.scores.len() - self.cursor
    }

    /// Take the next `count` scores
    pub fn take(&mut self, count: usize) -> Result<&[f64]> {
        let available = self.remaining();
        if count > available {
            return Err(SimulationError::ScorePoolShortfall {
                requested: count,
                available,
            });
        }
        let start = self.cursor;
        self.cursor += count;
        Ok(&self.scores[start..self.cursor])
    }

    /// Check that the pool was drained exactly
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            leftover => Err(SimulationError::ScorePoolLeftover { leftover }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::sizes_of_dist;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lengths_match_chunk_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        for total in [0, 1, 2, 12, 500, 12_345] {
            let sizes = sizes_of_dist(total);
            assert_eq!(not_same_scores(&sizes, &mut rng).len(), total);
            assert_eq!(same_scores(&sizes).len(), total);
        }
    }

    #[test]
    fn not_same_values_follow_bins() {
        let mut rng = StdRng::seed_from_u64(3);
        // four bins of width 0.25
        let sizes = vec![909, 82, 8, 1];
        let mut scores = not_same_scores(&sizes, &mut rng);
        scores.sort_by(|a, b| a.total_cmp(b));

        assert_abs_diff_eq!(scores[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[908], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[909], 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[998], 1.0, epsilon = 1e-9);
        // the single top-bin score is pulled back by one bin width
        assert_abs_diff_eq!(scores[999], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn same_values_follow_descending_bins() {
        let sizes = vec![909, 82, 8, 1];
        let scores = same_scores(&sizes);

        assert_abs_diff_eq!(scores[0], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[909], 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(scores[991], 0.0, epsilon = 1e-9);
        // last bin sits at -width until the boundary correction lifts it
        assert_abs_diff_eq!(scores[999], 0.0, epsilon = 1e-9);
        assert!(scores.iter().all(|s| (1.0 - s) >= 0.0 && (1.0 - s) <= 1.0 + 0.25));
    }

    #[test]
    fn not_same_shuffle_is_seeded() {
        let sizes = sizes_of_dist(2000);
        let a = not_same_scores(&sizes, &mut StdRng::seed_from_u64(42));
        let b = not_same_scores(&sizes, &mut StdRng::seed_from_u64(42));
        let c = not_same_scores(&sizes, &mut StdRng::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn same_is_deterministic() {
        let sizes = sizes_of_dist(777);
        assert_eq!(same_scores(&sizes), same_scores(&sizes));
    }

    #[test]
    fn pool_hands_out_consecutive_slices() {
        let mut pool = ScorePool::new(vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(pool.take(1).unwrap(), &[0.1]);
        assert_eq!(pool.take(3).unwrap(), &[0.2, 0.3, 0.4]);
        assert!(pool.finish().is_ok());
    }

    #[test]
    fn pool_reports_shortfall_and_leftover() {
        let mut pool = ScorePool::new(vec![0.1, 0.2]);
        assert_eq!(
            pool.take(3).unwrap_err(),
            SimulationError::ScorePoolShortfall {
                requested: 3,
                available: 2,
            }
        );
        pool.take(1).unwrap();
        assert_eq!(pool.finish().unwrap_err(), SimulationError::ScorePoolLeftover { leftover: 1 });
    }
}
