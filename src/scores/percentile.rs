//! Percentile-derived decision thresholds

use crate::error::{Result, SimulationError};

/// Percentile with linear interpolation between the closest ranks
pub fn percentile(scores: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(SimulationError::InvalidPercentile(p));
    }
    if scores.is_empty() {
        return Err(SimulationError::EmptyScores);
    }

    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// The two similarity cut-offs a threshold-based matcher applies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// At or above this, a pair is declared a match
    pub same: f64,

    /// At or below this, a pair is declared a non-match
    pub not_same: f64,
}

impl Thresholds {
    pub fn new(same: f64, not_same: f64) -> Self {
        Self { same, not_same }
    }

    /// Cut the SAME scores at `threshold` and the NOT SAME scores at its complement
    pub fn from_percentile(
        same_scores: &[f64],
        not_same_scores: &[f64],
        threshold: f64,
    ) -> Result<Self> {
        let same = percentile(same_scores, threshold)?;
        let not_same = percentile(not_same_scores, 100.0 - threshold)?;
        Ok(Self { same, not_same })
    }

    /// Strictly between the two cut-offs
    pub fn is_ambiguous(&self, score: f64) -> bool {
        score > self.not_same && score < self.same
    }
}
