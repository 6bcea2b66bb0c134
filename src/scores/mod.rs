//! Similarity score distributions and thresholds

pub mod distribution;
pub mod generator;
pub mod percentile;

pub use distribution::sizes_of_dist;
pub use generator::{not_same_scores, same_scores, ScorePool};
pub use percentile::{percentile, Thresholds};
