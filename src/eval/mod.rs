//! Scoring, thresholding and evaluation against the ground truth

pub mod assign;
pub mod confusion;
pub mod flip;

pub use assign::{assign_not_same, assign_same, collect_hist_data, ScoredEdges};
pub use confusion::{bcc_accuracy, confusion_matrix_ground_truth, ConfusionMatrix, Metrics};
pub use flip::{flip_intercluster, flip_intracluster, LabeledEdges};
