//! Results persistence module

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use serde_json::to_string_pretty;

use crate::config::ClusterParams;
use crate::experiment::ScoreDictionary;

/// Deterministic record name for a (layout, threshold) pair
pub fn output_file_name(params: &ClusterParams, threshold: f64) -> String {
    format!("n{}_m{}_t{}.json", params.clusters, params.multiplier, threshold)
}

/// Save one run's score dictionary into `output_dir`
pub fn save_scores(
    scores: &ScoreDictionary,
    params: &ClusterParams,
    threshold: f64,
    output_dir: &Path,
) -> Result<PathBuf> {
    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let path = output_dir.join(output_file_name(params, threshold));
    log::info!("Saving scores to {}", path.display());

    let mut file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    file.write_all(to_string_pretty(scores)?.as_bytes())?;

    Ok(path)
}

/// Read a record written by [`save_scores`]
pub fn load_scores(path: &Path) -> Result<ScoreDictionary> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let scores =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(scores)
}
