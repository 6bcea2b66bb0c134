use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use bcc_resolution_sim::config::ExperimentConfig;
use bcc_resolution_sim::experiment;

#[derive(Parser, Debug)]
#[clap(
    name = "bcc-resolution-sim",
    about = "Entity-resolution benchmark: thresholding vs. biconnected components"
)]
struct Cli {
    /// Output directory for score records
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Seed for the score shuffle (random if omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Iterations per cluster layout and threshold
    #[clap(long)]
    iterations: Option<usize>,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let mut config = ExperimentConfig::default();
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    config.seed = args.seed;

    log::info!("Starting resolution benchmark");
    log::info!("Output: {}", config.output_dir.display());

    let written = experiment::run(&config)?;

    log::info!(
        "Benchmark complete. {} records saved to {}",
        written.len(),
        config.output_dir.display()
    );

    Ok(())
}
