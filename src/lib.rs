//! Synthetic entity-resolution benchmark: threshold matching and
//! biconnected-component post-processing against a planted clustering

pub mod cluster;
pub mod config;
pub mod error;
pub mod eval;
pub mod experiment;
pub mod graph;
pub mod scores;
pub mod storage;

pub use anyhow::Result;
pub use error::SimulationError;
