//! Aggregate results of a completed run.
mod types;

pub use types::RunMetrics;
