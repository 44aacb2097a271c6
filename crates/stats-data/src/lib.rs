//! Data layer for number-stats.
//!
//! Reads newline-separated integer files, computes descriptive statistics and
//! longest monotonic runs, and runs the top-level file analysis pipeline.

pub mod analysis;
pub mod analyzer;
pub mod reader;

#[cfg(test)]
mod test_support;

pub use stats_core as core;
