//! Shared building blocks for number-stats.
//!
//! Holds the error taxonomy, the analysis result models, the rounding policy,
//! text formatting helpers and the command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod rounding;
pub mod settings;

pub use error::{Result, StatsError};
