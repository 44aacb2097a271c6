//! File analysis pipeline for number-stats.
//!
//! Validates the source identifier, loads the numbers, runs the
//! [`SequenceAnalyzer`] and returns an [`AnalysisRun`] with timing metadata.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use stats_core::error::{Result, StatsError};
use stats_core::formatting::format_elapsed;
use stats_core::models::{AnalysisMetadata, AnalysisReport, AnalysisResult};
use stats_core::rounding::RoundingMode;
use tracing::info;

use crate::analyzer::SequenceAnalyzer;
use crate::reader::load_numbers;

// ── Public types ──────────────────────────────────────────────────────────────

/// The complete output of [`FileAnalyzer::analyze_file`].
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub result: AnalysisResult,
    pub metadata: AnalysisMetadata,
}

impl AnalysisRun {
    /// Flat key-value view of the result.
    pub fn report(&self) -> AnalysisReport {
        self.result.to_report()
    }

    /// Report as a JSON value, optionally with a `metadata` object attached.
    pub fn to_json(&self, with_metadata: bool) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(self.report())?;
        if with_metadata {
            if let serde_json::Value::Object(map) = &mut value {
                map.insert(
                    "metadata".to_string(),
                    serde_json::to_value(&self.metadata)?,
                );
            }
        }
        Ok(value)
    }
}

/// Analyses the integers stored in one file.
#[derive(Debug, Clone)]
pub struct FileAnalyzer {
    path: PathBuf,
    analyzer: SequenceAnalyzer,
}

impl FileAnalyzer {
    /// Create an analyzer for `path`.
    ///
    /// Fails with [`StatsError::InvalidConfiguration`] when the path is empty
    /// or whitespace only. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(StatsError::InvalidConfiguration(
                "File path can't be blank".to_string(),
            ));
        }

        info!("FileAnalyzer created for {}", path.display());
        Ok(Self {
            path,
            analyzer: SequenceAnalyzer::default(),
        })
    }

    /// Use `mode` when rounding the average and median.
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.analyzer = SequenceAnalyzer::new(mode);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rounding(&self) -> RoundingMode {
        self.analyzer.rounding()
    }

    /// Load the file and analyse it.
    ///
    /// Load failures are logged by the reader and surface here as an empty
    /// result; callers must check [`AnalysisResult::is_empty`].
    pub fn analyze_file(&self) -> AnalysisRun {
        info!("Starting analysis.");
        let start = Instant::now();

        let numbers = load_numbers(&self.path);
        let entries_processed = numbers.len();
        let result = self.analyzer.analyze(numbers);

        let elapsed = start.elapsed();
        if !result.is_empty() {
            info!("Analysis completed in {}.", format_elapsed(elapsed));
        }

        AnalysisRun {
            result,
            metadata: AnalysisMetadata {
                source: self.path.display().to_string(),
                generated_at: Utc::now().to_rfc3339(),
                entries_processed,
                elapsed_seconds: elapsed.as_secs_f64(),
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
