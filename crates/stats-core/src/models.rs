use serde::{Deserialize, Serialize};

/// Ordered list of integers as read from the source, file order preserved.
pub type NumberSequence = Vec<i64>;

/// Statistics for a non-empty sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Largest value.
    pub max: i64,
    /// Smallest value.
    pub min: i64,
    /// Sum of all values, widened so it cannot overflow.
    pub sum: i128,
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean rounded to one decimal place.
    pub average: f64,
    /// Median rounded to one decimal place.
    pub median: f64,
    /// First longest contiguous strictly increasing run.
    pub longest_increasing: Vec<i64>,
    /// First longest contiguous strictly decreasing run.
    pub longest_decreasing: Vec<i64>,
}

/// Outcome of analysing one sequence.
///
/// Either every statistic is present or none is: an empty input produces
/// [`AnalysisResult::empty`] and all accessors return `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult {
    summary: Option<Summary>,
}

impl AnalysisResult {
    /// Result for an empty sequence.
    pub fn empty() -> Self {
        Self { summary: None }
    }

    /// Result wrapping computed statistics.
    pub fn from_summary(summary: Summary) -> Self {
        Self {
            summary: Some(summary),
        }
    }

    /// `true` when there was no data to analyse.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn max(&self) -> Option<i64> {
        self.summary.as_ref().map(|s| s.max)
    }

    pub fn min(&self) -> Option<i64> {
        self.summary.as_ref().map(|s| s.min)
    }

    pub fn sum(&self) -> Option<i128> {
        self.summary.as_ref().map(|s| s.sum)
    }

    /// Number of values analysed; `0` for an empty result.
    pub fn count(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.count)
    }

    pub fn average(&self) -> Option<f64> {
        self.summary.as_ref().map(|s| s.average)
    }

    pub fn median(&self) -> Option<f64> {
        self.summary.as_ref().map(|s| s.median)
    }

    pub fn longest_increasing(&self) -> Option<&[i64]> {
        self.summary.as_ref().map(|s| s.longest_increasing.as_slice())
    }

    pub fn longest_decreasing(&self) -> Option<&[i64]> {
        self.summary.as_ref().map(|s| s.longest_decreasing.as_slice())
    }

    /// Flatten into the key-value shape used for serialized output.
    pub fn to_report(&self) -> AnalysisReport {
        match &self.summary {
            Some(s) => AnalysisReport {
                max: Some(s.max),
                min: Some(s.min),
                avg: Some(s.average),
                median: Some(s.median),
                longest_increasing_sequence: Some(s.longest_increasing.clone()),
                longest_decreasing_sequence: Some(s.longest_decreasing.clone()),
            },
            None => AnalysisReport::default(),
        }
    }
}

/// Flat key-value view of an [`AnalysisResult`]; unset fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub max: Option<i64>,
    pub min: Option<i64>,
    pub avg: Option<f64>,
    pub median: Option<f64>,
    pub longest_increasing_sequence: Option<Vec<i64>>,
    pub longest_decreasing_sequence: Option<Vec<i64>>,
}

/// Metadata produced alongside an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Identifier of the analysed source.
    pub source: String,
    /// RFC 3339 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of values loaded from the source.
    pub entries_processed: usize,
    /// Wall-clock seconds spent loading and analysing.
    pub elapsed_seconds: f64,
}
