//! Descriptive statistics over an in-memory integer sequence.
//!
//! Computes min/max/sum/count, the rounded average and median, and the
//! longest contiguous strictly increasing and strictly decreasing runs.

use std::ops::Range;

use stats_core::models::{AnalysisResult, NumberSequence, Summary};
use stats_core::rounding::{round_ratio_to_tenths, RoundingMode};
use tracing::{debug, warn};

// ── SequenceAnalyzer ──────────────────────────────────────────────────────────

/// Stateless analyzer; the only setting is the rounding policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceAnalyzer {
    rounding: RoundingMode,
}

impl SequenceAnalyzer {
    /// Create an analyzer that rounds with `rounding`.
    pub fn new(rounding: RoundingMode) -> Self {
        Self { rounding }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Analyse `numbers`, consuming them.
    ///
    /// An empty sequence logs a warning and yields [`AnalysisResult::empty`].
    pub fn analyze(&self, mut numbers: NumberSequence) -> AnalysisResult {
        if numbers.is_empty() {
            warn!("Analyzer received empty list");
            return AnalysisResult::empty();
        }

        let totals = Totals::scan(&numbers);
        let runs = find_longest_runs(&numbers);
        let longest_increasing = numbers[runs.increasing].to_vec();
        let longest_decreasing = numbers[runs.decreasing].to_vec();

        let count = numbers.len();
        let average = round_ratio_to_tenths(totals.sum, count as i128, self.rounding);

        // File order is no longer needed once the runs are copied out.
        numbers.sort_unstable();
        let median = sorted_median(&numbers, self.rounding);

        debug!(
            "Analyzed {} numbers: increasing run {}, decreasing run {}",
            count,
            longest_increasing.len(),
            longest_decreasing.len()
        );

        AnalysisResult::from_summary(Summary {
            max: totals.max,
            min: totals.min,
            sum: totals.sum,
            count,
            average,
            median,
            longest_increasing,
            longest_decreasing,
        })
    }
}

// ── Aggregates ────────────────────────────────────────────────────────────────

struct Totals {
    max: i64,
    min: i64,
    sum: i128,
}

impl Totals {
    /// Single linear pass over a non-empty slice.
    fn scan(numbers: &[i64]) -> Self {
        let first = numbers[0];
        numbers.iter().skip(1).fold(
            Totals {
                max: first,
                min: first,
                sum: i128::from(first),
            },
            |acc, &n| Totals {
                max: acc.max.max(n),
                min: acc.min.min(n),
                sum: acc.sum + i128::from(n),
            },
        )
    }
}

/// Median of a non-empty, ascending slice, rounded to one decimal place.
fn sorted_median(sorted: &[i64], mode: RoundingMode) -> f64 {
    let count = sorted.len();
    let mid = count / 2;
    if count % 2 != 0 {
        round_ratio_to_tenths(i128::from(sorted[mid]), 1, mode)
    } else {
        let pair = i128::from(sorted[mid - 1]) + i128::from(sorted[mid]);
        round_ratio_to_tenths(pair, 2, mode)
    }
}

// ── Longest monotonic runs ────────────────────────────────────────────────────

/// Index ranges of the longest strictly monotonic runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestRuns {
    pub increasing: Range<usize>,
    pub decreasing: Range<usize>,
}

/// Tracks the run currently being extended and the best run seen so far.
struct RunTracker {
    start: usize,
    best: Range<usize>,
}

impl RunTracker {
    fn new() -> Self {
        Self {
            start: 0,
            best: 0..0,
        }
    }

    /// Close the current run at `end` (exclusive) and start a new one there.
    /// Only a strictly longer run replaces the best, so the earliest wins ties.
    fn close(&mut self, end: usize) {
        if end - self.start > self.best.len() {
            self.best = self.start..end;
        }
        self.start = end;
    }
}

/// Find the first longest strictly increasing and strictly decreasing
/// contiguous runs in one forward pass.
///
/// Equal neighbours end both runs. An empty slice yields two empty ranges; a
/// single element yields `0..1` for both.
pub fn find_longest_runs(numbers: &[i64]) -> LongestRuns {
    let mut incr = RunTracker::new();
    let mut decr = RunTracker::new();

    for i in 1..numbers.len() {
        if numbers[i] <= numbers[i - 1] {
            incr.close(i);
        }
        if numbers[i] >= numbers[i - 1] {
            decr.close(i);
        }
    }

    // Runs reaching the last element are never closed inside the loop.
    incr.close(numbers.len());
    decr.close(numbers.len());

    LongestRuns {
        increasing: incr.best,
        decreasing: decr.best,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
