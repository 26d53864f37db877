//! Types used for changepoint detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Bookkeeping collected while the pruned search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Number of segment-cost evaluations performed
    pub cost_evaluations: usize,
    /// Number of candidate predecessors discarded by pruning
    pub candidates_pruned: usize,
    /// Largest candidate-predecessor set seen during the search
    pub peak_candidates: usize,
}

/// Result of changepoint detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePointResult {
    /// Ascending, 0-based positions; each is the first index of a new segment
    changepoints: Vec<usize>,
    /// Algorithm used for detection
    algorithm: String,
    /// Total number of data points analyzed
    sample_size: usize,
    /// Per-changepoint penalty the search charged
    penalty: f64,
    /// Number of quantile levels in the empirical-CDF summary
    quantile_count: usize,
    /// Minimum penalized cost of the whole sequence, `None` when the
    /// search was short-circuited
    total_cost: Option<f64>,
    /// Search bookkeeping
    statistics: SearchStatistics,
}

impl ChangePointResult {
    /// Create a new changepoint result
    pub fn new(
        changepoints: Vec<usize>,
        algorithm: String,
        sample_size: usize,
        penalty: f64,
        quantile_count: usize,
        total_cost: Option<f64>,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            changepoints,
            algorithm,
            sample_size,
            penalty,
            quantile_count,
            total_cost,
            statistics,
        }
    }

    /// Result for input too short to hold an interior boundary
    pub fn short_circuit(algorithm: String, sample_size: usize) -> Self {
        Self::new(
            Vec::new(),
            algorithm,
            sample_size,
            0.0,
            0,
            None,
            SearchStatistics::default(),
        )
    }

    /// Get the detected changepoints
    pub fn changepoints(&self) -> &[usize] {
        &self.changepoints
    }

    /// Consume the result, keeping only the changepoint positions
    pub fn into_changepoints(self) -> Vec<usize> {
        self.changepoints
    }

    /// Get the number of detected changepoints
    pub fn count(&self) -> usize {
        self.changepoints.len()
    }

    /// Check if any changepoints were detected
    pub fn has_changepoints(&self) -> bool {
        !self.changepoints.is_empty()
    }

    /// Get the algorithm name used for detection
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the sample size that was analyzed
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    pub fn quantile_count(&self) -> usize {
        self.quantile_count
    }

    /// Minimum penalized cost found by the search
    pub fn total_cost(&self) -> Option<f64> {
        self.total_cost
    }

    /// Get the search statistics
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Half-open segments `[start, end)` covering `0..sample_size`
    ///
    /// Empty input yields no segments.
    pub fn segments(&self) -> Vec<Range<usize>> {
        if self.sample_size == 0 {
            return Vec::new();
        }
        let mut segments = Vec::with_capacity(self.changepoints.len() + 1);
        let mut start = 0;
        for &cp in &self.changepoints {
            segments.push(start..cp);
            start = cp;
        }
        segments.push(start..self.sample_size);
        segments
    }
}

impl fmt::Display for ChangePointResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ChangePoint Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Changepoints detected: {}", self.count())?;

        if !self.changepoints.is_empty() {
            writeln!(f, "  Detected changepoints: {:?}", self.changepoints)?;
        }
        if let Some(cost) = self.total_cost {
            writeln!(
                f,
                "  Penalized cost: {:.4} (penalty {:.4}, {} quantiles)",
                cost, self.penalty, self.quantile_count
            )?;
            writeln!(
                f,
                "  Search: {} cost evaluations, {} candidates pruned, peak {} candidates",
                self.statistics.cost_evaluations,
                self.statistics.candidates_pruned,
                self.statistics.peak_candidates
            )?;
        }

        Ok(())
    }
}
