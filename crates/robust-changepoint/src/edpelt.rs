//! ED-PELT: nonparametric multiple changepoint detection
//!
//! Combines the empirical-CDF kernel, its segment cost and the pruned search.
//! The defaults reproduce the reference algorithm: penalty `3 ln n`, minimum
//! segment length 1, pruning enabled. Changing the penalty or the minimum
//! distance changes the statistical sensitivity of the detector, not just its
//! speed. Disabling pruning leaves results unchanged and only costs time.

use crate::kernel::EmpiricalCdf;
use crate::search::{pruned_search, SearchConfig};
use crate::traits::{ChangePointDetectorProperties, ConfigurableDetector, SimpleDetector};
use crate::types::ChangePointResult;
use robust_core::{to_f64_vec, utils, Error, Numeric, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Inputs of this length or shorter never contain a changepoint
pub const SHORT_CIRCUIT_LEN: usize = 2;

/// Per-changepoint penalty rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Penalty {
    /// `multiplier * ln(n)`
    LogN { multiplier: f64 },
    /// A constant penalty independent of `n`
    Fixed(f64),
}

impl Penalty {
    /// Penalty value for a sequence of length `n`
    pub fn resolve(&self, n: usize) -> f64 {
        match *self {
            Penalty::LogN { multiplier } => multiplier * (n as f64).ln(),
            Penalty::Fixed(value) => value,
        }
    }

    fn validate(&self) -> Result<()> {
        let value = match *self {
            Penalty::LogN { multiplier } => multiplier,
            Penalty::Fixed(value) => value,
        };
        if !value.is_finite() || value < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "penalty must be finite and non-negative, got {self:?}"
            )));
        }
        Ok(())
    }
}

impl Default for Penalty {
    fn default() -> Self {
        Penalty::LogN { multiplier: 3.0 }
    }
}

/// ED-PELT parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdPeltParameters {
    /// Cost charged per changepoint
    pub penalty: Penalty,
    /// Minimum number of observations per segment, in `1..=n`
    pub min_distance: usize,
    /// Prune candidates that can no longer be optimal
    pub pruning: bool,
}

impl Default for EdPeltParameters {
    fn default() -> Self {
        Self {
            penalty: Penalty::default(),
            min_distance: 1,
            pruning: true,
        }
    }
}

impl EdPeltParameters {
    /// Check the parameters against a sequence of length `n`
    pub fn validate(&self, n: usize) -> Result<()> {
        self.penalty.validate()?;
        if self.min_distance < 1 || self.min_distance > n {
            return Err(Error::out_of_range(
                "min_distance",
                self.min_distance,
                &format!("1..={n}"),
            ));
        }
        Ok(())
    }
}

/// ED-PELT changepoint detector
#[derive(Debug, Clone, Default)]
pub struct EdPeltDetector {
    params: EdPeltParameters,
}

impl EdPeltDetector {
    /// Create a detector with the default parameters
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_penalty(mut self, penalty: Penalty) -> Self {
        self.params.penalty = penalty;
        self
    }

    pub fn with_min_distance(mut self, min_distance: usize) -> Self {
        self.params.min_distance = min_distance;
        self
    }

    /// Enable or disable candidate pruning
    ///
    /// Pruning never changes the detected changepoints; disabling it makes
    /// the search quadratic and is meant for verification.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.params.pruning = pruning;
        self
    }

    /// Detect changepoints in finite `f64` observations
    #[instrument(skip_all, fields(n = data.len()))]
    pub fn detect_f64(&self, data: &[f64]) -> Result<ChangePointResult> {
        let n = data.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if n <= SHORT_CIRCUIT_LEN {
            debug!("sequence too short for an interior boundary");
            return Ok(ChangePointResult::short_circuit(
                self.algorithm_name().to_string(),
                n,
            ));
        }
        utils::ensure_finite(data, "input data")?;
        self.params.validate(n)?;

        let penalty = self.params.penalty.resolve(n);
        let summary = EmpiricalCdf::new(data)?;
        debug!(
            penalty,
            quantiles = summary.quantile_count(),
            min_distance = self.params.min_distance,
            "empirical-CDF summary built"
        );

        let outcome = pruned_search(
            &summary,
            &SearchConfig {
                penalty,
                min_distance: self.params.min_distance,
                pruning: self.params.pruning,
            },
        )?;
        debug!(
            changepoints = outcome.changepoints.len(),
            total_cost = outcome.total_cost,
            cost_evaluations = outcome.statistics.cost_evaluations,
            candidates_pruned = outcome.statistics.candidates_pruned,
            peak_candidates = outcome.statistics.peak_candidates,
            "search complete"
        );

        Ok(ChangePointResult::new(
            outcome.changepoints,
            self.algorithm_name().to_string(),
            n,
            penalty,
            summary.quantile_count(),
            Some(outcome.total_cost),
            outcome.statistics,
        ))
    }
}

impl ChangePointDetectorProperties for EdPeltDetector {
    fn algorithm_name(&self) -> &'static str {
        "ED-PELT"
    }

    fn minimum_sample_size(&self) -> usize {
        SHORT_CIRCUIT_LEN + 1
    }
}

impl<T: Numeric> SimpleDetector<T> for EdPeltDetector {
    fn detect_simple(&self, sample: &[T]) -> Result<ChangePointResult> {
        self.detect_f64(&to_f64_vec(sample))
    }
}

impl ConfigurableDetector for EdPeltDetector {
    type Parameters = EdPeltParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self { params }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}
