//! Core traits for changepoint detection
//!
//! Detection is split along two seams:
//! - Detectors (this module): validate input, pick parameters, assemble results
//! - Segment costs ([`SegmentCost`]): score a candidate segment `[tau1, tau2)`
//!   so the pruned search can stay independent of the statistical model

use crate::types::ChangePointResult;
use robust_core::{Numeric, Result};

/// Properties of a changepoint detector that don't depend on the data
pub trait ChangePointDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Get the minimum sample size at which a changepoint can be reported
    fn minimum_sample_size(&self) -> usize;
}

/// Trait for detectors that need nothing beyond the observations
pub trait SimpleDetector<T: Numeric>: ChangePointDetectorProperties {
    /// Detect changepoints in the given sample
    fn detect_simple(&self, sample: &[T]) -> Result<ChangePointResult>;

    /// Process multiple independent samples with the same detector
    ///
    /// Default implementation processes sequentially and stops at the first error.
    fn detect_batch(&self, samples: &[&[T]]) -> Result<Vec<ChangePointResult>> {
        samples
            .iter()
            .map(|sample| self.detect_simple(sample))
            .collect()
    }
}

/// Parameter access for detectors
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}

/// Cost of a contiguous segment of a fixed-length sequence
///
/// Implementations must be pure: the same `(tau1, tau2)` always yields the
/// same value. The pruned search relies on costs being superadditive,
/// `cost(a, c) >= cost(a, b) + cost(b, c)`, for its pruning to be exact.
pub trait SegmentCost: Send + Sync {
    /// Length `n` of the underlying sequence
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cost of the half-open segment `[tau1, tau2)`
    ///
    /// # Panics
    ///
    /// Implementations panic unless `tau1 < tau2 <= len()`.
    fn segment_cost(&self, tau1: usize, tau2: usize) -> f64;

    /// Sum of segment costs plus `penalty` per changepoint
    ///
    /// `changepoints` must be strictly increasing positions inside `(0, len())`.
    fn segmentation_cost(&self, changepoints: &[usize], penalty: f64) -> f64 {
        let mut total = 0.0;
        let mut start = 0;
        for &cp in changepoints.iter().chain(std::iter::once(&self.len())) {
            total += self.segment_cost(start, cp);
            start = cp;
        }
        total + penalty * changepoints.len() as f64
    }
}
