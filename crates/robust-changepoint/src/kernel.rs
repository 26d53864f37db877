//! Empirical-CDF kernel for nonparametric segment costs
//!
//! For `k` quantile thresholds picked from the sorted observations, the kernel
//! stores one prefix-count row of length `n + 1`. Entry `tau` of row `i` is
//! twice the number of observations among the first `tau` that fall below the
//! threshold, plus the number that sit on it. Differences of two entries give
//! the below-or-at proportion of any segment in O(1), without touching the
//! floating-point data again.

use robust_core::{utils, Error, Result};

/// Absolute tolerance for treating an observation as equal to a threshold
pub const TIE_TOLERANCE: f64 = 1e-15;

/// Smallest sequence the kernel can summarize
pub const MIN_SUMMARY_LEN: usize = 2;

/// Number of quantile levels used for a sequence of length `n`
///
/// `min(n, ceil(4 ln n))`, which is at least 1 for every `n >= 2`.
pub fn quantile_count(n: usize) -> usize {
    // ln(0) is -inf; the clamp keeps the cast defined
    let k = (4.0 * (n as f64).ln()).ceil().max(0.0) as usize;
    k.min(n)
}

/// Probability level of quantile row `i` out of `k` for a sequence of length `n`
///
/// A logistic warp of the uniform grid `z = -1 + (2i + 1) / k`, concentrating
/// levels away from the extremes: `p = 1 / (1 + (2n - 1)^(-z))`.
pub fn quantile_level(i: usize, k: usize, n: usize) -> f64 {
    let z = -1.0 + (2.0 * i as f64 + 1.0) / k as f64;
    1.0 / (1.0 + (2.0 * n as f64 - 1.0).powf(-z))
}

/// Multi-quantile prefix-count summary of a sequence
#[derive(Debug, Clone)]
pub struct EmpiricalCdf {
    /// `k` rows of `n + 1` counts, row-major
    table: Vec<usize>,
    thresholds: Vec<f64>,
    n: usize,
    /// `-ln(2n - 1)`, shared by every segment cost of the run
    log_scale: f64,
}

impl EmpiricalCdf {
    /// Build the summary for `data`
    ///
    /// The input is not modified; thresholds come from a sorted private copy.
    pub fn new(data: &[f64]) -> Result<Self> {
        let n = data.len();
        if n < MIN_SUMMARY_LEN {
            return Err(Error::InsufficientData {
                expected: MIN_SUMMARY_LEN,
                actual: n,
            });
        }

        let k = quantile_count(n);
        let sorted = utils::sorted(data);
        let stride = n + 1;
        let mut table = vec![0usize; k * stride];
        let mut thresholds = Vec::with_capacity(k);

        for (i, row) in table.chunks_exact_mut(stride).enumerate() {
            let threshold = utils::order_statistic(&sorted, quantile_level(i, k, n));
            thresholds.push(threshold);

            for (tau, &x) in data.iter().enumerate() {
                row[tau + 1] = row[tau] + Self::weight(x, threshold);
            }
        }

        Ok(Self {
            table,
            thresholds,
            n,
            log_scale: -(2.0 * n as f64 - 1.0).ln(),
        })
    }

    /// 2 below the threshold, 1 on it, 0 above.
    ///
    /// The tie test runs first so a value just under the threshold but within
    /// tolerance counts once, keeping every segment proportion in `[0, 1]`.
    #[inline]
    fn weight(x: f64, threshold: f64) -> usize {
        if (x - threshold).abs() < TIE_TOLERANCE {
            1
        } else if x < threshold {
            2
        } else {
            0
        }
    }

    /// Length of the summarized sequence
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of quantile rows `k`
    pub fn quantile_count(&self) -> usize {
        self.thresholds.len()
    }

    /// Threshold value of each row; every one is an observed value
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Prefix counts of row `i`, `n + 1` entries starting at 0
    pub fn row(&self, i: usize) -> &[usize] {
        let stride = self.n + 1;
        &self.table[i * stride..(i + 1) * stride]
    }

    pub(crate) fn rows(&self) -> std::slice::ChunksExact<'_, usize> {
        self.table.chunks_exact(self.n + 1)
    }

    /// `-ln(2n - 1)`
    pub fn log_scale(&self) -> f64 {
        self.log_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantile_count() {
        assert_eq!(quantile_count(0), 0);
        assert_eq!(quantile_count(1), 0);
        assert_eq!(quantile_count(2), 2);
        assert_eq!(quantile_count(3), 3);
        // ceil(4 ln 10) = ceil(9.21) = 10
        assert_eq!(quantile_count(10), 10);
        // ceil(4 ln 100) = ceil(18.42) = 19
        assert_eq!(quantile_count(100), 19);
        assert_eq!(quantile_count(1000), 28);
    }

    #[test]
    fn test_quantile_levels_are_symmetric() {
        let n = 100;
        let k = quantile_count(n);
        for i in 0..k {
            let p = quantile_level(i, k, n);
            let mirrored = quantile_level(k - 1 - i, k, n);
            assert!(p > 0.0 && p < 1.0);
            assert_relative_eq!(p + mirrored, 1.0, epsilon = 1e-12);
        }
        // Middle row of an odd grid sits exactly at the median level
        assert_relative_eq!(quantile_level(9, 19, n), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_too_short() {
        let err = EmpiricalCdf::new(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData { expected: 2, actual: 1 }
        ));
        assert!(EmpiricalCdf::new(&[]).is_err());
    }

    #[test]
    fn test_table_shape_and_monotonicity() {
        let data = [3.0, -1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0];
        let summary = EmpiricalCdf::new(&data).unwrap();
        assert_eq!(summary.len(), data.len());
        assert_eq!(summary.quantile_count(), quantile_count(data.len()));

        for i in 0..summary.quantile_count() {
            let row = summary.row(i);
            assert_eq!(row.len(), data.len() + 1);
            assert_eq!(row[0], 0);
            assert!(row.windows(2).all(|w| w[0] <= w[1] && w[1] - w[0] <= 2));
        }
        assert!(summary.thresholds().iter().all(|t| data.contains(t)));
    }

    #[test]
    fn test_counts_below_and_at_threshold() {
        let data = [1.0, 2.0, 3.0, 2.0, 1.0];
        let summary = EmpiricalCdf::new(&data).unwrap();
        for (i, &t) in summary.thresholds().iter().enumerate() {
            let expected: usize = data
                .iter()
                .map(|&x| if x == t { 1 } else if x < t { 2 } else { 0 })
                .sum();
            assert_eq!(summary.row(i)[data.len()], expected, "threshold {t}");
        }
    }

    #[test]
    fn test_tie_tolerance_counts_once() {
        assert_eq!(EmpiricalCdf::weight(1.0, 1.0), 1);
        assert_eq!(EmpiricalCdf::weight(0.0, 1e-16), 1);
        assert_eq!(EmpiricalCdf::weight(0.5, 1.0), 2);
        assert_eq!(EmpiricalCdf::weight(1.5, 1.0), 0);
    }

    #[test]
    fn test_input_not_mutated() {
        let data = vec![5.0, 1.0, 3.0];
        let copy = data.clone();
        let _ = EmpiricalCdf::new(&data).unwrap();
        assert_eq!(data, copy);
    }

    #[test]
    fn test_log_scale() {
        let summary = EmpiricalCdf::new(&[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(summary.log_scale(), -(7.0f64).ln());
    }
}
