//! Nonparametric segment cost over the empirical-CDF kernel
//!
//! For every quantile row the segment's below-or-at proportion `f` feeds a
//! Bernoulli log-likelihood `m * (f ln f + (1 - f) ln(1 - f))`, where `m` is
//! the segment length. Rows where the segment lies entirely on one side of the
//! threshold contribute nothing. The summed log-likelihood is scaled by
//! `2 c / k` with `c = -ln(2n - 1)`, giving a non-negative cost that only
//! matters relative to other segments of the same run.

use crate::kernel::EmpiricalCdf;
use crate::traits::SegmentCost;

impl SegmentCost for EmpiricalCdf {
    fn len(&self) -> usize {
        EmpiricalCdf::len(self)
    }

    fn segment_cost(&self, tau1: usize, tau2: usize) -> f64 {
        let n = EmpiricalCdf::len(self);
        assert!(
            tau1 < tau2 && tau2 <= n,
            "segment [{tau1}, {tau2}) outside 0..={n}"
        );

        let width = tau2 - tau1;
        let full = 2 * width;
        let mut sum = 0.0;

        for row in self.rows() {
            let actual = row[tau2] - row[tau1];
            if actual != 0 && actual != full {
                let fit = actual as f64 * 0.5 / width as f64;
                sum += width as f64 * (fit * fit.ln() + (1.0 - fit) * (1.0 - fit).ln());
            }
        }

        2.0 * self.log_scale() / self.quantile_count() as f64 * sum
    }
}
