//! Pruned Exact Linear Time search over segmentations
//!
//! Left-to-right dynamic program: `best_cost[t]` is the minimum penalized cost
//! of any segmentation of the first `t` observations, `prev_changepoint[t]` the
//! predecessor position achieving it. Only a live set of candidate
//! predecessors is scanned at each step; a candidate whose cost already
//! exceeds the step optimum by more than the penalty can never win later and
//! is dropped for good.

use crate::traits::SegmentCost;
use crate::types::SearchStatistics;
use robust_core::{utils, Error, Result};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Candidate sets below this size are always scored sequentially
#[cfg(feature = "parallel")]
const PARALLEL_MIN_CANDIDATES: usize = 64;

/// Settings for one search run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Cost charged per changepoint
    pub penalty: f64,
    /// Minimum number of observations per segment
    pub min_distance: usize,
    /// Drop candidates that can no longer be optimal
    pub pruning: bool,
}

/// Outcome of a search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Ascending changepoint positions, each the first index of a new segment
    pub changepoints: Vec<usize>,
    /// Minimum penalized cost of the full sequence, `best_cost[n]`
    pub total_cost: f64,
    pub statistics: SearchStatistics,
}

/// Run the pruned dynamic program over `cost`
///
/// # Errors
///
/// - [`Error::InvalidParameter`] when `min_distance` is outside `1..=n`
/// - [`Error::Computation`] when a segment cost is not finite
pub fn pruned_search<C>(cost: &C, config: &SearchConfig) -> Result<SearchOutcome>
where
    C: SegmentCost + ?Sized,
{
    let n = cost.len();
    let min_distance = config.min_distance;
    let penalty = config.penalty;

    if min_distance < 1 || min_distance > n {
        return Err(Error::out_of_range(
            "min_distance",
            min_distance,
            &format!("1..={n}"),
        ));
    }

    let mut statistics = SearchStatistics::default();
    let mut best_cost = vec![f64::NAN; n + 1];
    let mut prev_changepoint = vec![0usize; n + 1];

    best_cost[0] = -penalty;
    // Prefixes shorter than two minimum segments hold no interior boundary
    for tau in min_distance..(2 * min_distance).min(n + 1) {
        best_cost[tau] = checked_cost(cost, 0, tau)?;
        statistics.cost_evaluations += 1;
    }

    let mut candidates: Vec<usize> = Vec::with_capacity(n + 1);
    candidates.extend([0, min_distance]);
    let mut candidate_costs: Vec<f64> = Vec::with_capacity(n + 1);

    for current_tau in (2 * min_distance)..=n {
        score_candidates(
            cost,
            &best_cost,
            &candidates,
            current_tau,
            penalty,
            &mut candidate_costs,
        );
        statistics.cost_evaluations += candidates.len();
        statistics.peak_candidates = statistics.peak_candidates.max(candidates.len());

        if let Some(position) = candidate_costs.iter().position(|c| !c.is_finite()) {
            return Err(Error::Computation(format!(
                "non-finite segment cost at [{}, {current_tau})",
                candidates[position]
            )));
        }

        // First occurrence wins exact ties: candidates sit in admission order
        let best_index = utils::first_argmin(&candidate_costs)
            .ok_or_else(|| Error::Computation("empty candidate set".to_string()))?;
        let step_best = candidate_costs[best_index];
        best_cost[current_tau] = step_best;
        prev_changepoint[current_tau] = candidates[best_index];

        let live = candidates.len();
        if config.pruning {
            let bound = step_best + penalty;
            let mut index = 0;
            candidates.retain(|_| {
                let keep = candidate_costs[index] < bound;
                index += 1;
                keep
            });
            statistics.candidates_pruned += live - candidates.len();
        }

        if live < n {
            candidates.push(current_tau + 1 - min_distance);
        }

        trace!(
            current_tau,
            best_prev = prev_changepoint[current_tau],
            live,
            kept = candidates.len(),
            "search step"
        );
    }

    Ok(SearchOutcome {
        changepoints: backtrack(&prev_changepoint, n),
        total_cost: best_cost[n],
        statistics,
    })
}

fn checked_cost<C: SegmentCost + ?Sized>(cost: &C, tau1: usize, tau2: usize) -> Result<f64> {
    let value = cost.segment_cost(tau1, tau2);
    if !value.is_finite() {
        return Err(Error::Computation(format!(
            "non-finite segment cost at [{tau1}, {tau2}): {value}"
        )));
    }
    Ok(value)
}

/// `best_cost[prev] + cost(prev, current_tau) + penalty` for every candidate,
/// written to `out` in candidate order
#[cfg(not(feature = "parallel"))]
fn score_candidates<C: SegmentCost + ?Sized>(
    cost: &C,
    best_cost: &[f64],
    candidates: &[usize],
    current_tau: usize,
    penalty: f64,
    out: &mut Vec<f64>,
) {
    out.clear();
    out.extend(
        candidates
            .iter()
            .map(|&prev| best_cost[prev] + cost.segment_cost(prev, current_tau) + penalty),
    );
}

#[cfg(feature = "parallel")]
fn score_candidates<C: SegmentCost + ?Sized>(
    cost: &C,
    best_cost: &[f64],
    candidates: &[usize],
    current_tau: usize,
    penalty: f64,
    out: &mut Vec<f64>,
) {
    let score = |&prev: &usize| best_cost[prev] + cost.segment_cost(prev, current_tau) + penalty;
    if candidates.len() < PARALLEL_MIN_CANDIDATES {
        out.clear();
        out.extend(candidates.iter().map(score));
    } else {
        // Indexed collect keeps candidate order, so tie-breaking is unchanged
        candidates.par_iter().map(score).collect_into_vec(out);
    }
}

/// Walk predecessors back from `n`, returning ascending positions
fn backtrack(prev_changepoint: &[usize], n: usize) -> Vec<usize> {
    let mut changepoints = Vec::new();
    let mut cursor = prev_changepoint[n];
    while cursor != 0 {
        assert!(
            prev_changepoint[cursor] < cursor,
            "predecessor {} of position {cursor} does not precede it",
            prev_changepoint[cursor]
        );
        changepoints.push(cursor);
        cursor = prev_changepoint[cursor];
    }
    changepoints.reverse();
    changepoints
}
