//! Utility functions for working with data slices

use crate::{Error, Result};

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => std::cmp::Ordering::Equal,
            (true, false) => std::cmp::Ordering::Greater, // NaN goes after non-NaN
            (false, true) => std::cmp::Ordering::Less,
            (false, false) => a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal),
        }
    });
    sorted
}

/// Order statistic selected by a probability level
///
/// Returns `sorted[floor((n - 1) * p)]`, so the result is always one of the
/// stored values. `p` is clamped to `[0, 1]`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::order_statistic;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(order_statistic(&sorted, 0.5), 3.0);
/// assert_eq!(order_statistic(&sorted, 0.99), 4.0);
/// assert_eq!(order_statistic(&sorted, 1.0), 5.0);
/// ```
pub fn order_statistic(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "order statistic of an empty sample");
    let p = p.clamp(0.0, 1.0);
    let index = ((sorted.len() - 1) as f64 * p).floor() as usize;
    sorted[index.min(sorted.len() - 1)]
}

/// Index of the first minimum value
///
/// Exact ties resolve to the earliest position. Returns `None` for an
/// empty slice.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::first_argmin;
///
/// assert_eq!(first_argmin(&[3.0, 1.0, 2.0, 1.0]), Some(1));
/// assert_eq!(first_argmin(&[]), None);
/// ```
pub fn first_argmin(values: &[f64]) -> Option<usize> {
    let (first, rest) = values.split_first()?;
    let mut min_value = *first;
    let mut min_index = 0;
    for (i, &value) in rest.iter().enumerate() {
        if value < min_value {
            min_value = value;
            min_index = i + 1;
        }
    }
    Some(min_index)
}

/// Check that all values are finite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}
