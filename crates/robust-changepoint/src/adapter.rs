//! Boundary adapter for nullable inputs
//!
//! Host integrations (database functions, dataframe columns) hand over
//! sequences in which the whole array or individual entries may be missing.
//! This module turns those into detector calls:
//!
//! | Input                      | Outcome                          |
//! |----------------------------|----------------------------------|
//! | missing array              | `Ok(None)`                       |
//! | zero-length array          | `Ok(None)`                       |
//! | any missing element        | `Err(Error::InvalidInput)`       |
//! | any NaN / infinite element | `Err(Error::InvalidInput)`       |
//! | otherwise                  | `Ok(Some(changepoints))`         |
//!
//! An empty changepoint list (`Ok(Some(vec![]))`) means the sequence was
//! analyzed and no boundary paid for its penalty.

use crate::edpelt::EdPeltDetector;
use robust_core::{Error, Result};

/// Unwrap every element, failing on the first missing one
pub fn validate_observations(values: &[Option<f64>]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| value.ok_or_else(|| Error::missing_value(position)))
        .collect()
}

/// Detect changepoints with default parameters in a nullable sequence
pub fn detect_nullable(values: Option<&[Option<f64>]>) -> Result<Option<Vec<usize>>> {
    detect_nullable_with(&EdPeltDetector::default(), values)
}

/// Detect changepoints with `detector` in a nullable sequence
pub fn detect_nullable_with(
    detector: &EdPeltDetector,
    values: Option<&[Option<f64>]>,
) -> Result<Option<Vec<usize>>> {
    let Some(values) = values else {
        return Ok(None);
    };
    let data = validate_observations(values)?;
    detect_with(detector, &data)
}

/// Detect changepoints with default parameters
///
/// `Ok(None)` for empty input, `Ok(Some(vec![]))` for `n <= 2`.
///
/// # Examples
///
/// ```rust
/// use robust_changepoint::adapter::detect_changepoints;
///
/// let mut data = vec![0.0; 50];
/// data.extend(vec![100.0; 50]);
/// assert_eq!(detect_changepoints(&data).unwrap(), Some(vec![50]));
/// assert_eq!(detect_changepoints(&[]).unwrap(), None);
/// assert_eq!(detect_changepoints(&[1.0, 9.0]).unwrap(), Some(vec![]));
/// ```
pub fn detect_changepoints(data: &[f64]) -> Result<Option<Vec<usize>>> {
    detect_with(&EdPeltDetector::default(), data)
}

fn detect_with(detector: &EdPeltDetector, data: &[f64]) -> Result<Option<Vec<usize>>> {
    match detector.detect_f64(data) {
        Ok(result) => Ok(Some(result.into_changepoints())),
        Err(Error::EmptyInput) => Ok(None),
        Err(err) => Err(err),
    }
}
