//! Error types for robust changepoint analysis
//!
//! Provides a unified error type for all robust-edpelt crates.

use thiserror::Error;

/// Core error type for changepoint operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function (configuration error)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data, such as missing or non-finite observations
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Zero-length input. Distinct from "no changepoints found".
    #[error("Empty input: no observations to analyze")]
    EmptyInput,

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a missing (NULL) observation
    pub fn missing_value(position: usize) -> Self {
        Self::InvalidInput(format!(
            "NULL values not supported in input array (position {position})"
        ))
    }

    /// Create an error for a parameter outside its allowed range
    pub fn out_of_range(name: &str, value: impl std::fmt::Display, range: &str) -> Self {
        Self::InvalidParameter(format!("{name} should be in range {range}, got {value}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
