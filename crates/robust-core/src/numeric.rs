//! Generic numeric trait for observation sequences
//!
//! Detectors accept any of the supported numeric types and widen the
//! observations to `f64` once, before any statistics are computed.

use num_traits::Num;
use std::fmt::Debug;

/// Base trait for numeric types that can be used as observations
pub trait Numeric: Num + Copy + PartialOrd + Debug + Send + Sync {
    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;

    /// Convert to f64 (for operations that need f64)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for i32 {
    fn is_finite(&self) -> bool {
        true // Integers are always finite
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for u32 {
    fn is_finite(&self) -> bool {
        true
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for i64 {
    fn is_finite(&self) -> bool {
        true
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for u64 {
    fn is_finite(&self) -> bool {
        true
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

/// Widen a slice of observations to `f64`
pub fn to_f64_vec<T: Numeric>(sample: &[T]) -> Vec<f64> {
    sample.iter().map(Numeric::to_f64).collect()
}
