//! Core traits and types for robust changepoint analysis
//!
//! This crate provides the foundations shared by the detector crates:
//!
//! - a unified [`Error`] / [`Result`] pair used across the workspace
//! - the [`Numeric`] trait describing acceptable observation types
//! - small slice [`utils`] (sorted copies, order statistics, first-argmin)
//!
//! # Example
//!
//! ```rust
//! use robust_core::{utils, Numeric};
//!
//! let data = [3i32, 1, 2];
//! let widened: Vec<f64> = data.iter().map(Numeric::to_f64).collect();
//! let sorted = utils::sorted(&widened);
//! assert_eq!(utils::order_statistic(&sorted, 0.5), 2.0);
//! ```

pub mod error;
pub mod numeric;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

// Numeric traits
pub use numeric::{to_f64_vec, Numeric};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::{Numeric, Result};
}
