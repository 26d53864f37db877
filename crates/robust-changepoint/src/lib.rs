//! Robust changepoint detection
//!
//! This crate implements ED-PELT, a nonparametric multiple changepoint
//! detector. It makes no distributional assumptions: segments are compared
//! through their empirical distribution functions at a logarithmic number of
//! quantile levels, and the optimal penalized segmentation is found by a
//! pruned dynamic program.
//!
//! # Layers
//!
//! - [`kernel`]: the empirical-CDF summary, built once per sequence
//! - [`cost`]: nonparametric segment cost over that summary
//! - [`search`]: pruned exact search, generic over any [`SegmentCost`]
//! - [`edpelt`]: the detector tying the three together
//! - [`adapter`]: nullable-input boundary for host integrations
//!
//! ## Usage
//!
//! ```rust
//! use robust_changepoint::{EdPeltDetector, SimpleDetector};
//!
//! // Mean shift at index 50
//! let data: Vec<f64> = (0..100).map(|i| if i < 50 { 0.0 } else { 100.0 }).collect();
//!
//! let detector = EdPeltDetector::new();
//! let result = detector.detect_simple(&data).unwrap();
//!
//! assert_eq!(result.changepoints(), &[50]);
//! ```

pub mod adapter;
pub mod cost;
pub mod edpelt;
pub mod kernel;
pub mod search;
pub mod traits;
pub mod types;

pub use adapter::{detect_changepoints, detect_nullable, detect_nullable_with, validate_observations};
pub use edpelt::{EdPeltDetector, EdPeltParameters, Penalty};
pub use kernel::EmpiricalCdf;
pub use search::{pruned_search, SearchConfig, SearchOutcome};

pub use traits::{
    ChangePointDetectorProperties, ConfigurableDetector, SegmentCost, SimpleDetector,
};

pub use types::{ChangePointResult, SearchStatistics};
