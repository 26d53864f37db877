//! Nonparametric changepoint detection
//!
//! Facade over the workspace crates:
//!
//! - [`robust_core`]: shared error type, numeric trait and slice utilities
//! - [`robust_changepoint`]: the ED-PELT detector and its building blocks
//!
//! ```rust
//! use robust_edpelt::prelude::*;
//!
//! let data = [0.0, 0.0, 0.0, 10.0, 10.0, 10.0];
//! let result = EdPeltDetector::new().detect_simple(&data).unwrap();
//! assert_eq!(result.changepoints(), &[3]);
//! ```

pub use robust_changepoint;
pub use robust_core;

pub use robust_changepoint::{
    detect_changepoints, detect_nullable, ChangePointResult, EdPeltDetector, EdPeltParameters,
    Penalty,
};
pub use robust_core::{Error, Result};

/// Common imports
pub mod prelude {
    pub use robust_changepoint::{
        ChangePointDetectorProperties, ChangePointResult, ConfigurableDetector, EdPeltDetector,
        EdPeltParameters, Penalty, SimpleDetector,
    };
    pub use robust_core::prelude::*;
}
