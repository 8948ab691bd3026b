//! Statistical summaries for streaming data
//!
//! This module provides single-pass statistics over a stream of scalar
//! samples, computed with constant memory.
//!
//! # Example
//!
//! ```
//! use scalarstats::statistics::RunningNorm;
//!
//! let mut norm = RunningNorm::new();
//!
//! for sample in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     norm.add(sample);
//! }
//!
//! println!("Mean: {:?}", norm.mean());
//! println!("Two-norm: {:?}", norm.two_norm());
//! println!("Min: {:?}", norm.min());
//! println!("Max: {:?}", norm.max());
//! ```

mod norms;

pub use norms::RunningNorm;
