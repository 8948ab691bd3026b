//! # Scalarstats
//!
//! Single-pass scalar statistics and numeric comparison utilities for Rust.
//!
//! Scalarstats provides small, allocation-free building blocks for numeric
//! code that consumes scalars one at a time: integer rounding with explicit
//! direction, running statistics over a sample stream, and floating-point
//! comparison under an explicit tolerance.
//!
//! ## Features
//!
//! - **Integer Rounding**: nearest (ties away from zero), floor, and ceiling
//!   conversion to `i64` with documented non-finite behavior
//! - **Running Statistics**: mean, Euclidean/RMS/infinity norms, variance,
//!   and extrema in a single pass with O(1) memory
//! - **Fuzzy Comparison**: equality, ordering, and integer rounding that
//!   tolerate a bounded absolute difference
//! - **Full Mergeability**: accumulators combine partial aggregates computed
//!   on separate workers
//!
//! ## Quick Start
//!
//! ```rust
//! use scalarstats::statistics::RunningNorm;
//!
//! let mut norm = RunningNorm::new();
//! for sample in [-2.0, 1.0, 3.0] {
//!     norm.add(sample);
//! }
//!
//! let mean = norm.mean().unwrap();
//! assert!((mean - 2.0 / 3.0).abs() < 1e-12);
//! assert_eq!(norm.max(), Some(3.0));
//! ```
//!
//! ## Tolerance-Aware Comparison
//!
//! Exact `==` on floating-point values is brittle; two computations of the
//! same quantity routinely differ in the last few ulps. [`comparison::Fuzzy`]
//! carries an explicit absolute tolerance instead of hidden global state:
//!
//! ```rust
//! use scalarstats::comparison::Fuzzy;
//!
//! let fuzzy = Fuzzy::new(1.0e-9).unwrap();
//! assert!(fuzzy.eq(1.0, 1.0 + 5.0e-10));
//! assert!(!fuzzy.eq(1.0, 1.0 + 1.0e-6));
//! assert_eq!(fuzzy.floor(2.0 + 1.0e-12), 2);
//! ```
//!
//! ## Feature Flags
//!
//! Facility families (pick what you need):
//! - `rounding` (default): integer rounding helpers
//! - `statistics` (default): running-statistics accumulator
//! - `comparison` (default, implies `rounding`): fuzzy comparator
//! - `full`: enable all facility families
//!
//! Platform features:
//! - `std` (default): standard library support
//! - `libm`: math fallbacks, required for `no_std` builds
//! - `serde`: enable serialization of accumulator and comparator state

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "rounding", feature = "statistics"))]
mod math;

// Core traits always available
pub mod traits;

#[cfg(feature = "rounding")]
#[cfg_attr(docsrs, doc(cfg(feature = "rounding")))]
pub mod rounding;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "comparison")]
#[cfg_attr(docsrs, doc(cfg(feature = "comparison")))]
pub mod comparison;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::RunningNorm;

    #[cfg(feature = "comparison")]
    pub use crate::comparison::Fuzzy;
}

#[cfg(feature = "statistics")]
pub use statistics::RunningNorm;

#[cfg(feature = "comparison")]
pub use comparison::Fuzzy;
