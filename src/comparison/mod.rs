//! Tolerance-aware floating-point comparison
//!
//! Exact equality on floating-point values is brittle: two computations of
//! the same quantity routinely differ in the last few ulps. This module
//! compares values under an explicit absolute tolerance instead, and rounds
//! values that sit within tolerance of an integer boundary as if they were
//! exactly on it.
//!
//! # Example
//!
//! ```
//! use scalarstats::comparison::Fuzzy;
//!
//! let fuzzy = Fuzzy::new(1.0e-9).unwrap();
//!
//! assert!(fuzzy.eq(1.0, 1.0 + 5.0e-10));
//! assert!(!fuzzy.eq(1.0, 1.0 + 1.0e-6));
//! assert_eq!(fuzzy.floor(2.0 + 1.0e-12), 2);
//! assert_eq!(fuzzy.ceiling(2.0 - 1.0e-12), 2);
//! ```

mod fuzzy;

pub use fuzzy::{Fuzzy, ToleranceError, DEFAULT_TOLERANCE};
