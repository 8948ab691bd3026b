//! Fuzzy comparison under an explicit absolute tolerance

use crate::math;
use crate::rounding;

/// Tolerance installed by [`Fuzzy::default`]
pub const DEFAULT_TOLERANCE: f64 = 1.0e-9;

/// Error for an invalid comparison tolerance
///
/// A tolerance must be finite and non-negative. Neither failure mode is
/// silently repaired: a negative tolerance would make every comparison
/// "unequal" and a NaN tolerance would make every comparison false, both of
/// which hide caller bugs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    /// Tolerance was negative
    Negative(f64),
    /// Tolerance was NaN or infinite
    NotFinite(f64),
}

impl core::fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ToleranceError::Negative(t) => write!(f, "negative tolerance: {}", t),
            ToleranceError::NotFinite(t) => write!(f, "non-finite tolerance: {}", t),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToleranceError {}

/// Comparator that treats values within an absolute tolerance as equal
///
/// The tolerance is an explicit value carried by the comparator rather than
/// process-wide state: construct one `Fuzzy` and reuse it (it is `Copy`).
/// "Set once, consult from many call sites" still works — hand the same
/// comparator around — without the data race a mutable global would invite.
///
/// Two values are equal when `|a - b| <= tolerance`. The comparison is
/// absolute at every magnitude; callers working far from unit scale should
/// size the tolerance to match their data. Equality is reflexive and
/// symmetric for every valid tolerance, and a zero tolerance degenerates to
/// exact comparison.
///
/// The ordering predicates treat the tolerance band as equality: `lt(a, b)`
/// holds only when `a` is below `b` by more than the tolerance, and
/// `le(a, b)` accepts anything not fuzzily greater. For any pair, exactly
/// one of `lt`, `eq`, `gt` holds.
///
/// # Example
///
/// ```
/// use scalarstats::comparison::Fuzzy;
///
/// let mut fuzzy = Fuzzy::default();
/// fuzzy.set_tolerance(1.0e-9).unwrap();
///
/// assert!(fuzzy.eq(1.0, 1.0 + 5.0e-10));
/// assert!(fuzzy.le(1.0 + 5.0e-10, 1.0));
/// assert!(fuzzy.lt(1.0, 2.0));
/// assert!(fuzzy.is_integer(3.0 - 1.0e-12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fuzzy {
    tolerance: f64,
}

impl Default for Fuzzy {
    /// Comparator with [`DEFAULT_TOLERANCE`]
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Fuzzy {
    /// Create a comparator with the given absolute tolerance
    pub fn new(tolerance: f64) -> Result<Self, ToleranceError> {
        check_tolerance(tolerance)?;
        Ok(Self { tolerance })
    }

    /// Current tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Replace the tolerance
    ///
    /// Last write wins for all subsequent comparisons through this
    /// comparator. Rejects invalid tolerances, leaving the current one in
    /// place.
    pub fn set_tolerance(&mut self, tolerance: f64) -> Result<(), ToleranceError> {
        check_tolerance(tolerance)?;
        self.tolerance = tolerance;
        Ok(())
    }

    /// `a` and `b` differ by no more than the tolerance
    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        math::fabs(a - b) <= self.tolerance
    }

    /// `a` and `b` differ by more than the tolerance
    #[inline]
    pub fn ne(&self, a: f64, b: f64) -> bool {
        !self.eq(a, b)
    }

    /// `a` is below `b` by more than the tolerance
    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        b - a > self.tolerance
    }

    /// `a` is above `b` by more than the tolerance
    #[inline]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        a - b > self.tolerance
    }

    /// `a` is below `b`, or within tolerance of it
    #[inline]
    pub fn le(&self, a: f64, b: f64) -> bool {
        !self.gt(a, b)
    }

    /// `a` is above `b`, or within tolerance of it
    #[inline]
    pub fn ge(&self, a: f64, b: f64) -> bool {
        !self.lt(a, b)
    }

    /// `x` is within tolerance of some integer
    #[inline]
    pub fn is_integer(&self, x: f64) -> bool {
        self.eq(x, math::round(x))
    }

    /// Floor that snaps to a nearby integer first
    ///
    /// A value within tolerance of an integer is treated as exactly that
    /// integer before rounding, so a value just below a boundary floors to
    /// the boundary instead of one past it: `floor(3.0 - 1e-12) == 3` at
    /// tolerance 1e-9, where a plain floor yields 2.
    pub fn floor(&self, x: f64) -> i64 {
        if self.is_integer(x) {
            rounding::to_integer(x)
        } else {
            rounding::floor(x)
        }
    }

    /// Ceiling that snaps to a nearby integer first
    ///
    /// Mirror image of [`Fuzzy::floor`]: `ceiling(3.0 + 1e-12) == 3` at
    /// tolerance 1e-9, where a plain ceiling yields 4.
    pub fn ceiling(&self, x: f64) -> i64 {
        if self.is_integer(x) {
            rounding::to_integer(x)
        } else {
            rounding::ceiling(x)
        }
    }
}

fn check_tolerance(tolerance: f64) -> Result<(), ToleranceError> {
    if !tolerance.is_finite() {
        return Err(ToleranceError::NotFinite(tolerance));
    }
    if tolerance < 0.0 {
        return Err(ToleranceError::Negative(tolerance));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_near_unit_magnitude() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        assert!(fuzzy.eq(1.0, 1.0 + 5.0e-10));
        assert!(!fuzzy.eq(1.0, 1.0 + 1.0e-6));
        assert!(fuzzy.ne(1.0, 1.0 + 1.0e-6));
    }

    #[test]
    fn test_eq_reflexive_and_symmetric() {
        for tolerance in [0.0, 1.0e-12, 1.0e-9, 0.5] {
            let fuzzy = Fuzzy::new(tolerance).unwrap();
            for v in [-3.5, -1.0, 0.0, 0.25, 2.0, 1.0e6] {
                assert!(fuzzy.eq(v, v), "eq({}, {}) at tolerance {}", v, v, tolerance);
            }
            assert_eq!(fuzzy.eq(1.0, 1.25), fuzzy.eq(1.25, 1.0));
        }
    }

    #[test]
    fn test_absolute_at_any_magnitude() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        // A relative comparator at 1e-9 would accept a 1e-6 difference at
        // magnitude 1e6; absolute comparison rejects it.
        assert!(!fuzzy.eq(1.0e6, 1.0e6 + 1.0e-6));

        // And would reject a 1e-10 difference at magnitude 1e-12; absolute
        // comparison accepts it.
        assert!(fuzzy.eq(1.0e-12, 1.0e-12 + 1.0e-10));
    }

    #[test]
    fn test_ordering_band() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        assert!(fuzzy.lt(1.0, 2.0));
        assert!(fuzzy.gt(2.0, 1.0));
        assert!(!fuzzy.lt(1.0, 1.0 + 5.0e-10));
        assert!(fuzzy.le(1.0 + 5.0e-10, 1.0));
        assert!(fuzzy.ge(1.0, 1.0 + 5.0e-10));
    }

    #[test]
    fn test_exactly_one_of_lt_eq_gt() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();
        let values = [-2.0, 0.0, 1.0, 1.0 + 5.0e-10, 1.0 + 1.0e-6, 3.5];

        for &a in &values {
            for &b in &values {
                let classified =
                    fuzzy.lt(a, b) as u8 + fuzzy.eq(a, b) as u8 + fuzzy.gt(a, b) as u8;
                assert_eq!(classified, 1, "lt/eq/gt not exclusive for ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_is_integer() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        assert!(fuzzy.is_integer(2.0));
        assert!(fuzzy.is_integer(2.0 + 1.0e-12));
        assert!(fuzzy.is_integer(2.0 - 1.0e-12));
        assert!(fuzzy.is_integer(-7.0 + 1.0e-10));
        assert!(!fuzzy.is_integer(2.5));
        assert!(!fuzzy.is_integer(2.0 + 1.0e-6));
    }

    #[test]
    fn test_floor_ceiling_snap_to_boundary() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        assert_eq!(fuzzy.floor(2.0 + 1.0e-12), 2);
        assert_eq!(fuzzy.ceiling(2.0 - 1.0e-12), 2);

        // The unfavorable directions, where plain rounding crosses the
        // boundary
        assert_eq!(fuzzy.floor(3.0 - 1.0e-12), 3);
        assert_eq!(fuzzy.ceiling(3.0 + 1.0e-12), 3);
    }

    #[test]
    fn test_floor_ceiling_away_from_boundary() {
        let fuzzy = Fuzzy::new(1.0e-9).unwrap();

        assert_eq!(fuzzy.floor(2.5), 2);
        assert_eq!(fuzzy.ceiling(2.5), 3);
        assert_eq!(fuzzy.floor(-3.1), -4);
        assert_eq!(fuzzy.ceiling(-3.1), -3);
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        assert_eq!(Fuzzy::new(-1.0e-9), Err(ToleranceError::Negative(-1.0e-9)));
        assert!(matches!(
            Fuzzy::new(f64::NAN),
            Err(ToleranceError::NotFinite(_))
        ));
        assert!(matches!(
            Fuzzy::new(f64::INFINITY),
            Err(ToleranceError::NotFinite(_))
        ));

        let mut fuzzy = Fuzzy::new(1.0e-9).unwrap();
        assert!(fuzzy.set_tolerance(-0.5).is_err());
        // Rejected write leaves the previous tolerance in place
        assert_eq!(fuzzy.tolerance(), 1.0e-9);
    }

    #[test]
    fn test_zero_tolerance_is_exact() {
        let fuzzy = Fuzzy::new(0.0).unwrap();

        assert!(fuzzy.eq(1.0, 1.0));
        assert!(!fuzzy.eq(1.0, 1.0 + f64::EPSILON));
    }

    #[test]
    fn test_set_tolerance_idempotent() {
        let mut first = Fuzzy::default();
        first.set_tolerance(1.0e-9).unwrap();

        let mut second = first;
        second.set_tolerance(1.0e-9).unwrap();

        for (a, b) in [(1.0, 1.0 + 5.0e-10), (1.0, 1.0 + 1.0e-6), (2.0, 2.0)] {
            assert_eq!(first.eq(a, b), second.eq(a, b));
            assert_eq!(first.lt(a, b), second.lt(a, b));
        }
    }

    #[test]
    fn test_set_tolerance_last_write_wins() {
        let mut fuzzy = Fuzzy::new(1.0e-9).unwrap();
        assert!(!fuzzy.eq(1.0, 1.0001));

        fuzzy.set_tolerance(1.0e-3).unwrap();
        assert!(fuzzy.eq(1.0, 1.0001));
    }

    #[test]
    fn test_default_tolerance() {
        assert_eq!(Fuzzy::default().tolerance(), DEFAULT_TOLERANCE);
    }
}
