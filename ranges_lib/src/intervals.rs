use crate::bounds::BoundsSpec;
use crate::scalars::Scalar;
use serde::{Deserialize, Serialize};

/// A range of values between two finite bounds, each of which is either
/// inclusive or exclusive.
///
/// No ordering is enforced between the two bounds: a range whose lower
/// bound is greater than its upper bound is simply empty.  Empty ranges
/// keep the bounds they were created with, so there are multiple
/// representations for them; see [`Interval::equivalent()`] to compare
/// the set of values rather than the representation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl<T> Interval<T> {
    /// Construct a range with explicit inclusivity for each bound
    pub fn new(
        lower: T,
        upper: T,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Self {
        Self {
            lower,
            upper,
            lower_inclusive,
            upper_inclusive,
        }
    }

    /// Construct a left-closed, right-open range (`[A,B)`)
    pub fn new_closed_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, false)
    }

    /// Construct a left-closed, right-closed range (`[A,B]`)
    pub fn new_closed_closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, true, true)
    }

    /// Construct a left-open, right-closed range (`(A,B]`)
    pub fn new_open_closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, false, true)
    }

    /// Construct a left-open, right-open range (`(A,B)`)
    pub fn new_open_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, false, false)
    }

    /// Construct a range from a bounds descriptor
    pub fn with_bounds(lower: T, upper: T, bounds: BoundsSpec) -> Self {
        Self::new(
            lower,
            upper,
            bounds.lower_inclusive(),
            bounds.upper_inclusive(),
        )
    }

    /// Whether the lower bound is part of the range.
    /// This is the stored flag, even for an empty range.
    pub fn lower_inclusive(&self) -> bool {
        self.lower_inclusive
    }

    /// Whether the upper bound is part of the range.
    /// This is the stored flag, even for an empty range.
    pub fn upper_inclusive(&self) -> bool {
        self.upper_inclusive
    }

    /// The bounds descriptor matching the two inclusivity flags
    pub fn bounds(&self) -> BoundsSpec {
        BoundsSpec::from_flags(self.lower_inclusive, self.upper_inclusive)
    }
}

impl<T: Copy> Interval<T> {
    /// Returns a range that contains a single value (`[value,value]`)
    pub fn new_single(value: T) -> Self {
        Self::new_closed_closed(value, value)
    }

    /// The lower bound.
    /// For an empty range, it returns whatever was used to create the
    /// range, it is never normalized.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// The upper bound.
    /// For an empty range, it returns whatever was used to create the
    /// range, it is never normalized.
    pub fn upper(&self) -> T {
        self.upper
    }
}

impl<T: Scalar> Interval<T> {
    /// The canonical empty range, the one produced by parsing `empty`:
    /// `(1,0)` with both bounds exclusive.
    #[must_use]
    pub fn empty() -> Self {
        Self::new_open_open(T::EMPTY_LOWER, T::EMPTY_UPPER)
    }
}

impl<T: Scalar> Default for Interval<T> {
    /// Returns the canonical empty range
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: PartialOrd> Interval<T> {
    /// True if the range contains no value.
    ///
    /// This is the case when the lower bound is greater than the upper
    /// bound, or when both are equal and at least one of them is
    /// exclusive.  Both comparisons are false for a NaN bound, so such a
    /// range is not empty.
    /// ```
    ///    use ranges_lib::Interval;
    ///    assert!(!Interval::new_closed_closed(5, 5).is_empty());
    ///    assert!(Interval::new_closed_open(5, 5).is_empty());
    ///    assert!(Interval::new_closed_closed(5, 3).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.lower > self.upper
            || (self.lower == self.upper
                && !(self.lower_inclusive && self.upper_inclusive))
    }

    /// True if self is of the form `[A,A]`
    pub fn is_single(&self) -> bool {
        self.lower_inclusive
            && self.upper_inclusive
            && self.lower == self.upper
    }

    /// Whether the two ranges contain the same set of values.  All empty
    /// ranges are equivalent, whatever their bounds; non-empty ranges are
    /// equivalent when their bounds are identical.
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else if other.is_empty() {
            false
        } else {
            self.lower == other.lower
                && self.upper == other.upper
                && self.lower_inclusive == other.lower_inclusive
                && self.upper_inclusive == other.upper_inclusive
        }
    }

    /// Whether value is contained in the range
    pub fn contains(&self, value: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        let above_lower = *value > self.lower
            || (*value == self.lower && self.lower_inclusive);
        let below_upper = *value < self.upper
            || (*value == self.upper && self.upper_inclusive);
        above_lower && below_upper
    }

    /// Whether the two ranges have at least one value in common.  Two
    /// ranges that only share a bound overlap only when both include it.
    /// ```text
    ///     [1,5) [5,10)    => false
    ///     [1,5] [5,10)    => true
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && !self.ends_before(other)
            && !other.ends_before(self)
    }

    /// Whether every value in self is strictly less than every value in
    /// other.  False if either range is empty.
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.ends_before(other)
    }

    /// Whether every value in self is strictly greater than every value in
    /// other.  False if either range is empty.
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        other.strictly_left_of(self)
    }

    /// Whether self contains all values of the second range (and possibly
    /// more).  An empty range is contained in every range.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let lower_ok = self.lower < other.lower
            || (self.lower == other.lower
                && (self.lower_inclusive || !other.lower_inclusive));
        let upper_ok = other.upper < self.upper
            || (other.upper == self.upper
                && (self.upper_inclusive || !other.upper_inclusive));
        lower_ok && upper_ok
    }

    /// True if no value of self can be found at or after the lower bound
    /// of other, ignoring emptiness.
    fn ends_before(&self, other: &Self) -> bool {
        self.upper < other.lower
            || (self.upper == other.lower
                && (!self.upper_inclusive || !other.lower_inclusive))
    }
}

/// Whether value is contained in range.  This is [`Interval::contains()`]
/// with the arguments swapped, matching the `value <@ range` notation.
pub fn contained_by<T: PartialOrd>(value: &T, range: &Interval<T>) -> bool {
    range.contains(value)
}
