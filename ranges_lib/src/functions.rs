//! The functions a query engine binds as SQL callables.
//!
//! Ranges cross the engine boundary as opaque payloads (see
//! [`Interval::encode()`]), so every function here takes and returns the binary
//! form.  They are generic over the domain: `make_range::<i32>` is
//! `int4range(lower, upper)`, `make_range::<f64>` is
//! `float8range(lower, upper)`, and so on.  Iterating over rows and
//! propagating NULLs is left to the engine.
//!
//! |Function                     |SQL                                 |
//! |-----------------------------|------------------------------------|
//! |[`make_range`]               |`int4range(1, 5)`                   |
//! |[`make_range_with_bounds`]   |`int4range(1, 5, '[]')`             |
//! |[`make_range_with_flags`]    |`int4range(1, 5, true, true)`       |
//! |[`make_range_from_literal`]  |`int4range('[1,5]')`                |
//! |[`range_to_text`]            |`r::VARCHAR`                        |
//! |[`text_to_range`]            |`'[1,5]'::INT4RANGE`                |
//! |[`range_overlaps`]           |`range_overlaps(a, b)`, `a && b`    |
//! |[`range_contains`]           |`range_contains(r, v)`, `r @> v`    |
//! |[`range_contained_by`]       |`range_contained_by(v, r)`, `v <@ r`|
//! |[`range_contains_range`]     |`a @> b`                            |
//! |[`range_before`]             |`a << b`                            |
//! |[`range_after`]              |`a >> b`                            |
//! |[`range_lower`]              |`lower(r)`                          |
//! |[`range_upper`]              |`upper(r)`                          |
//! |[`range_isempty`]            |`isempty(r)`                        |
//! |[`range_lower_inc`]          |`lower_inc(r)`                      |
//! |[`range_upper_inc`]          |`upper_inc(r)`                      |

use crate::bounds::BoundsSpec;
use crate::errors::RangeError;
use crate::intervals::Interval;
use crate::scalars::Scalar;

/// Construct a range with the default bounds `[)`
#[must_use]
pub fn make_range<T: Scalar>(lower: T, upper: T) -> Vec<u8> {
    Interval::new_closed_open(lower, upper).encode()
}

/// Construct a range from a bounds descriptor, one of `[)`, `[]`, `(]`
/// or `()`.  An empty descriptor selects `[)`.
pub fn make_range_with_bounds<T: Scalar>(
    lower: T,
    upper: T,
    bounds: &str,
) -> Result<Vec<u8>, RangeError> {
    let bounds = bounds.parse::<BoundsSpec>()?;
    Ok(Interval::with_bounds(lower, upper, bounds).encode())
}

#[must_use]
pub fn make_range_with_flags<T: Scalar>(
    lower: T,
    upper: T,
    lower_inclusive: bool,
    upper_inclusive: bool,
) -> Vec<u8> {
    Interval::new(lower, upper, lower_inclusive, upper_inclusive).encode()
}

pub fn make_range_from_literal<T: Scalar>(
    literal: &str,
) -> Result<Vec<u8>, RangeError> {
    Ok(Interval::<T>::parse(literal)?.encode())
}

/// Cast from text, same as [`make_range_from_literal`]
pub fn text_to_range<T: Scalar>(text: &str) -> Result<Vec<u8>, RangeError> {
    make_range_from_literal::<T>(text)
}

/// Cast to text
pub fn range_to_text<T: Scalar>(range: &[u8]) -> Result<String, RangeError> {
    Ok(Interval::<T>::decode(range)?.to_string())
}

pub fn range_overlaps<T: Scalar>(
    left: &[u8],
    right: &[u8],
) -> Result<bool, RangeError> {
    let left = Interval::<T>::decode(left)?;
    let right = Interval::<T>::decode(right)?;
    Ok(left.overlaps(&right))
}

pub fn range_contains<T: Scalar>(
    range: &[u8],
    value: T,
) -> Result<bool, RangeError> {
    Ok(Interval::<T>::decode(range)?.contains(&value))
}

pub fn range_contained_by<T: Scalar>(
    value: T,
    range: &[u8],
) -> Result<bool, RangeError> {
    range_contains(range, value)
}

pub fn range_contains_range<T: Scalar>(
    left: &[u8],
    right: &[u8],
) -> Result<bool, RangeError> {
    let left = Interval::<T>::decode(left)?;
    let right = Interval::<T>::decode(right)?;
    Ok(left.contains_interval(&right))
}

pub fn range_before<T: Scalar>(
    left: &[u8],
    right: &[u8],
) -> Result<bool, RangeError> {
    let left = Interval::<T>::decode(left)?;
    let right = Interval::<T>::decode(right)?;
    Ok(left.strictly_left_of(&right))
}

pub fn range_after<T: Scalar>(
    left: &[u8],
    right: &[u8],
) -> Result<bool, RangeError> {
    range_before::<T>(right, left)
}

pub fn range_lower<T: Scalar>(range: &[u8]) -> Result<T, RangeError> {
    Ok(Interval::<T>::decode(range)?.lower())
}

pub fn range_upper<T: Scalar>(range: &[u8]) -> Result<T, RangeError> {
    Ok(Interval::<T>::decode(range)?.upper())
}

pub fn range_isempty<T: Scalar>(range: &[u8]) -> Result<bool, RangeError> {
    Ok(Interval::<T>::decode(range)?.is_empty())
}

pub fn range_lower_inc<T: Scalar>(range: &[u8]) -> Result<bool, RangeError> {
    Ok(Interval::<T>::decode(range)?.lower_inclusive())
}

pub fn range_upper_inc<T: Scalar>(range: &[u8]) -> Result<bool, RangeError> {
    Ok(Interval::<T>::decode(range)?.upper_inclusive())
}
