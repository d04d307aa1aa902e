//! This crate provides ranges over integers and reals, with the same
//! textual syntax as PostgreSQL and a fixed-width binary payload suitable
//! for storing the values in a query engine as opaque blobs.
//!
//! A range holds two finite bounds, each of which is inclusive or
//! exclusive:
//!
//!  |Range   |Constructor                       |Description
//!  |--------|----------------------------------|--------------
//!  | `[A,B]`|[`Interval::new_closed_closed`]   |left-closed, right-closed
//!  | `[A,B)`|[`Interval::new_closed_open`]     |left-closed, right-open
//!  | `(A,B)`|[`Interval::new_open_open`]       |left-open, right-open
//!  | `(A,B]`|[`Interval::new_open_closed`]     |left-open, right-closed
//!  | `empty`|[`Interval::empty()`]             |empty
//!
//! Two domains are supported, [`Int4Range`] (`i32` bounds) and
//! [`Float8Range`] (`f64` bounds).  Both share the same generic
//! implementation through the [`Scalar`] trait, but each has its own
//! payload size.
//!
//! A range is empty when its lower bound is greater than its upper
//! bound, or when both are equal but one of them is exclusive.  The bounds
//! of an empty range are kept as given, so `(5,5)` and `(1,0)` are both
//! empty, display as `empty`, but have distinct payloads.  Only `(1,0)` is
//! produced by parsing `empty`.
//!
//! ```text
//!      [---A---)
//!              [----B----]      A && B is false (A excludes the shared bound)
//!      [---A---]
//!              [----B----]      A && B is true
//! ```
//!
//! ```
//!    use ranges_lib::{Int4Range, Float8Range};
//!    let r: Int4Range = "[3,7)".parse().unwrap();
//!    assert!(r.contains(&3));
//!    assert!(!r.contains(&7));
//!    assert_eq!(r.to_string(), "[3,7)");
//!    assert_eq!(Int4Range::decode(&r.encode()).unwrap(), r);
//!
//!    let f: Float8Range = "(0.5,2.5]".parse().unwrap();
//!    assert_eq!(f.lower(), 0.5);
//!    assert!(f.upper_inclusive());
//! ```

mod bounds;
mod codec;
pub mod errors;
pub mod functions;
mod intervals;
mod literals;
mod scalars;

pub use crate::bounds::BoundsSpec;
pub use crate::errors::{LiteralDefect, RangeError};
pub use crate::intervals::{contained_by, Interval};
pub use crate::scalars::Scalar;

/// A range of 32 bits integers (`int4range`)
pub type Int4Range = Interval<i32>;

/// A range of double-precision reals (`float8range`)
pub type Float8Range = Interval<f64>;
