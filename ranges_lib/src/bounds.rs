use crate::errors::RangeError;
use serde::{Deserialize, Serialize};

/// The inclusivity of both ends of a range, as written in the textual
/// bounds descriptor accepted by the three-argument constructors
/// (`int4range(1, 5, '[]')`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsSpec {
    /// `[)`, the default
    #[default]
    ClosedOpen,

    /// `[]`
    ClosedClosed,

    /// `(]`
    OpenClosed,

    /// `()`
    OpenOpen,
}

impl BoundsSpec {
    #[must_use]
    pub fn from_flags(lower_inclusive: bool, upper_inclusive: bool) -> Self {
        match (lower_inclusive, upper_inclusive) {
            (true, false) => BoundsSpec::ClosedOpen,
            (true, true) => BoundsSpec::ClosedClosed,
            (false, true) => BoundsSpec::OpenClosed,
            (false, false) => BoundsSpec::OpenOpen,
        }
    }

    /// Whether the lower bound is part of the range
    #[must_use]
    pub fn lower_inclusive(self) -> bool {
        matches!(self, BoundsSpec::ClosedOpen | BoundsSpec::ClosedClosed)
    }

    /// Whether the upper bound is part of the range
    #[must_use]
    pub fn upper_inclusive(self) -> bool {
        matches!(self, BoundsSpec::ClosedClosed | BoundsSpec::OpenClosed)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundsSpec::ClosedOpen => "[)",
            BoundsSpec::ClosedClosed => "[]",
            BoundsSpec::OpenClosed => "(]",
            BoundsSpec::OpenOpen => "()",
        }
    }
}

impl ::core::str::FromStr for BoundsSpec {
    type Err = RangeError;

    /// An empty string selects the default `[)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "[)" => Ok(BoundsSpec::ClosedOpen),
            "[]" => Ok(BoundsSpec::ClosedClosed),
            "(]" => Ok(BoundsSpec::OpenClosed),
            "()" => Ok(BoundsSpec::OpenOpen),
            _ => Err(RangeError::InvalidBoundsSpec(s.to_string())),
        }
    }
}

impl ::core::fmt::Display for BoundsSpec {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
