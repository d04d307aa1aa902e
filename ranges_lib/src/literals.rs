//! Conversion between ranges and their textual literal, as used by
//! PostgreSQL: `[1,5)`, `(0.5,2.5]`, `empty`.

use crate::errors::{LiteralDefect, RangeError};
use crate::intervals::Interval;
use crate::scalars::Scalar;
use log::debug;

impl<T: Scalar> Interval<T> {
    /// Parse a range literal.
    ///
    /// The literal is either `empty` (in any case), which returns the
    /// canonical empty range, or an opening bracket, two scalars separated
    /// by a comma, and a closing bracket.  The first comma separates the
    /// two scalars.  No whitespace is trimmed anywhere.
    /// ```
    ///    use ranges_lib::Interval;
    ///    let r = Interval::<i32>::parse("[3,7)").unwrap();
    ///    assert_eq!(r, Interval::new_closed_open(3, 7));
    ///    assert!(Interval::<i32>::parse("[3, 7)").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        if text.eq_ignore_ascii_case("empty") {
            return Ok(Self::empty());
        }

        let malformed = |defect: LiteralDefect| {
            debug!("rejected {} literal {:?}: {}", T::RANGE_NAME, text, defect);
            RangeError::MalformedLiteral {
                literal: text.to_string(),
                defect,
            }
        };

        if text.chars().count() < 3 {
            return Err(malformed(LiteralDefect::TooShort));
        }

        let mut chars = text.chars();
        let lower_inclusive = match chars.next() {
            Some('[') => true,
            Some('(') => false,
            _ => return Err(malformed(LiteralDefect::OpeningBracket)),
        };
        let upper_inclusive = match chars.next_back() {
            Some(']') => true,
            Some(')') => false,
            _ => return Err(malformed(LiteralDefect::ClosingBracket)),
        };

        let Some((lower, upper)) = chars.as_str().split_once(',') else {
            return Err(malformed(LiteralDefect::MissingComma));
        };

        let scalar = |s: &str| {
            T::parse_scalar(s).ok_or_else(|| {
                debug!("rejected {} bound {:?} in {:?}", T::RANGE_NAME, s, text);
                RangeError::InvalidScalar {
                    domain: T::RANGE_NAME,
                    literal: text.to_string(),
                }
            })
        };

        Ok(Self::new(
            scalar(lower)?,
            scalar(upper)?,
            lower_inclusive,
            upper_inclusive,
        ))
    }
}

impl<T: Scalar> ::core::str::FromStr for Interval<T> {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T: Scalar> ::core::fmt::Display for Interval<T> {
    /// Every empty range is displayed as `empty`, whatever its bounds
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")
        } else {
            write!(
                f,
                "{}{},{}{}",
                if self.lower_inclusive() { '[' } else { '(' },
                self.lower(),
                self.upper(),
                if self.upper_inclusive() { ']' } else { ')' },
            )
        }
    }
}

#[cfg(test)]
mod test {
    use crate::errors::{LiteralDefect, RangeError};
    use crate::intervals::Interval;

    fn malformed(literal: &str, defect: LiteralDefect) -> RangeError {
        RangeError::MalformedLiteral {
            literal: literal.to_string(),
            defect,
        }
    }

    fn invalid_int(literal: &str) -> RangeError {
        RangeError::InvalidScalar {
            domain: "int4range",
            literal: literal.to_string(),
        }
    }

    #[test]
    fn test_parse() -> Result<(), RangeError> {
        assert_eq!(
            Interval::<i32>::parse("[1,10)")?,
            Interval::new_closed_open(1, 10)
        );
        assert_eq!(
            Interval::<i32>::parse("[1,10]")?,
            Interval::new_closed_closed(1, 10)
        );
        assert_eq!(
            Interval::<i32>::parse("(1,10]")?,
            Interval::new_open_closed(1, 10)
        );
        assert_eq!(
            Interval::<i32>::parse("(-10,-1)")?,
            Interval::new_open_open(-10, -1)
        );
        assert_eq!("[+1,2)".parse::<Interval<i32>>()?.lower(), 1);

        // lower > upper is accepted as is
        let r = Interval::<i32>::parse("[7,3]")?;
        assert_eq!(r.lower(), 7);
        assert_eq!(r.upper(), 3);
        assert!(r.is_empty());

        let r = Interval::<f64>::parse("(0.5,2.5]")?;
        assert_eq!(r.lower(), 0.5);
        assert_eq!(r.upper(), 2.5);
        assert!(!r.lower_inclusive());
        assert!(r.upper_inclusive());

        let r = Interval::<f64>::parse("[-1e3,inf)")?;
        assert_eq!(r.lower(), -1000.0);
        assert_eq!(r.upper(), f64::INFINITY);
        let r = Interval::<f64>::parse("[nan,1]")?;
        assert!(r.lower().is_nan());
        assert!(!r.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_empty() -> Result<(), RangeError> {
        let empty = Interval::<i32>::empty();
        assert_eq!(Interval::<i32>::parse("empty")?, empty);
        assert_eq!(Interval::<i32>::parse("EMPTY")?, empty);
        assert_eq!(Interval::<i32>::parse("Empty")?, empty);
        assert_eq!(empty.lower(), 1);
        assert_eq!(empty.upper(), 0);

        let r = Interval::<f64>::parse("eMpTy")?;
        assert_eq!(r.lower(), 1.0);
        assert_eq!(r.upper(), 0.0);
        assert!(!r.lower_inclusive());
        assert!(!r.upper_inclusive());

        assert_eq!(
            Interval::<i32>::parse(" empty"),
            Err(malformed(" empty", LiteralDefect::OpeningBracket))
        );
        Ok(())
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            Interval::<i32>::parse(""),
            Err(malformed("", LiteralDefect::TooShort))
        );
        assert_eq!(
            Interval::<i32>::parse("[]"),
            Err(malformed("[]", LiteralDefect::TooShort))
        );
        assert_eq!(
            Interval::<i32>::parse("[1,2"),
            Err(malformed("[1,2", LiteralDefect::ClosingBracket))
        );
        assert_eq!(
            Interval::<i32>::parse("{1,2]"),
            Err(malformed("{1,2]", LiteralDefect::OpeningBracket))
        );
        assert_eq!(
            Interval::<i32>::parse("[12]"),
            Err(malformed("[12]", LiteralDefect::MissingComma))
        );
        assert_eq!(
            Interval::<f64>::parse("(1.5)"),
            Err(malformed("(1.5)", LiteralDefect::MissingComma))
        );
    }

    #[test]
    fn test_parse_invalid_scalar() {
        for lit in [
            "[a,2)",
            "[1,b)",
            "[,]",
            "[1,)",
            "(,1]",
            "[1,2,3]",      // extra comma goes to the upper bound
            "[ 1,2)",       // no trimming
            "[1,2 )",
            "[1x,2)",       // trailing garbage
            "[1.5,2)",      // not an integer
            "[1,2147483648)", // overflow
        ] {
            assert_eq!(Interval::<i32>::parse(lit), Err(invalid_int(lit)));
        }

        assert_eq!(
            Interval::<f64>::parse("[0.5, 1]"),
            Err(RangeError::InvalidScalar {
                domain: "float8range",
                literal: "[0.5, 1]".to_string(),
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new_closed_open(3, 7).to_string(), "[3,7)");
        assert_eq!(Interval::new_closed_closed(1, 4).to_string(), "[1,4]");
        assert_eq!(Interval::new_open_closed(-4, 4).to_string(), "(-4,4]");
        assert_eq!(Interval::new_open_open(1, 4).to_string(), "(1,4)");
        assert_eq!(Interval::new_single(5).to_string(), "[5,5]");

        assert_eq!(
            Interval::new_open_closed(0.5, 2.5).to_string(),
            "(0.5,2.5]"
        );
        assert_eq!(Interval::new_closed_open(1.0, 2.0).to_string(), "[1,2)");
        assert_eq!(
            Interval::new_closed_open(-0.0, 1e-7).to_string(),
            "[-0,0.0000001)"
        );
        assert_eq!(
            Interval::new_closed_open(f64::NEG_INFINITY, 0.0).to_string(),
            "[-inf,0)"
        );

        // All empty ranges are displayed the same
        assert_eq!(Interval::<i32>::empty().to_string(), "empty");
        assert_eq!(Interval::new_closed_open(5, 5).to_string(), "empty");
        assert_eq!(Interval::new_open_open(5, 5).to_string(), "empty");
        assert_eq!(Interval::new_closed_closed(5, 3).to_string(), "empty");
        assert_eq!(Interval::<f64>::empty().to_string(), "empty");

        // A NaN bound does not make the range empty
        assert_eq!(
            Interval::new_closed_closed(f64::NAN, 1.0).to_string(),
            "[NaN,1]"
        );
    }

    #[test]
    fn test_text_round_trip() -> Result<(), RangeError> {
        for r in [
            Interval::new_closed_open(3, 7),
            Interval::new_open_closed(i32::MIN, i32::MAX),
            Interval::new_single(-1),
            Interval::new_open_open(0, 1),
        ] {
            assert_eq!(r.to_string().parse::<Interval<i32>>()?, r);
        }

        for r in [
            Interval::new_open_closed(0.5, 2.5),
            Interval::new_closed_open(0.1 + 0.2, 1e300),
            Interval::new_closed_closed(-0.0, 0.0),
            Interval::new_open_open(f64::MIN_POSITIVE, f64::MAX),
            Interval::new_closed_closed(f64::NEG_INFINITY, f64::INFINITY),
        ] {
            let back = r.to_string().parse::<Interval<f64>>()?;
            assert_eq!(back.lower().to_bits(), r.lower().to_bits());
            assert_eq!(back.upper().to_bits(), r.upper().to_bits());
            assert_eq!(back.bounds(), r.bounds());
        }

        // Non-canonical empty ranges collapse to the canonical one
        let r = Interval::new_open_open(5, 5);
        let back = r.to_string().parse::<Interval<i32>>()?;
        assert_ne!(back, r);
        assert_eq!(back, Interval::empty());
        assert!(back.equivalent(&r));
        Ok(())
    }
}
