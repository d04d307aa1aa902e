/// Which part of a range literal could not be understood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LiteralDefect {
    TooShort,
    OpeningBracket,
    ClosingBracket,
    MissingComma,
}

impl ::core::fmt::Display for LiteralDefect {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            LiteralDefect::TooShort => write!(f, "too short"),
            LiteralDefect::OpeningBracket => write!(f, "expected '[' or '('"),
            LiteralDefect::ClosingBracket => write!(f, "expected ']' or ')'"),
            LiteralDefect::MissingComma => write!(f, "missing comma"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Malformed range literal: \"{literal}\" ({defect})")]
    MalformedLiteral {
        literal: String,
        defect: LiteralDefect,
    },

    #[error("Invalid {domain} bound in range literal: \"{literal}\"")]
    InvalidScalar {
        domain: &'static str,
        literal: String,
    },

    #[error("Invalid bounds: {0}")]
    InvalidBoundsSpec(String),

    #[error("Invalid {domain} payload: expected {expected} bytes, got {actual}")]
    MalformedPayload {
        domain: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error reading {domain} payload: {message}")]
    Io {
        domain: &'static str,
        message: String,
    },
}

#[cfg(test)]
mod test {
    use crate::errors::{LiteralDefect, RangeError};

    #[test]
    fn test_messages() {
        let e = RangeError::MalformedLiteral {
            literal: "[1,2".to_string(),
            defect: LiteralDefect::ClosingBracket,
        };
        assert_eq!(
            e.to_string(),
            "Malformed range literal: \"[1,2\" (expected ']' or ')')",
        );

        let e = RangeError::InvalidScalar {
            domain: "int4range",
            literal: "[a,2)".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid int4range bound in range literal: \"[a,2)\"",
        );

        let e = RangeError::InvalidBoundsSpec("[[".to_string());
        assert_eq!(e.to_string(), "Invalid bounds: [[");

        let e = RangeError::MalformedPayload {
            domain: "float8range",
            expected: 17,
            actual: 3,
        };
        assert_eq!(
            e.to_string(),
            "Invalid float8range payload: expected 17 bytes, got 3",
        );

        let e = RangeError::Io {
            domain: "int4range",
            message: "broken pipe".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "I/O error reading int4range payload: broken pipe",
        );
    }
}
