use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// The capabilities a type must provide to be used as the endpoints of an
/// [`crate::Interval`].
///
/// Two domains are provided: `i32` (`int4range`) and `f64`
/// (`float8range`).  Each domain has its own binary layout, so the payload
/// of an interval does not say which domain it belongs to; the caller
/// always knows.
///
/// Text parsing is strict: it uses the standard `FromStr` implementation
/// without any trimming.  This means:
///   * leading and trailing whitespace is rejected
///   * a leading `+` is accepted
///   * overflow is rejected for integers
///   * for reals, exponents, `inf`, `infinity` and `nan` are accepted
///     (in any case)
pub trait Scalar:
    Copy + PartialOrd + ::core::fmt::Display + ::core::fmt::Debug
{
    /// Number of bytes used by one endpoint in the payload.
    const WIDTH: usize;

    /// Name of the range type, used in diagnostics.
    const RANGE_NAME: &'static str;

    /// Endpoints of the canonical empty range, as produced by the `empty`
    /// literal.
    const EMPTY_LOWER: Self;
    const EMPTY_UPPER: Self;

    /// Parse a single endpoint.  Returns None if the text is not a valid
    /// value for this domain.
    fn parse_scalar(text: &str) -> Option<Self>;

    /// Store the little-endian representation in `buf`, which must be
    /// exactly `WIDTH` bytes long.
    fn put_le(self, buf: &mut [u8]);

    /// Read back a value stored by `put_le`.  `buf` must be exactly
    /// `WIDTH` bytes long.
    fn get_le(buf: &[u8]) -> Self;

    fn write_le<W: Write>(self, wtr: &mut W) -> io::Result<()>;
}

impl Scalar for i32 {
    const WIDTH: usize = 4;
    const RANGE_NAME: &'static str = "int4range";
    const EMPTY_LOWER: i32 = 1;
    const EMPTY_UPPER: i32 = 0;

    fn parse_scalar(text: &str) -> Option<i32> {
        text.parse::<i32>().ok()
    }

    fn put_le(self, buf: &mut [u8]) {
        LittleEndian::write_i32(buf, self);
    }

    fn get_le(buf: &[u8]) -> i32 {
        LittleEndian::read_i32(buf)
    }

    fn write_le<W: Write>(self, wtr: &mut W) -> io::Result<()> {
        wtr.write_i32::<LittleEndian>(self)
    }
}

impl Scalar for f64 {
    const WIDTH: usize = 8;
    const RANGE_NAME: &'static str = "float8range";
    const EMPTY_LOWER: f64 = 1.0;
    const EMPTY_UPPER: f64 = 0.0;

    fn parse_scalar(text: &str) -> Option<f64> {
        text.parse::<f64>().ok()
    }

    fn put_le(self, buf: &mut [u8]) {
        LittleEndian::write_f64(buf, self);
    }

    fn get_le(buf: &[u8]) -> f64 {
        LittleEndian::read_f64(buf)
    }

    fn write_le<W: Write>(self, wtr: &mut W) -> io::Result<()> {
        wtr.write_f64::<LittleEndian>(self)
    }
}
