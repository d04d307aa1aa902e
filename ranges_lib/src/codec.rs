//! Fixed-width binary payload for ranges.
//!
//! ```text
//!    +-------------+-------------+-------+
//!    | lower (LE)  | upper (LE)  | flags |
//!    +-------------+-------------+-------+
//!      WIDTH bytes   WIDTH bytes   1 byte
//! ```
//! In the flags byte, bit 1 is set when the lower bound is inclusive and
//! bit 0 when the upper bound is inclusive.  The payload is neither
//! versioned nor self-describing: the domain must be known by the reader.

use crate::errors::RangeError;
use crate::intervals::Interval;
use crate::scalars::Scalar;
use byteorder::WriteBytesExt;
use log::{debug, trace};
use std::io::{Read, Write};

const LOWER_INCLUSIVE: u8 = 0b10;
const UPPER_INCLUSIVE: u8 = 0b01;

impl<T: Scalar> Interval<T> {
    /// Size of the payload for this domain (9 bytes for `i32`, 17 for
    /// `f64`).
    pub const PAYLOAD_SIZE: usize = 2 * T::WIDTH + 1;

    fn flags(&self) -> u8 {
        (if self.lower_inclusive() { LOWER_INCLUSIVE } else { 0 })
            | (if self.upper_inclusive() { UPPER_INCLUSIVE } else { 0 })
    }

    /// Decode a payload whose length was already checked.
    fn from_payload(payload: &[u8]) -> Self {
        let (lower, rest) = payload.split_at(T::WIDTH);
        let (upper, rest) = rest.split_at(T::WIDTH);
        let flags = rest.first().copied().unwrap_or(0);
        Self::new(
            T::get_le(lower),
            T::get_le(upper),
            flags & LOWER_INCLUSIVE != 0,
            flags & UPPER_INCLUSIVE != 0,
        )
    }

    fn short_payload(actual: usize) -> RangeError {
        debug!(
            "rejected {} payload of {} bytes",
            T::RANGE_NAME,
            actual
        );
        RangeError::MalformedPayload {
            domain: T::RANGE_NAME,
            expected: Self::PAYLOAD_SIZE,
            actual,
        }
    }

    /// The binary representation of the range.  Bounds are stored as is,
    /// so two empty ranges with different bounds have different payloads.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = vec![0_u8; Self::PAYLOAD_SIZE];
        let (lower, rest) = payload.split_at_mut(T::WIDTH);
        let (upper, flags) = rest.split_at_mut(T::WIDTH);
        self.lower().put_le(lower);
        self.upper().put_le(upper);
        if let Some(f) = flags.first_mut() {
            *f = self.flags();
        }
        payload
    }

    /// Rebuild a range from its payload.  Bytes past the fixed size are
    /// ignored, and the bounds are not validated: a payload with lower
    /// greater than upper decodes to an empty range.
    pub fn decode(payload: &[u8]) -> Result<Self, RangeError> {
        if payload.len() < Self::PAYLOAD_SIZE {
            return Err(Self::short_payload(payload.len()));
        }
        let intv = Self::from_payload(payload);
        trace!("decoded {} {}", T::RANGE_NAME, intv);
        Ok(intv)
    }

    /// Write the payload to a stream
    pub fn write_to<W: Write>(&self, wtr: &mut W) -> std::io::Result<()> {
        self.lower().write_le(wtr)?;
        self.upper().write_le(wtr)?;
        wtr.write_u8(self.flags())
    }

    /// Read exactly one payload from a stream.  A stream that ends before
    /// a full payload was read is reported as a malformed payload, with
    /// the number of bytes that could be read.  Errors from the reader
    /// itself are reported as [`RangeError::Io`].
    pub fn read_from<R: Read>(rdr: &mut R) -> Result<Self, RangeError> {
        let mut payload = Vec::with_capacity(Self::PAYLOAD_SIZE);
        let wanted = Self::PAYLOAD_SIZE as u64;
        let n = rdr
            .by_ref()
            .take(wanted)
            .read_to_end(&mut payload)
            .map_err(|e| RangeError::Io {
                domain: T::RANGE_NAME,
                message: e.to_string(),
            })?;
        if n < Self::PAYLOAD_SIZE {
            return Err(Self::short_payload(n));
        }
        Ok(Self::from_payload(&payload))
    }
}
