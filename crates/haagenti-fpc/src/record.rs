//! Pair record format.
//!
//! Every two elements are serialized as one record:
//!
//! ```text
//! Byte 0:  [7] DFCM flag, first value
//!          [6:4] size code, first value
//!          [3] DFCM flag, second value
//!          [2:0] size code, second value
//! Then:    tail bytes of first value, tail bytes of second value
//! ```
//!
//! A size code is the residual's leading zero byte count squeezed into three
//! bits. For 8-byte elements the count 4 has no code: counts of 4 and above
//! are stored one lower, so codes map to `{0, 1, 2, 3, 5, 6, 7, 8}` and a
//! count of exactly 4 is written as 3 (one zero byte is stored explicitly).
//! For 4-byte elements codes are exact.
//!
//! The tail of a residual is its `WIDTH - zero_bytes` least significant
//! bytes, laid out as they appear in the element's memory representation:
//! the low-address bytes for little-endian, the high-address bytes for
//! big-endian.

use crate::config::ByteOrder;
use crate::element::Element;

/// Largest size code that fits in three bits.
pub const MAX_SIZE_CODE: u8 = 0b111;

/// Predictor flag for the first value of a record.
pub const DFCM_FLAG_FIRST: u8 = 1 << 7;

/// Predictor flag for the second value of a record.
pub const DFCM_FLAG_SECOND: u8 = 1 << 3;

/// Encode a leading zero byte count as a size code.
#[inline]
pub fn encode_size<T: Element>(mut zero_bytes: usize) -> u8 {
    if T::WIDTH > MAX_SIZE_CODE as usize && zero_bytes >= 4 {
        zero_bytes -= 1;
    }
    zero_bytes.min(MAX_SIZE_CODE as usize) as u8
}

/// Decode a size code into the number of leading bytes not stored.
#[inline]
pub fn decode_size<T: Element>(code: u8) -> usize {
    let mut zero_bytes = code as usize;
    if T::WIDTH > MAX_SIZE_CODE as usize && zero_bytes > 3 {
        zero_bytes += 1;
    }
    zero_bytes
}

/// Number of stored bytes for a size code.
///
/// `None` when the code claims more zero bytes than the element has, which
/// only a corrupted 4-byte stream can produce.
#[inline]
pub fn tail_len<T: Element>(code: u8) -> Option<usize> {
    T::WIDTH.checked_sub(decode_size::<T>(code))
}

/// Copy the stored tail of `value` into `out` (`out.len()` is the tail length).
#[inline]
pub fn write_tail<T: Element>(value: T, order: ByteOrder, out: &mut [u8]) {
    let bytes = value.to_bytes(order);
    let bytes = bytes.as_ref();
    let skip = T::WIDTH - out.len();
    match order {
        ByteOrder::Little => out.copy_from_slice(&bytes[..out.len()]),
        ByteOrder::Big => out.copy_from_slice(&bytes[skip..]),
    }
}

/// Rebuild a residual from its stored tail; missing leading bytes are zero.
#[inline]
pub fn read_tail<T: Element>(tail: &[u8], order: ByteOrder) -> T {
    let mut bytes = T::Bytes::default();
    let skip = T::WIDTH - tail.len();
    match order {
        ByteOrder::Little => bytes.as_mut()[..tail.len()].copy_from_slice(tail),
        ByteOrder::Big => bytes.as_mut()[skip..].copy_from_slice(tail),
    }
    T::from_bytes(bytes, order)
}

/// One value after prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Residual<T> {
    /// XOR of the chosen prediction and the actual value.
    pub value: T,
    /// Three-bit size code.
    pub size_code: u8,
    /// Whether the DFCM prediction was chosen.
    pub dfcm: bool,
}

/// Pack the header byte of a record.
#[inline]
pub fn pack_header<T>(first: &Residual<T>, second: &Residual<T>) -> u8 {
    let mut header = (first.size_code << 4) | second.size_code;
    if first.dfcm {
        header |= DFCM_FLAG_FIRST;
    }
    if second.dfcm {
        header |= DFCM_FLAG_SECOND;
    }
    header
}

/// Fields of a record header byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub first_code: u8,
    pub first_dfcm: bool,
    pub second_code: u8,
    pub second_dfcm: bool,
}

impl RecordHeader {
    /// Unpack a record header byte.
    #[inline]
    pub fn unpack(byte: u8) -> Self {
        Self {
            first_code: (byte >> 4) & MAX_SIZE_CODE,
            first_dfcm: byte & DFCM_FLAG_FIRST != 0,
            second_code: byte & MAX_SIZE_CODE,
            second_dfcm: byte & DFCM_FLAG_SECOND != 0,
        }
    }
}
