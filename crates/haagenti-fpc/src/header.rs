//! FPC stream header.
//!
//! ```text
//! Byte 0: element width in bytes (4 or 8)
//! Byte 1: level (predictor table exponent)
//! Byte 2: byte order (0 = little-endian, 1 = big-endian)
//! ```
//!
//! Records follow immediately. The original length is not stored.

use haagenti_core::{Error, HeaderField, Result};

use crate::config::{ByteOrder, FpcConfig};

/// Size of the stream header in bytes.
pub const HEADER_SIZE: usize = 3;

/// Raw stream header.
///
/// Fields are kept as read so that a stream from an incompatible codec can
/// still be inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHeader {
    /// Element width in bytes.
    pub width: u8,
    /// Predictor table exponent.
    pub level: u8,
    /// Byte order code.
    pub byte_order: u8,
}

impl StreamHeader {
    /// Header describing streams produced with `config`.
    pub fn from_config(config: &FpcConfig) -> Self {
        Self {
            width: config.float_width.into(),
            level: config.level,
            byte_order: config.byte_order.code(),
        }
    }

    /// Parse the header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        match data {
            [width, level, byte_order, ..] => Ok(Self {
                width: *width,
                level: *level,
                byte_order: *byte_order,
            }),
            _ => Err(Error::truncated(0, HEADER_SIZE, data.len())),
        }
    }

    /// Serialize into the first [`HEADER_SIZE`] bytes of `out`.
    pub fn write(&self, out: &mut [u8]) {
        out[..HEADER_SIZE].copy_from_slice(&[self.width, self.level, self.byte_order]);
    }

    /// Byte order, if the code is known.
    pub fn byte_order(&self) -> Option<ByteOrder> {
        ByteOrder::from_code(self.byte_order)
    }

    /// Check that this stream was written by a codec configured as `config`.
    ///
    /// Fields are checked in stream order: width, level, byte order.
    pub fn validate(&self, config: &FpcConfig) -> Result<()> {
        let expected = Self::from_config(config);
        let fields = [
            (HeaderField::Width, expected.width, self.width),
            (HeaderField::Level, expected.level, self.level),
            (HeaderField::ByteOrder, expected.byte_order, self.byte_order),
        ];
        for (field, expected, actual) in fields {
            if expected != actual {
                return Err(Error::mismatch(field, expected, actual));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_parse() {
        let config = FpcConfig::f32(9).with_byte_order(ByteOrder::Big);
        let header = StreamHeader::from_config(&config);
        let mut out = [0u8; 5];
        header.write(&mut out);
        assert_eq!(&out[..3], &[4, 9, 1]);

        let parsed = StreamHeader::parse(&out).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.byte_order(), Some(ByteOrder::Big));
        parsed.validate(&config).unwrap();
    }

    #[test]
    fn test_parse_short() {
        for len in 0..HEADER_SIZE {
            let err = StreamHeader::parse(&[8, 12, 0][..len]).unwrap_err();
            assert!(matches!(
                err,
                Error::Truncated { offset: 0, needed: HEADER_SIZE, available } if available == len
            ));
        }
    }

    #[test]
    fn test_validate_each_field() {
        let config = FpcConfig::f64(12).with_byte_order(ByteOrder::Little);
        let cases = [
            ([4, 12, 0], HeaderField::Width, 8, 4),
            ([8, 10, 0], HeaderField::Level, 12, 10),
            ([8, 12, 1], HeaderField::ByteOrder, 0, 1),
            ([8, 12, 7], HeaderField::ByteOrder, 0, 7),
        ];
        for (bytes, field, expected, actual) in cases {
            let err = StreamHeader::parse(&bytes).unwrap().validate(&config).unwrap_err();
            match err {
                Error::ConfigMismatch {
                    field: f,
                    expected: e,
                    actual: a,
                } => assert_eq!((f, e, a), (field, expected, actual)),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_unknown_byte_order() {
        let header = StreamHeader::parse(&[8, 12, 2]).unwrap();
        assert_eq!(header.byte_order(), None);
    }
}
