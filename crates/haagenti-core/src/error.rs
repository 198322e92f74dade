//! Error types for compression operations.

use core::fmt;

use thiserror::Error;

/// Result type alias for compression operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Stream header field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    /// Element width in bytes (header byte 0).
    Width,
    /// Predictor table exponent (header byte 1).
    Level,
    /// Byte order code (header byte 2).
    ByteOrder,
}

impl HeaderField {
    /// Offset of this field within the stream header.
    pub fn offset(self) -> usize {
        match self {
            HeaderField::Width => 0,
            HeaderField::Level => 1,
            HeaderField::ByteOrder => 2,
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::Width => "float width",
            HeaderField::Level => "compression level",
            HeaderField::ByteOrder => "byte order",
        };
        f.write_str(name)
    }
}

/// Compression error types.
///
/// Every variant is fatal for the call that produced it; the codec never
/// retries internally.
#[derive(Debug, Error)]
pub enum Error {
    /// Stream header does not match the decoding codec's configuration.
    #[error("stream has incorrect {field}: expected {expected}, got {actual}")]
    ConfigMismatch {
        field: HeaderField,
        expected: u8,
        actual: u8,
    },

    /// Element width other than 4 or 8 bytes.
    #[error("unsupported float width {0}: must be 4 or 8 bytes")]
    UnsupportedWidth(u8),

    /// Input ended before a header or record was complete.
    #[error("truncated stream at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Input data is corrupted or invalid.
    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    /// Buffer too small for output.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },

    /// Predictor table exponent too large for this platform.
    #[error("invalid compression level {level}: must be at most {max}")]
    InvalidLevel { level: u32, max: u32 },

    /// Memory allocation failed.
    #[error("allocation failed: could not allocate {requested_bytes} bytes")]
    AllocationFailed { requested_bytes: usize },
}

impl Error {
    /// Create a header mismatch error.
    pub fn mismatch(field: HeaderField, expected: u8, actual: u8) -> Self {
        Error::ConfigMismatch {
            field,
            expected,
            actual,
        }
    }

    /// Create a truncated stream error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Error::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Create a corrupted data error with offset context.
    pub fn corrupted_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptedData {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Check if error is recoverable (can retry with different parameters).
    ///
    /// Only an undersized output buffer qualifies; the same input with a
    /// larger destination will succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::BufferTooSmall { .. })
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::ConfigMismatch { .. } => "config_mismatch",
            Error::UnsupportedWidth(_) => "unsupported_width",
            Error::Truncated { .. } => "truncated",
            Error::CorruptedData { .. } => "corrupted_data",
            Error::BufferTooSmall { .. } => "buffer_too_small",
            Error::InvalidLevel { .. } => "invalid_level",
            Error::AllocationFailed { .. } => "allocation_failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_field() {
        let err = Error::mismatch(HeaderField::Level, 12, 8);
        assert_eq!(
            err.to_string(),
            "stream has incorrect compression level: expected 12, got 8"
        );
        assert_eq!(err.category(), "config_mismatch");
    }

    #[test]
    fn test_corrupted_at() {
        let err = Error::corrupted_at("invalid size code 6", 17);
        assert_eq!(err.to_string(), "corrupted data: invalid size code 6 at offset 17");
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::buffer_too_small(10, 5).is_recoverable());
        assert!(!Error::truncated(3, 9, 4).is_recoverable());
        assert!(!Error::UnsupportedWidth(2).is_recoverable());
    }

    #[test]
    fn test_header_field_offsets() {
        assert_eq!(HeaderField::Width.offset(), 0);
        assert_eq!(HeaderField::Level.offset(), 1);
        assert_eq!(HeaderField::ByteOrder.offset(), 2);
    }
}
