//! FPC codec configuration.

use haagenti_core::{CompressionLevel, Error, Result};
use serde::{Deserialize, Serialize};

/// Largest predictor table exponent addressable on this platform.
pub const MAX_LEVEL: u8 = (usize::BITS - 1) as u8;

/// Width of the floating-point elements being compressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FloatWidth {
    /// 32-bit floats (`f32`).
    F32,
    /// 64-bit floats (`f64`).
    F64,
}

impl FloatWidth {
    /// Element size in bytes.
    #[inline]
    pub fn bytes(self) -> usize {
        match self {
            FloatWidth::F32 => 4,
            FloatWidth::F64 => 8,
        }
    }
}

impl TryFrom<u8> for FloatWidth {
    type Error = Error;

    fn try_from(width: u8) -> Result<Self> {
        match width {
            4 => Ok(FloatWidth::F32),
            8 => Ok(FloatWidth::F64),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl From<FloatWidth> for u8 {
    fn from(width: FloatWidth) -> u8 {
        width.bytes() as u8
    }
}

/// Memory layout of elements in the source buffer.
///
/// Determines how raw bytes are read as integers and which end of each
/// element's representation holds the stored tail bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Byte order of the target platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Code stored in the stream header.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            ByteOrder::Little => 0,
            ByteOrder::Big => 1,
        }
    }

    /// Parse a header code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ByteOrder::Little),
            1 => Some(ByteOrder::Big),
            _ => None,
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::native()
    }
}

/// FPC codec configuration.
///
/// Both sides of a stream must agree on all three fields; they are written
/// to the stream header and checked on decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpcConfig {
    /// Element width.
    pub float_width: FloatWidth,
    /// Predictor table exponent: each table holds `2^level` entries.
    pub level: u8,
    /// Source element layout.
    #[serde(default)]
    pub byte_order: ByteOrder,
}

impl Default for FpcConfig {
    fn default() -> Self {
        Self {
            float_width: FloatWidth::F64,
            level: CompressionLevel::Default.to_level(),
            byte_order: ByteOrder::native(),
        }
    }
}

impl FpcConfig {
    /// Configuration for `f32` arrays.
    pub fn f32(level: u8) -> Self {
        Self {
            float_width: FloatWidth::F32,
            level,
            ..Self::default()
        }
    }

    /// Configuration for `f64` arrays.
    pub fn f64(level: u8) -> Self {
        Self {
            float_width: FloatWidth::F64,
            level,
            ..Self::default()
        }
    }

    /// Set predictor table exponent
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Set source byte order
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Entries per predictor table.
    pub fn table_len(&self) -> Result<usize> {
        1usize
            .checked_shl(self.level as u32)
            .ok_or(Error::InvalidLevel {
                level: self.level as u32,
                max: MAX_LEVEL as u32,
            })
    }

    /// Check that the configuration can be used on this platform.
    pub fn validate(&self) -> Result<()> {
        self.table_len().map(|_| ())
    }
}
