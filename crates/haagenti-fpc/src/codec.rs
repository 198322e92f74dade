//! FPC codec (combined compressor + decompressor).

use haagenti_core::{
    Algorithm, Codec, CompressionLevel, CompressionStats, Compressor, Decompressor, Error,
    HeaderField, Result,
};

use crate::compress::FpcCompressor;
use crate::config::{FloatWidth, FpcConfig};
use crate::decompress::FpcDecompressor;
use crate::element::Element;

/// FPC codec combining compression and decompression.
#[derive(Debug, Clone)]
pub struct FpcCodec {
    compressor: FpcCompressor,
    decompressor: FpcDecompressor,
}

impl FpcCodec {
    /// Create a new FPC codec with default settings (`f64`, level 12).
    pub fn new() -> Self {
        Self {
            compressor: FpcCompressor::new(),
            decompressor: FpcDecompressor::new(),
        }
    }

    /// Create a codec from a configuration.
    pub fn from_config(config: FpcConfig) -> Result<Self> {
        Ok(Self {
            compressor: FpcCompressor::from_config(config)?,
            decompressor: FpcDecompressor::from_config(config)?,
        })
    }

    /// Create a codec from a raw element width and level.
    ///
    /// Fails with [`Error::UnsupportedWidth`] unless `width` is 4 or 8.
    pub fn from_raw(width: u8, level: u8) -> Result<Self> {
        let float_width = FloatWidth::try_from(width)?;
        Self::from_config(FpcConfig {
            float_width,
            level,
            ..FpcConfig::default()
        })
    }

    /// Codec for `f32` arrays at `level`.
    pub fn f32(level: u8) -> Result<Self> {
        Self::from_config(FpcConfig::f32(level))
    }

    /// Codec for `f64` arrays at `level`.
    pub fn f64(level: u8) -> Result<Self> {
        Self::from_config(FpcConfig::f64(level))
    }

    /// Active configuration.
    pub fn config(&self) -> &FpcConfig {
        self.compressor.config()
    }

    /// Compress and report statistics for the call.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        self.compressor.compress_with_stats(input)
    }

    /// Compress a slice of `f32` values.
    pub fn compress_f32s(&self, values: &[f32]) -> Result<Vec<u8>> {
        self.expect_width(FloatWidth::F32)?;
        let order = self.config().byte_order;
        let bytes: Vec<u8> = values
            .iter()
            .flat_map(|v| v.to_bits().to_bytes(order))
            .collect();
        self.compress(&bytes)
    }

    /// Compress a slice of `f64` values.
    pub fn compress_f64s(&self, values: &[f64]) -> Result<Vec<u8>> {
        self.expect_width(FloatWidth::F64)?;
        let order = self.config().byte_order;
        let bytes: Vec<u8> = values
            .iter()
            .flat_map(|v| v.to_bits().to_bytes(order))
            .collect();
        self.compress(&bytes)
    }

    /// Decompress `count` `f32` values.
    pub fn decompress_f32s(&self, input: &[u8], count: usize) -> Result<Vec<f32>> {
        self.expect_width(FloatWidth::F32)?;
        let order = self.config().byte_order;
        let bytes = self.decompress(input, byte_len(count, 4)?)?;
        Ok(bytes
            .chunks_exact(4)
            .map(|c| {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(c);
                f32::from_bits(u32::from_bytes(raw, order))
            })
            .collect())
    }

    /// Decompress `count` `f64` values.
    pub fn decompress_f64s(&self, input: &[u8], count: usize) -> Result<Vec<f64>> {
        self.expect_width(FloatWidth::F64)?;
        let order = self.config().byte_order;
        let bytes = self.decompress(input, byte_len(count, 8)?)?;
        Ok(bytes
            .chunks_exact(8)
            .map(|c| {
                let mut raw = [0u8; 8];
                raw.copy_from_slice(c);
                f64::from_bits(u64::from_bytes(raw, order))
            })
            .collect())
    }

    fn expect_width(&self, width: FloatWidth) -> Result<()> {
        let configured = self.config().float_width;
        if configured != width {
            return Err(Error::mismatch(
                HeaderField::Width,
                configured.into(),
                width.into(),
            ));
        }
        Ok(())
    }
}

/// Byte length of `count` elements of `width` bytes.
fn byte_len(count: usize, width: usize) -> Result<usize> {
    count.checked_mul(width).ok_or(Error::AllocationFailed {
        requested_bytes: usize::MAX,
    })
}

impl Default for FpcCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for FpcCodec {
    fn algorithm(&self) -> Algorithm {
        self.compressor.algorithm()
    }

    fn level(&self) -> CompressionLevel {
        self.compressor.level()
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compressor.compress(input)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        self.compressor.compress_to(input, output)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        self.compressor.max_compressed_size(input_len)
    }
}

impl Decompressor for FpcCodec {
    fn algorithm(&self) -> Algorithm {
        self.decompressor.algorithm()
    }

    fn decompress(&self, input: &[u8], original_len: usize) -> Result<Vec<u8>> {
        self.decompressor.decompress(input, original_len)
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        self.decompressor.decompress_to(input, output)
    }
}

impl Codec for FpcCodec {
    fn new() -> Self {
        FpcCodec::new()
    }

    fn with_level(level: CompressionLevel) -> Result<Self> {
        Self::from_config(FpcConfig::default().with_level(level.to_level()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ByteOrder;
    use crate::header::HEADER_SIZE;

    fn f64_bytes(values: &[f64]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn test_roundtrip_empty() {
        let codec = FpcCodec::new();
        let compressed = codec.compress(&[]).unwrap();
        let decompressed = codec.decompress(&compressed, 0).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_repeated_values_compress() {
        let codec = FpcCodec::f64(2).unwrap();
        let input = f64_bytes(&[1.0, 1.0, 1.0]);

        let compressed = codec.compress(&input).unwrap();
        assert!(compressed.len() < input.len() + HEADER_SIZE);

        let decompressed = codec.decompress(&compressed, input.len()).unwrap();
        assert_eq!(decompressed, input);
    }

    #[test]
    fn test_odd_count_roundtrip() {
        for level in [2, 4, 8, 12, 16] {
            let codec = FpcCodec::f64(level).unwrap();
            let input = f64_bytes(&[3.25, -1.5e300, 7.0]);
            let compressed = codec.compress(&input).unwrap();
            assert_eq!(codec.decompress(&compressed, input.len()).unwrap(), input);
        }
    }

    #[test]
    fn test_typed_roundtrip() {
        let codec = FpcCodec::f32(10).unwrap();
        let values: Vec<f32> = (0..1000).map(|i| (i as f32 * 0.01).sin()).collect();
        let compressed = codec.compress_f32s(&values).unwrap();
        let decoded = codec.decompress_f32s(&compressed, values.len()).unwrap();
        assert_eq!(
            decoded.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            values.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_typed_width_mismatch() {
        let codec = FpcCodec::f32(10).unwrap();
        let err = codec.compress_f64s(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigMismatch { field: HeaderField::Width, expected: 4, actual: 8 }
        ));
    }

    #[test]
    fn test_special_values_preserved() {
        let codec = FpcCodec::f64(8).unwrap();
        let values = [
            f64::NAN,
            -0.0,
            0.0,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::MIN_POSITIVE,
            f64::from_bits(1),
        ];
        let compressed = codec.compress_f64s(&values).unwrap();
        let decoded = codec.decompress_f64s(&compressed, values.len()).unwrap();
        for (a, b) in values.iter().zip(&decoded) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_byte_orders_produce_distinct_streams() {
        let values = [1.0f64, 2.0, 4.0, 8.0];
        let little =
            FpcCodec::from_config(FpcConfig::f64(8).with_byte_order(ByteOrder::Little)).unwrap();
        let big =
            FpcCodec::from_config(FpcConfig::f64(8).with_byte_order(ByteOrder::Big)).unwrap();

        let a = little.compress_f64s(&values).unwrap();
        let b = big.compress_f64s(&values).unwrap();
        assert_eq!(a[2], 0);
        assert_eq!(b[2], 1);
        assert_eq!(a.len(), b.len());

        assert_eq!(little.decompress_f64s(&a, 4).unwrap(), values);
        assert_eq!(big.decompress_f64s(&b, 4).unwrap(), values);
        assert!(little.decompress_f64s(&b, 4).is_err());
    }

    #[test]
    fn test_element_count_overflow() {
        let codec = FpcCodec::f64(4).unwrap();
        let stream = codec.compress_f64s(&[1.0, 2.0]).unwrap();
        let err = codec.decompress_f64s(&stream, usize::MAX / 4).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { .. }));

        let codec = FpcCodec::f32(4).unwrap();
        let stream = codec.compress_f32s(&[1.0, 2.0]).unwrap();
        let err = codec.decompress_f32s(&stream, usize::MAX / 2).unwrap_err();
        assert!(matches!(err, Error::AllocationFailed { .. }));
    }

    #[test]
    fn test_from_raw() {
        assert!(FpcCodec::from_raw(8, 12).is_ok());
        assert!(FpcCodec::from_raw(4, 0).is_ok());
        assert!(matches!(
            FpcCodec::from_raw(2, 12),
            Err(Error::UnsupportedWidth(2))
        ));
    }

    #[test]
    fn test_codec_trait() {
        let codec = <FpcCodec as Codec>::with_level(CompressionLevel::Fast).unwrap();
        assert_eq!(codec.config().level, 8);
        assert_eq!(Compressor::algorithm(&codec), Algorithm::Fpc);

        let data = f64_bytes(&[2.5; 64]);
        assert!(codec.verify_roundtrip(&data).unwrap());
        assert!(codec.measure_ratio(&data).unwrap().is_effective());
    }
}
