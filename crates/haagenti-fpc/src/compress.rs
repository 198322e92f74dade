//! FPC compressor implementation.

use std::time::Instant;

use haagenti_core::{
    Algorithm, CompressionLevel, CompressionStats, Compressor, Error, Result,
};
use tracing::debug;

use crate::block::{encode_block, max_compressed_size};
use crate::config::{FloatWidth, FpcConfig};
use crate::header::{StreamHeader, HEADER_SIZE};

/// FPC compressor.
///
/// Holds only configuration; predictor tables are allocated per call, so a
/// single compressor can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct FpcCompressor {
    config: FpcConfig,
}

impl FpcCompressor {
    /// Create a compressor with default settings (`f64`, level 12).
    pub fn new() -> Self {
        Self {
            config: FpcConfig::default(),
        }
    }

    /// Create a compressor from a validated configuration.
    pub fn from_config(config: FpcConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &FpcConfig {
        &self.config
    }

    /// Compress and report statistics for the call.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = Instant::now();
        let output = self.compress(input)?;
        let elapsed = start.elapsed();

        let records = input.len().div_ceil(self.config.float_width.bytes()).div_ceil(2);
        let stats = CompressionStats::from_operation(
            Algorithm::Fpc,
            input.len(),
            output.len(),
            elapsed.as_micros() as u64,
        )
        .with_records(records);
        Ok((output, stats))
    }
}

impl Default for FpcCompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compressor for FpcCompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fpc
    }

    fn level(&self) -> CompressionLevel {
        CompressionLevel::from_level(self.config.level)
    }

    fn compress_to(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let required = self.max_compressed_size(input.len());
        if output.len() < required {
            return Err(Error::buffer_too_small(required, output.len()));
        }
        let table_len = self.config.table_len()?;

        StreamHeader::from_config(&self.config).write(output);
        let body = &mut output[HEADER_SIZE..];
        let order = self.config.byte_order;
        let written = match self.config.float_width {
            FloatWidth::F32 => encode_block::<u32>(input, body, table_len, order)?,
            FloatWidth::F64 => encode_block::<u64>(input, body, table_len, order)?,
        };

        debug!(
            algorithm = self.algorithm().name(),
            width = self.config.float_width.bytes(),
            level = self.config.level,
            input = input.len(),
            output = HEADER_SIZE + written,
            "compress"
        );
        Ok(HEADER_SIZE + written)
    }

    fn max_compressed_size(&self, input_len: usize) -> usize {
        max_compressed_size(input_len, self.config.float_width.bytes())
    }
}
