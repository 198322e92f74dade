//! FPC decompressor implementation.

use haagenti_core::{Algorithm, Decompressor, Result};
use tracing::{debug, warn};

use crate::block::decode_block;
use crate::config::{FloatWidth, FpcConfig};
use crate::header::{StreamHeader, HEADER_SIZE};

/// FPC decompressor.
///
/// Accepts only streams whose header matches its configuration exactly.
#[derive(Debug, Clone)]
pub struct FpcDecompressor {
    config: FpcConfig,
}

impl FpcDecompressor {
    /// Create a decompressor with default settings (`f64`, level 12).
    pub fn new() -> Self {
        Self {
            config: FpcConfig::default(),
        }
    }

    /// Create a decompressor from a validated configuration.
    pub fn from_config(config: FpcConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &FpcConfig {
        &self.config
    }
}

impl Default for FpcDecompressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Decompressor for FpcDecompressor {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fpc
    }

    fn decompress_to(&self, input: &[u8], output: &mut [u8]) -> Result<()> {
        let header = StreamHeader::parse(input)?;
        if let Err(err) = header.validate(&self.config) {
            warn!(%err, "rejecting fpc stream header");
            return Err(err);
        }
        let table_len = self.config.table_len()?;

        let order = self.config.byte_order;
        let end = match self.config.float_width {
            FloatWidth::F32 => decode_block::<u32>(input, HEADER_SIZE, output, table_len, order)?,
            FloatWidth::F64 => decode_block::<u64>(input, HEADER_SIZE, output, table_len, order)?,
        };

        debug!(
            algorithm = self.algorithm().name(),
            width = self.config.float_width.bytes(),
            level = self.config.level,
            input = input.len(),
            consumed = end,
            output = output.len(),
            "decompress"
        );
        Ok(())
    }
}
