//! Core type definitions for compression operations.

/// Compression level presets.
///
/// For predictor-based codecs the numeric level is the base-2 logarithm of
/// each predictor table's entry count: higher levels trade memory for ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionLevel {
    /// Small tables, fits in L1 (level 8).
    Fast,

    /// Balanced memory and ratio (level 12, default).
    #[default]
    Default,

    /// Large tables (level 16).
    Best,

    /// Very large tables, megabytes per call (level 20).
    Ultra,

    /// Custom table exponent.
    Custom(u8),
}

impl CompressionLevel {
    /// Convert to numeric level for algorithms.
    pub fn to_level(self) -> u8 {
        match self {
            CompressionLevel::Fast => 8,
            CompressionLevel::Default => 12,
            CompressionLevel::Best => 16,
            CompressionLevel::Ultra => 20,
            CompressionLevel::Custom(level) => level,
        }
    }

    /// Create from numeric level.
    pub fn from_level(level: u8) -> Self {
        match level {
            8 => CompressionLevel::Fast,
            12 => CompressionLevel::Default,
            16 => CompressionLevel::Best,
            20 => CompressionLevel::Ultra,
            _ => CompressionLevel::Custom(level),
        }
    }
}

/// Supported compression algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// FPC - predictive XOR coding of floating-point arrays.
    Fpc,
}

impl Algorithm {
    /// Get algorithm name as string.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fpc => "fpc",
        }
    }
}

/// Compression ratio metrics.
#[derive(Debug, Clone, Copy)]
pub struct CompressionRatio {
    /// Original uncompressed size in bytes.
    pub original_size: usize,
    /// Compressed size in bytes.
    pub compressed_size: usize,
}

impl CompressionRatio {
    /// Create new ratio from sizes.
    pub fn new(original: usize, compressed: usize) -> Self {
        CompressionRatio {
            original_size: original,
            compressed_size: compressed,
        }
    }

    /// Calculate ratio (original / compressed).
    /// Higher is better (more compression).
    pub fn ratio(&self) -> f64 {
        if self.compressed_size == 0 {
            return 0.0;
        }
        self.original_size as f64 / self.compressed_size as f64
    }

    /// Calculate space savings as percentage (0-100).
    pub fn savings_percent(&self) -> f64 {
        if self.original_size == 0 {
            return 0.0;
        }
        (1.0 - (self.compressed_size as f64 / self.original_size as f64)) * 100.0
    }

    /// Check if compression was effective (saved space).
    pub fn is_effective(&self) -> bool {
        self.compressed_size < self.original_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_presets_roundtrip() {
        for level in [
            CompressionLevel::Fast,
            CompressionLevel::Default,
            CompressionLevel::Best,
            CompressionLevel::Ultra,
            CompressionLevel::Custom(3),
        ] {
            assert_eq!(CompressionLevel::from_level(level.to_level()), level);
        }
    }

    #[test]
    fn test_algorithm_name() {
        assert_eq!(Algorithm::Fpc.name(), "fpc");
    }

    #[test]
    fn test_ratio() {
        let ratio = CompressionRatio::new(1000, 250);
        assert!((ratio.ratio() - 4.0).abs() < f64::EPSILON);
        assert!((ratio.savings_percent() - 75.0).abs() < 1e-9);
        assert!(ratio.is_effective());

        assert_eq!(CompressionRatio::new(10, 0).ratio(), 0.0);
        assert!(!CompressionRatio::new(10, 13).is_effective());
    }
}
