//! # Haagenti Core
//!
//! Core traits, types, and errors for the Haagenti compression library.
//!
//! Haagenti is named after the 48th demon of the Ars Goetia, who transmutes
//! substances into more valuable forms - just as compression transforms data
//! into denser representations.
//!
//! ## Core Traits
//!
//! - [`Compressor`] - One-shot compression operations
//! - [`Decompressor`] - One-shot decompression operations
//! - [`Codec`] - Combined compress/decompress capability
//!
//! ## Example
//!
//! ```ignore
//! use haagenti_core::{Codec, Compressor, Decompressor, CompressionLevel};
//! use haagenti_fpc::FpcCodec;
//!
//! let codec = FpcCodec::with_level(CompressionLevel::Fast)?;
//! let compressed = codec.compress(data)?;
//! let original = codec.decompress(&compressed, data.len())?;
//! ```

pub mod error;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, HeaderField, Result};
pub use stats::CompressionStats;
pub use traits::{Codec, Compressor, Decompressor};
pub use types::{Algorithm, CompressionLevel, CompressionRatio};
