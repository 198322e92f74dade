//! # Haagenti FPC
//!
//! FPC lossless compression for arrays of IEEE-754 floating-point values.
//!
//! Each element is predicted twice, by a finite context model (FCM) and a
//! differential finite context model (DFCM). The better prediction is XORed
//! with the actual bits, and only the low-order bytes of the residual are
//! stored. Smooth or repetitive scientific data compresses well. Random data
//! grows by at most half again.
//!
//! ## Features
//!
//! - **Bit exact**: NaN payloads, signed zeros and subnormals survive
//! - **f32 and f64**: element width fixed per codec
//! - **Level**: predictor tables of `2^level` entries
//! - **Byte order**: little or big-endian streams on any host
//!
//! ## Stream Layout
//!
//! ```text
//! [width][level][byte order] [record]*
//! record = [header byte][tail 1][tail 2]
//! ```
//!
//! The original length is not stored. Decompression takes it from the caller.
//!
//! ## Example
//!
//! ```ignore
//! use haagenti_core::{Compressor, Decompressor};
//! use haagenti_fpc::FpcCodec;
//!
//! let codec = FpcCodec::f64(16)?;
//! let compressed = codec.compress_f64s(&samples)?;
//! let restored = codec.decompress_f64s(&compressed, samples.len())?;
//! ```

pub mod block;
pub mod chunk;
pub mod codec;
pub mod compress;
pub mod config;
pub mod decompress;
pub mod element;
pub mod header;
pub mod predictor;
pub mod record;

// Re-export main types
pub use block::max_compressed_size;
pub use chunk::CHUNK_SIZE;
pub use codec::FpcCodec;
pub use compress::FpcCompressor;
pub use config::{ByteOrder, FloatWidth, FpcConfig, MAX_LEVEL};
pub use decompress::FpcDecompressor;
pub use element::Element;
pub use header::{StreamHeader, HEADER_SIZE};
