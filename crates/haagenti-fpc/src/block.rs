//! FPC block encoding and decoding.
//!
//! A block is the record sequence following the stream header. Elements are
//! fed through a [`ChunkBuffer`] and coded two at a time; both predictors see
//! every element in order on both sides, whichever prediction a record uses.

use haagenti_core::{Error, Result};
use tracing::trace;

use crate::chunk::{ceil_bytes_to_even_values, ChunkBuffer, CHUNK_SIZE};
use crate::config::ByteOrder;
use crate::element::Element;
use crate::header::HEADER_SIZE;
use crate::predictor::{DfcmPredictor, FcmPredictor};
use crate::record::{
    decode_size, encode_size, pack_header, read_tail, tail_len, write_tail, RecordHeader,
    Residual,
};

/// Worst-case stream size for `input_len` bytes of `width`-byte elements.
///
/// Allows one and a half elements per element, which exceeds the largest
/// possible record (`1 + 2 * width` bytes per pair).
pub fn max_compressed_size(input_len: usize, width: usize) -> usize {
    let count = ceil_bytes_to_even_values(input_len, width);
    HEADER_SIZE + (count + count / 2) * width
}

/// The two predictors of one coding session.
#[derive(Debug)]
struct Predictors<T> {
    fcm: FcmPredictor<T>,
    dfcm: DfcmPredictor<T>,
    order: ByteOrder,
}

impl<T: Element> Predictors<T> {
    fn new(table_len: usize, order: ByteOrder) -> Result<Self> {
        Ok(Self {
            fcm: FcmPredictor::new(table_len)?,
            dfcm: DfcmPredictor::new(table_len)?,
            order,
        })
    }

    /// Predict, update both predictors, and keep the better residual.
    #[inline]
    fn compress_value(&mut self, value: T) -> Residual<T> {
        let xor_dfcm = self.dfcm.predict() ^ value;
        let xor_fcm = self.fcm.predict() ^ value;
        self.dfcm.add(value);
        self.fcm.add(value);

        let zeros_dfcm = xor_dfcm.leading_zero_bytes();
        let zeros_fcm = xor_fcm.leading_zero_bytes();
        if zeros_dfcm > zeros_fcm {
            Residual {
                value: xor_dfcm,
                size_code: encode_size::<T>(zeros_dfcm),
                dfcm: true,
            }
        } else {
            Residual {
                value: xor_fcm,
                size_code: encode_size::<T>(zeros_fcm),
                dfcm: false,
            }
        }
    }

    #[inline]
    fn decompress_value(&mut self, residual: T, dfcm: bool) -> T {
        let value = if dfcm {
            self.dfcm.predict() ^ residual
        } else {
            self.fcm.predict() ^ residual
        };
        self.dfcm.add(value);
        self.fcm.add(value);
        value
    }

    /// Write one record at `output[offset..]`, returning its length.
    fn encode_pair(
        &mut self,
        first: T,
        second: T,
        output: &mut [u8],
        offset: usize,
    ) -> Result<usize> {
        let first = self.compress_value(first);
        let second = self.compress_value(second);
        let tail1 = T::WIDTH - decode_size::<T>(first.size_code);
        let tail2 = T::WIDTH - decode_size::<T>(second.size_code);

        let len = 1 + tail1 + tail2;
        if output.len() < offset + len {
            return Err(Error::buffer_too_small(offset + len, output.len()));
        }

        let out = &mut output[offset..offset + len];
        out[0] = pack_header(&first, &second);
        write_tail(first.value, self.order, &mut out[1..1 + tail1]);
        write_tail(second.value, self.order, &mut out[1 + tail1..]);
        Ok(len)
    }

    /// Read the record starting at `offset`, returning both values and its length.
    fn decode_pair(&mut self, input: &[u8], offset: usize) -> Result<(T, T, usize)> {
        let bytes = &input[offset..];
        let Some(&byte) = bytes.first() else {
            return Err(Error::truncated(offset, 1, 0));
        };
        let header = RecordHeader::unpack(byte);
        let tail1 = tail_len::<T>(header.first_code).ok_or_else(|| {
            Error::corrupted_at(format!("invalid size code {}", header.first_code), offset)
        })?;
        let tail2 = tail_len::<T>(header.second_code).ok_or_else(|| {
            Error::corrupted_at(format!("invalid size code {}", header.second_code), offset)
        })?;

        let len = 1 + tail1 + tail2;
        if bytes.len() < len {
            return Err(Error::truncated(offset, len, bytes.len()));
        }

        let first = read_tail::<T>(&bytes[1..1 + tail1], self.order);
        let second = read_tail::<T>(&bytes[1 + tail1..len], self.order);
        let first = self.decompress_value(first, header.first_dfcm);
        let second = self.decompress_value(second, header.second_dfcm);
        Ok((first, second, len))
    }
}

/// Encode `input` as records into `output`.
///
/// `output` sized to `max_compressed_size(input.len(), T::WIDTH) - HEADER_SIZE`
/// always suffices; a smaller buffer fails with `BufferTooSmall` once a
/// record does not fit. Returns the number of bytes written.
pub fn encode_block<T: Element>(
    input: &[u8],
    output: &mut [u8],
    table_len: usize,
    order: ByteOrder,
) -> Result<usize> {
    let mut predictors = Predictors::<T>::new(table_len, order)?;
    let mut chunk = ChunkBuffer::<T>::new(order);
    let mut written = 0;

    for src in input.chunks(ChunkBuffer::<T>::size_bytes()) {
        let count = chunk.import(src);
        let start = written;
        for pair in chunk.values()[..count].chunks_exact(2) {
            written += predictors.encode_pair(pair[0], pair[1], output, written)?;
        }
        trace!(elements = count, bytes = written - start, "encoded chunk");
    }

    Ok(written)
}

/// Decode records from `input[start..]` until `output` is full.
///
/// Offsets in errors are positions in `input`. Returns the offset just past
/// the last record read; trailing bytes are ignored.
pub fn decode_block<T: Element>(
    input: &[u8],
    start: usize,
    output: &mut [u8],
    table_len: usize,
    order: ByteOrder,
) -> Result<usize> {
    if start > input.len() {
        return Err(Error::truncated(start, 0, input.len()));
    }
    let mut predictors = Predictors::<T>::new(table_len, order)?;
    let mut chunk = ChunkBuffer::<T>::new(order);
    let chunk_bytes = ChunkBuffer::<T>::size_bytes();
    let mut offset = start;

    for dst in output.chunks_mut(chunk_bytes) {
        let count = if dst.len() < chunk_bytes {
            ceil_bytes_to_even_values(dst.len(), T::WIDTH)
        } else {
            CHUNK_SIZE
        };
        let chunk_start = offset;
        for pair in chunk.values_mut(count).chunks_exact_mut(2) {
            let (first, second, len) = predictors.decode_pair(input, offset)?;
            pair[0] = first;
            pair[1] = second;
            offset += len;
        }
        chunk.export(count, dst);
        trace!(elements = count, bytes = offset - chunk_start, "decoded chunk");
    }

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_bytes(values: &[f64]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn roundtrip<T: Element>(input: &[u8], level: u32, order: ByteOrder) -> Vec<u8> {
        let table_len = 1 << level;
        let mut encoded = vec![0u8; max_compressed_size(input.len(), T::WIDTH)];
        let written = encode_block::<T>(input, &mut encoded, table_len, order).unwrap();

        let mut decoded = vec![0u8; input.len()];
        let end = decode_block::<T>(&encoded[..written], 0, &mut decoded, table_len, order).unwrap();
        assert_eq!(end, written);
        decoded
    }

    #[test]
    fn test_max_compressed_size() {
        assert_eq!(max_compressed_size(0, 8), 3);
        assert_eq!(max_compressed_size(24, 8), 3 + (4 + 2) * 8);
        assert_eq!(max_compressed_size(16, 4), 3 + (4 + 2) * 4);
        assert_eq!(max_compressed_size(5, 4), 3 + (2 + 1) * 4);
    }

    #[test]
    fn test_first_record_of_zeros() {
        // Zero input against zeroed tables: both residuals are zero, FCM wins ties.
        let input = [0u8; 16];
        let mut encoded = vec![0u8; 64];
        let written = encode_block::<u64>(&input, &mut encoded, 4, ByteOrder::Little).unwrap();
        assert_eq!(written, 1);
        assert_eq!(encoded[0], 0b0111_0111);
    }

    #[test]
    fn test_first_value_stored_in_full() {
        // 1.0 has no leading zero bytes and both predictors start at zero.
        let input = to_bytes(&[1.0, 0.0]);
        let mut encoded = vec![0u8; 64];
        let written = encode_block::<u64>(&input, &mut encoded, 4, ByteOrder::Little).unwrap();
        assert_eq!(encoded[0] >> 4 & 0b111, 0);
        assert_eq!(&encoded[1..9], &1.0f64.to_le_bytes());
        assert_eq!(written, 1 + 8 + (8 - decode_size::<u64>(encoded[0] & 0b111)));
    }

    #[test]
    fn test_roundtrip_spans_chunks() {
        let values: Vec<f64> = (0..CHUNK_SIZE * 3 + 5).map(|i| (i as f64).sqrt()).collect();
        let input = to_bytes(&values);
        for order in [ByteOrder::Little, ByteOrder::Big] {
            assert_eq!(roundtrip::<u64>(&input, 10, order), input);
        }
    }

    #[test]
    fn test_roundtrip_u32_partial_element() {
        let input: Vec<u8> = (0..CHUNK_SIZE * 4 + 7).map(|i| (i * 31 % 251) as u8).collect();
        for order in [ByteOrder::Little, ByteOrder::Big] {
            assert_eq!(roundtrip::<u32>(&input, 6, order), input);
        }
    }

    #[test]
    fn test_truncated_record() {
        let input = to_bytes(&[1.0, 2.0, 3.0, 4.0]);
        let mut encoded = vec![0u8; max_compressed_size(input.len(), 8)];
        let written = encode_block::<u64>(&input, &mut encoded, 16, ByteOrder::Little).unwrap();

        let mut decoded = vec![0u8; input.len()];
        let err = decode_block::<u64>(&encoded[..written - 1], 0, &mut decoded, 16, ByteOrder::Little)
            .unwrap_err();
        assert!(matches!(err, Error::Truncated { .. }));

        let err = decode_block::<u64>(&[], 0, &mut decoded, 16, ByteOrder::Little).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated { offset: 0, needed: 1, available: 0 }
        ));
    }

    #[test]
    fn test_invalid_size_code_u32() {
        // Size code 5 claims five zero bytes in a four-byte element.
        let mut decoded = [0u8; 8];
        let err = decode_block::<u32>(&[0b0101_0000], 0, &mut decoded, 4, ByteOrder::Little)
            .unwrap_err();
        assert!(matches!(err, Error::CorruptedData { .. }));
    }

    #[test]
    fn test_output_too_small() {
        let input = to_bytes(&[1.5, 2.5]);
        let mut output = [0u8; 4];
        let err = encode_block::<u64>(&input, &mut output, 16, ByteOrder::Little).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferTooSmall { provided: 4, .. }
        ));

        // Exactly the bytes the records need is enough.
        let mut full = vec![0u8; max_compressed_size(input.len(), 8)];
        let needed = encode_block::<u64>(&input, &mut full, 16, ByteOrder::Little).unwrap();
        let mut exact = vec![0u8; needed];
        assert_eq!(
            encode_block::<u64>(&input, &mut exact, 16, ByteOrder::Little).unwrap(),
            needed
        );
        assert_eq!(exact.as_slice(), &full[..needed]);
        let err = encode_block::<u64>(&input, &mut exact[..needed - 1], 16, ByteOrder::Little)
            .unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_start_past_input() {
        let mut decoded = [0u8; 8];
        let err = decode_block::<u64>(&[0x77], 5, &mut decoded, 4, ByteOrder::Little).unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated { offset: 5, available: 1, .. }
        ));

        // A start at the end of input is a stream with no records.
        let mut empty = [0u8; 0];
        let end = decode_block::<u64>(&[0x77], 1, &mut empty, 4, ByteOrder::Little).unwrap();
        assert_eq!(end, 1);
    }

    #[test]
    fn test_empty_input() {
        let mut encoded = [0u8; 8];
        assert_eq!(encode_block::<u64>(&[], &mut encoded, 4, ByteOrder::Little).unwrap(), 0);
        let mut decoded = [0u8; 0];
        assert_eq!(decode_block::<u64>(&[], 0, &mut decoded, 4, ByteOrder::Little).unwrap(), 0);
    }
}
